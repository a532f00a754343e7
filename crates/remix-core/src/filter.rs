//! Dietary filter vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A dietary restriction applied to recipe generation.
///
/// The variant order is the canonical order filters appear in prompts,
/// independent of the order the caller supplied them. Keeping that order
/// fixed makes generation reproducible for identical filter sets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryFilter {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    LowCarb,
    Keto,
    NutFree,
}

/// Error for a filter name outside the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dietary filter '{0}' (expected one of: vegetarian, vegan, gluten-free, dairy-free, low-carb, keto, nut-free)")]
pub struct UnknownFilter(pub String);

impl DietaryFilter {
    /// Every filter, in canonical order.
    pub const ALL: [DietaryFilter; 7] = [
        DietaryFilter::Vegetarian,
        DietaryFilter::Vegan,
        DietaryFilter::GlutenFree,
        DietaryFilter::DairyFree,
        DietaryFilter::LowCarb,
        DietaryFilter::Keto,
        DietaryFilter::NutFree,
    ];

    /// The kebab-case name used in prompts and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryFilter::Vegetarian => "vegetarian",
            DietaryFilter::Vegan => "vegan",
            DietaryFilter::GlutenFree => "gluten-free",
            DietaryFilter::DairyFree => "dairy-free",
            DietaryFilter::LowCarb => "low-carb",
            DietaryFilter::Keto => "keto",
            DietaryFilter::NutFree => "nut-free",
        }
    }
}

impl fmt::Display for DietaryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        DietaryFilter::ALL
            .iter()
            .find(|f| f.as_str() == name)
            .copied()
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}
