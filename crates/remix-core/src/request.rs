//! Generation and substitution requests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::DietaryFilter;

/// Nutritional targets a generated recipe should approximate.
///
/// Each field is per serving; absent fields are unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<u32>,
}

impl MacroTargets {
    /// True when no target is set.
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein_g.is_none()
            && self.carbs_g.is_none()
            && self.fat_g.is_none()
    }
}

/// Errors from request validation.
///
/// Validation runs before any prompt is built, so an invalid request never
/// reaches the inference endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("request needs at least one ingredient or one macro target")]
    EmptyRequest,
    #[error("at least one ingredient is required")]
    NoIngredients,
    #[error("at least one macro target (calories, protein, carbs, fat) is required")]
    NoTargets,
    #[error("ingredient names must not be blank")]
    BlankIngredient,
}

/// A request to generate a recipe.
///
/// Ingredients keep their input order and casing; duplicates are allowed.
/// Filters are a set in canonical order (see [`DietaryFilter`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub filters: BTreeSet<DietaryFilter>,
    #[serde(default)]
    pub targets: MacroTargets,
}

impl GenerationRequest {
    /// Check the structural invariant: at least one ingredient or one macro
    /// target, and no blank ingredient names.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ingredients.is_empty() && self.targets.is_empty() {
            return Err(ValidationError::EmptyRequest);
        }
        if self.ingredients.iter().any(|i| i.trim().is_empty()) {
            return Err(ValidationError::BlankIngredient);
        }
        Ok(())
    }
}

/// A request for an ingredient substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRequest {
    pub ingredient: String,
    /// Free-text context, e.g. the dish the ingredient is going into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl SubstitutionRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ingredient.trim().is_empty() {
            return Err(ValidationError::BlankIngredient);
        }
        Ok(())
    }
}
