//! Generated and persisted recipe records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{DietaryFilter, MacroTargets};

/// A recipe fresh out of the model.
///
/// Ephemeral: lives only until the caller decides whether to persist it.
/// The body is the model's full reply, never reformatted or truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub title: String,
    /// True when the title was read from the reply itself, false when it is
    /// the generic fallback label.
    pub title_inferred: bool,
    pub body: String,
    /// The ingredients the recipe was requested with, echoed verbatim.
    pub ingredients: Vec<String>,
    /// The filters the recipe was requested with, echoed verbatim.
    pub filters: BTreeSet<DietaryFilter>,
    /// Macro targets, echoed for macro-driven requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<MacroTargets>,
}

/// A substitution suggestion for a single ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub ingredient: String,
    pub suggestion: String,
}

/// A durably persisted, user-titled recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_filters: Vec<String>,
    pub saved_at: DateTime<Utc>,
}

impl SavedRecipe {
    /// Case-insensitive substring match against the title or any ingredient.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&query))
    }
}

/// The full ordered set of saved recipes, persisted as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCollection {
    /// Next id to assign. Monotonic; ids are never reused after deletion.
    #[serde(default = "first_id")]
    pub next_id: u64,
    #[serde(default)]
    pub recipes: Vec<SavedRecipe>,
}

fn first_id() -> u64 {
    1
}

impl RecipeCollection {
    /// Bring `next_id` past every existing id.
    ///
    /// Collections written before the counter existed carry recipes but no
    /// counter, so `next_id` deserializes to 1; without reconciling, the
    /// next save would assign an id the collection already contains.
    pub fn reconcile_next_id(&mut self) {
        let max_id = self.recipes.iter().map(|recipe| recipe.id).max().unwrap_or(0);
        if self.next_id <= max_id {
            self.next_id = max_id + 1;
        }
    }
}

impl Default for RecipeCollection {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            recipes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, ingredients: &[&str]) -> SavedRecipe {
        SavedRecipe {
            id: 1,
            title: title.to_string(),
            content: "body".to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            dietary_filters: vec![],
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        let r = recipe("Gluten-Free Pasta", &[]);
        assert!(r.matches("gluten"));
        assert!(r.matches("PASTA"));
        assert!(!r.matches("chicken"));
    }

    #[test]
    fn test_matches_any_ingredient() {
        let r = recipe("Weeknight Dinner", &["chicken thighs", "Lemon"]);
        assert!(r.matches("lemon"));
        assert!(r.matches("thigh"));
        assert!(!r.matches("beef"));
    }

    #[test]
    fn test_collection_default_starts_at_one() {
        let collection = RecipeCollection::default();
        assert_eq!(collection.next_id, 1);
        assert!(collection.recipes.is_empty());
    }

    #[test]
    fn test_collection_missing_next_id_defaults() {
        // Collections written before the counter existed still load.
        let collection: RecipeCollection = serde_json::from_str(r#"{"recipes":[]}"#).unwrap();
        assert_eq!(collection.next_id, 1);
    }

    #[test]
    fn test_reconcile_next_id_skips_existing_ids() {
        let mut collection = RecipeCollection::default();
        collection.recipes.push(SavedRecipe {
            id: 3,
            ..recipe("Legacy", &[])
        });

        collection.reconcile_next_id();
        assert_eq!(collection.next_id, 4);

        // Already-reconciled collections are left alone.
        collection.next_id = 10;
        collection.reconcile_next_id();
        assert_eq!(collection.next_id, 10);
    }

    #[test]
    fn test_reconcile_empty_collection_keeps_first_id() {
        let mut collection = RecipeCollection::default();
        collection.reconcile_next_id();
        assert_eq!(collection.next_id, 1);
    }
}
