//! CLI commands.

pub mod check;
pub mod delete;
pub mod generate;
pub mod list;
pub mod macros;
pub mod save;
pub mod search;
pub mod show;
pub mod substitute;

use std::collections::BTreeSet;
use std::path::Path;

use remix_core::DietaryFilter;
use remix_store::RecipeStore;

/// Split a comma-separated ingredient list, dropping blanks.
pub(crate) fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse repeated `--filter` values against the fixed vocabulary.
pub(crate) fn parse_filters(raw: &[String]) -> miette::Result<BTreeSet<DietaryFilter>> {
    raw.iter()
        .map(|name| name.parse().map_err(|e| miette::miette!("{e}")))
        .collect()
}

pub(crate) fn open_store(path: &Path) -> miette::Result<RecipeStore> {
    RecipeStore::open(path).map_err(|e| miette::miette!("{e}"))
}
