//! Save command - persist a recipe from a text file.

use std::fs;
use std::path::Path;

use super::{open_store, parse_filters, split_ingredients};

pub(crate) fn run(
    store_path: &Path,
    title: &str,
    file: &Path,
    ingredients: Option<&str>,
    filters: &[String],
) -> miette::Result<()> {
    let content = fs::read_to_string(file)
        .map_err(|e| miette::miette!("Failed to read {}: {}", file.display(), e))?;

    let ingredients = ingredients.map(split_ingredients).unwrap_or_default();
    let filters: Vec<String> = parse_filters(filters)?
        .iter()
        .map(|filter| filter.to_string())
        .collect();

    let store = open_store(store_path)?;
    let id = store
        .save(title, &content, ingredients, filters)
        .map_err(|e| miette::miette!("{e}"))?;

    println!("Saved as recipe {id}");
    Ok(())
}
