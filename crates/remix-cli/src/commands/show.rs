//! Show command - print one saved recipe in full.

use std::path::Path;

use super::open_store;

pub(crate) fn run(store_path: &Path, id: u64) -> miette::Result<()> {
    let store = open_store(store_path)?;
    let recipe = store.get(id).map_err(|e| miette::miette!("{e}"))?;

    println!("=== {} ===", recipe.title);
    if !recipe.ingredients.is_empty() {
        println!("Ingredients: {}", recipe.ingredients.join(", "));
    }
    if !recipe.dietary_filters.is_empty() {
        println!("Dietary: {}", recipe.dietary_filters.join(", "));
    }
    println!("Saved: {}", recipe.saved_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", recipe.content);

    Ok(())
}
