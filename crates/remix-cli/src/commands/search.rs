//! Search command - find saved recipes by title or ingredient.

use std::path::Path;

use super::open_store;

pub(crate) fn run(store_path: &Path, query: &str) -> miette::Result<()> {
    let store = open_store(store_path)?;
    let hits = store.search(query);

    if hits.is_empty() {
        println!("No recipes matched '{query}'.");
        return Ok(());
    }

    println!("Found {} recipe(s):", hits.len());
    for recipe in hits {
        println!("  [{}] {}", recipe.id, recipe.title);
    }

    Ok(())
}
