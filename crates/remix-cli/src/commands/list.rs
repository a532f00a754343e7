//! List command - show all saved recipes.

use std::path::Path;

use super::open_store;

pub(crate) fn run(store_path: &Path) -> miette::Result<()> {
    let store = open_store(store_path)?;
    let recipes = store.list_all();

    if recipes.is_empty() {
        println!("No saved recipes yet.");
        return Ok(());
    }

    println!("Saved recipes ({}):", recipes.len());
    for recipe in recipes {
        println!(
            "  [{}] {} (saved {})",
            recipe.id,
            recipe.title,
            recipe.saved_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
