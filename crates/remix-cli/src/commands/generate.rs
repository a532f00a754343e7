//! Generate command - recipe from ingredients.

use std::path::Path;

use remix_ai::{AiConfig, RecipeGenerator};
use remix_core::{GeneratedRecipe, GenerationRequest};

use super::{open_store, parse_filters, split_ingredients};

pub(crate) async fn run(
    store_path: &Path,
    ingredients: &str,
    filters: &[String],
    save: Option<&str>,
) -> miette::Result<()> {
    let request = GenerationRequest {
        ingredients: split_ingredients(ingredients),
        filters: parse_filters(filters)?,
        targets: Default::default(),
    };

    let generator = RecipeGenerator::new(AiConfig::from_env());

    println!("Generating recipe...\n");
    let recipe = generator
        .generate_from_ingredients(&request)
        .await
        .map_err(|e| miette::miette!("{e}"))?;

    print_recipe(&recipe);

    if let Some(title) = save {
        save_recipe(store_path, title, &recipe)?;
    }

    Ok(())
}

pub(crate) fn print_recipe(recipe: &GeneratedRecipe) {
    println!("=== {} ===\n", recipe.title);
    println!("{}", recipe.body);
}

pub(crate) fn save_recipe(
    store_path: &Path,
    title: &str,
    recipe: &GeneratedRecipe,
) -> miette::Result<()> {
    let store = open_store(store_path)?;
    let filters = recipe.filters.iter().map(|f| f.to_string()).collect();
    let id = store
        .save(title, &recipe.body, recipe.ingredients.clone(), filters)
        .map_err(|e| miette::miette!("{e}"))?;
    println!("\nSaved as recipe {id}");
    Ok(())
}
