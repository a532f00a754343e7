//! Macros command - recipe from nutritional targets.

use std::path::Path;

use remix_ai::{AiConfig, RecipeGenerator};
use remix_core::{GenerationRequest, MacroTargets};

use super::generate::{print_recipe, save_recipe};
use super::parse_filters;

#[allow(clippy::too_many_arguments)]
pub(crate) async fn run(
    store_path: &Path,
    calories: Option<u32>,
    protein: Option<u32>,
    carbs: Option<u32>,
    fat: Option<u32>,
    filters: &[String],
    save: Option<&str>,
) -> miette::Result<()> {
    let request = GenerationRequest {
        ingredients: Vec::new(),
        filters: parse_filters(filters)?,
        targets: MacroTargets {
            calories,
            protein_g: protein,
            carbs_g: carbs,
            fat_g: fat,
        },
    };

    let generator = RecipeGenerator::new(AiConfig::from_env());

    println!("Generating macro-targeted recipe...\n");
    let recipe = generator
        .generate_from_macros(&request)
        .await
        .map_err(|e| miette::miette!("{e}"))?;

    print_recipe(&recipe);

    if let Some(title) = save {
        save_recipe(store_path, title, &recipe)?;
    }

    Ok(())
}
