//! Substitute command - ingredient substitution suggestions.

use remix_ai::{AiConfig, RecipeGenerator};
use remix_core::SubstitutionRequest;

pub(crate) async fn run(ingredient: &str, context: Option<String>) -> miette::Result<()> {
    let request = SubstitutionRequest {
        ingredient: ingredient.to_string(),
        context,
    };

    let generator = RecipeGenerator::new(AiConfig::from_env());

    println!("Finding substitutions for {ingredient}...\n");
    let substitution = generator
        .suggest_substitution(&request)
        .await
        .map_err(|e| miette::miette!("{e}"))?;

    println!("{}", substitution.suggestion);
    Ok(())
}
