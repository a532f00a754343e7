//! Recipe generation pipeline: validate, build prompt, infer, parse.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use remix_core::{
    GeneratedRecipe, GenerationRequest, Substitution, SubstitutionRequest, ValidationError,
};

use crate::client::{ClientError, LmStudioClient};
use crate::config::AiConfig;
use crate::parser;
use crate::prompt::{self, ChatPrompt};

/// Backend that turns a built prompt into raw model text.
///
/// The production backend is [`LmStudioClient`]; tests substitute spies.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ClientError>;
}

#[async_trait]
impl CompletionBackend for LmStudioClient {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ClientError> {
        LmStudioClient::complete(self, prompt).await
    }
}

/// Errors from the generation pipeline.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Caller input violates a precondition. The backend is never invoked
    /// for such a request.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// Inference failure, surfaced verbatim. Never retried here.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Generates recipes and substitutions through a completion backend.
pub struct RecipeGenerator {
    backend: Box<dyn CompletionBackend>,
}

impl RecipeGenerator {
    /// Create a generator backed by LM Studio.
    pub fn new(config: AiConfig) -> Self {
        Self::with_backend(Box::new(LmStudioClient::new(config)))
    }

    /// Create a generator with an explicit backend.
    pub fn with_backend(backend: Box<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Generate a recipe from a list of ingredients.
    ///
    /// The result echoes the request's ingredients and filters verbatim,
    /// whatever the model replied.
    pub async fn generate_from_ingredients(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedRecipe, GeneratorError> {
        if request.ingredients.is_empty() {
            return Err(ValidationError::NoIngredients.into());
        }
        request.validate()?;

        let prompt = prompt::recipe_prompt(request);
        debug!("requesting recipe for {} ingredients", request.ingredients.len());
        let raw = self.backend.complete(&prompt).await?;

        let parsed = parser::parse_recipe(&raw);
        info!(title = %parsed.title, "generated recipe");

        Ok(GeneratedRecipe {
            title: parsed.title,
            title_inferred: parsed.title_inferred,
            body: parsed.body,
            ingredients: request.ingredients.clone(),
            filters: request.filters.clone(),
            targets: None,
        })
    }

    /// Generate a recipe from macro targets.
    pub async fn generate_from_macros(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedRecipe, GeneratorError> {
        if request.targets.is_empty() {
            return Err(ValidationError::NoTargets.into());
        }
        request.validate()?;

        let prompt = prompt::macro_prompt(request);
        debug!("requesting macro-targeted recipe");
        let raw = self.backend.complete(&prompt).await?;

        let parsed = parser::parse_recipe(&raw);
        info!(title = %parsed.title, "generated macro-targeted recipe");

        Ok(GeneratedRecipe {
            title: parsed.title,
            title_inferred: parsed.title_inferred,
            body: parsed.body,
            ingredients: request.ingredients.clone(),
            filters: request.filters.clone(),
            targets: Some(request.targets),
        })
    }

    /// Suggest substitutions for a single ingredient.
    pub async fn suggest_substitution(
        &self,
        request: &SubstitutionRequest,
    ) -> Result<Substitution, GeneratorError> {
        request.validate()?;

        let prompt = prompt::substitution_prompt(request);
        debug!(ingredient = %request.ingredient, "requesting substitution");
        let raw = self.backend.complete(&prompt).await?;

        Ok(Substitution {
            ingredient: request.ingredient.clone(),
            suggestion: parser::parse_substitution(&raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remix_core::{DietaryFilter, MacroTargets};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Backend that records how often it was called and replies with a
    /// fixed completion.
    struct SpyBackend {
        calls: Arc<AtomicUsize>,
        reply: String,
    }

    impl SpyBackend {
        fn new(reply: &str) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    calls: calls.clone(),
                    reply: reply.to_string(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl CompletionBackend for SpyBackend {
        async fn complete(&self, _prompt: &ChatPrompt) -> Result<String, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    /// Backend that simulates an endpoint nobody is listening on.
    struct UnreachableBackend;

    #[async_trait]
    impl CompletionBackend for UnreachableBackend {
        async fn complete(&self, _prompt: &ChatPrompt) -> Result<String, ClientError> {
            Err(ClientError::Unreachable(
                "http://localhost:1234/v1".to_string(),
            ))
        }
    }

    fn ingredients_request(ingredients: &[&str]) -> GenerationRequest {
        GenerationRequest {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_ingredients_fails_without_backend_call() {
        let (backend, calls) = SpyBackend::new("# Anything");
        let generator = RecipeGenerator::with_backend(Box::new(backend));

        let result = generator
            .generate_from_ingredients(&GenerationRequest::default())
            .await;

        assert!(matches!(
            result,
            Err(GeneratorError::InvalidRequest(
                ValidationError::NoIngredients
            ))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_targets_fails_without_backend_call() {
        let (backend, calls) = SpyBackend::new("# Anything");
        let generator = RecipeGenerator::with_backend(Box::new(backend));

        let result = generator
            .generate_from_macros(&ingredients_request(&["rice"]))
            .await;

        assert!(matches!(
            result,
            Err(GeneratorError::InvalidRequest(ValidationError::NoTargets))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_substitution_ingredient_fails_without_backend_call() {
        let (backend, calls) = SpyBackend::new("anything");
        let generator = RecipeGenerator::with_backend(Box::new(backend));

        let result = generator
            .suggest_substitution(&SubstitutionRequest {
                ingredient: "  ".to_string(),
                context: None,
            })
            .await;

        assert!(matches!(result, Err(GeneratorError::InvalidRequest(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_result_echoes_inputs_regardless_of_reply() {
        let (backend, calls) = SpyBackend::new("# Completely Unrelated Dish\nbody");
        let generator = RecipeGenerator::with_backend(Box::new(backend));

        let mut request = ingredients_request(&["chicken", "lemon"]);
        request.filters.insert(DietaryFilter::GlutenFree);

        let recipe = generator
            .generate_from_ingredients(&request)
            .await
            .unwrap();

        assert_eq!(recipe.ingredients, vec!["chicken", "lemon"]);
        assert!(recipe.filters.contains(&DietaryFilter::GlutenFree));
        assert_eq!(recipe.targets, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_macro_result_echoes_targets() {
        let (backend, _calls) = SpyBackend::new("# Protein Bowl\nbody");
        let generator = RecipeGenerator::with_backend(Box::new(backend));

        let targets = MacroTargets {
            calories: Some(550),
            protein_g: Some(45),
            ..Default::default()
        };
        let request = GenerationRequest {
            targets,
            ..Default::default()
        };

        let recipe = generator.generate_from_macros(&request).await.unwrap();
        assert_eq!(recipe.targets, Some(targets));
        assert!(recipe.ingredients.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_title_is_flagged() {
        let (backend, _calls) = SpyBackend::new(
            "Sure, here's something you could cook tonight with what you have on hand. \
             Start by heating a pan.",
        );
        let generator = RecipeGenerator::with_backend(Box::new(backend));

        let recipe = generator
            .generate_from_ingredients(&ingredients_request(&["eggs"]))
            .await
            .unwrap();

        assert!(!recipe.title_inferred);
        assert_eq!(recipe.title, parser::FALLBACK_TITLE);
        assert!(recipe.body.starts_with("Sure, here's"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_propagates() {
        let generator = RecipeGenerator::with_backend(Box::new(UnreachableBackend));

        let result = generator
            .generate_from_ingredients(&ingredients_request(&["beans"]))
            .await;

        assert!(matches!(
            result,
            Err(GeneratorError::Client(ClientError::Unreachable(_)))
        ));
    }

    #[tokio::test]
    async fn test_substitution_trims_reply() {
        let (backend, _calls) = SpyBackend::new("\n  Greek yogurt works 1:1.  \n");
        let generator = RecipeGenerator::with_backend(Box::new(backend));

        let substitution = generator
            .suggest_substitution(&SubstitutionRequest {
                ingredient: "sour cream".to_string(),
                context: None,
            })
            .await
            .unwrap();

        assert_eq!(substitution.ingredient, "sour cream");
        assert_eq!(substitution.suggestion, "Greek yogurt works 1:1.");
    }
}
