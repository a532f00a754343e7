//! # Grocery Remix AI Integration
//!
//! This crate turns recipe requests into prompts, sends them to a locally
//! hosted model (LM Studio's OpenAI-compatible server), and parses the
//! free-text reply into a usable result.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │   Request    │ --> │ RecipeGenerator  │ --> │ GeneratedRecipe │
//! │ (validated)  │     │ prompt → model → │     │  (title + body) │
//! └──────────────┘     │      parse       │     └─────────────────┘
//!                      └──────────────────┘
//!                              │
//!                      ┌───────┴────────┐
//!                      │ LmStudioClient │
//!                      └────────────────┘
//! ```
//!
//! The generator validates before building a prompt, so invalid requests
//! never reach the endpoint. Inference failures propagate verbatim; the
//! response parser, by contrast, never fails.
//!
//! ## Usage
//!
//! ```ignore
//! use remix_ai::{AiConfig, RecipeGenerator};
//! use remix_core::GenerationRequest;
//!
//! let generator = RecipeGenerator::new(AiConfig::from_env());
//! let recipe = generator.generate_from_ingredients(&request).await?;
//! ```

mod client;
mod config;
mod generator;
mod parser;
mod prompt;

pub use client::{ClientError, LmStudioClient};
pub use config::{AiConfig, AiConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use generator::{CompletionBackend, GeneratorError, RecipeGenerator};
pub use parser::{parse_recipe, parse_substitution, ParsedRecipe, FALLBACK_TITLE};
pub use prompt::{
    macro_prompt, recipe_prompt, substitution_prompt, ChatPrompt, MACRO_SYSTEM_PROMPT,
    RECIPE_SYSTEM_PROMPT, SUBSTITUTION_SYSTEM_PROMPT,
};
