//! # Grocery Remix Core
//!
//! Shared data model for the recipe system: requests, generated results,
//! and the persisted collection format. This crate is deliberately free of
//! I/O so the AI and storage crates can agree on types without depending
//! on each other.
//!
//! ## Lifecycle
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │ GenerationRequest │ --> │ GeneratedRecipe │ --> │   SavedRecipe   │
//! │ (validated input) │     │   (ephemeral)   │     │   (durable)     │
//! └──────────────────┘     └─────────────────┘     └─────────────────┘
//! ```
//!
//! A `GeneratedRecipe` only exists for the duration of a generation call;
//! it becomes a `SavedRecipe` when the user gives it a title and saves it.

mod filter;
mod recipe;
mod request;

pub use filter::{DietaryFilter, UnknownFilter};
pub use recipe::{GeneratedRecipe, RecipeCollection, SavedRecipe, Substitution};
pub use request::{GenerationRequest, MacroTargets, SubstitutionRequest, ValidationError};
