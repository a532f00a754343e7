//! # Grocery Remix Store
//!
//! Durable persistence for saved recipes. The whole collection lives in a
//! single JSON document and is rewritten atomically on every mutation, so
//! a reader never observes a partially written collection.
//!
//! The store is an explicit object with an injected backing path; there is
//! no process-wide singleton. All access to the in-memory collection goes
//! through one mutex, serializing mutations against each other and against
//! reads.

mod error;
mod store;

pub use error::StoreError;
pub use store::RecipeStore;
