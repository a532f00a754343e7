//! File-backed recipe store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info};

use remix_core::{RecipeCollection, SavedRecipe};

use crate::error::StoreError;

/// Durable store for saved recipes.
///
/// Mutations follow a mutate-a-clone-then-commit discipline: the updated
/// collection is persisted first and only then swapped into memory, so a
/// failed write leaves both memory and disk exactly as they were.
pub struct RecipeStore {
    path: PathBuf,
    collection: Mutex<RecipeCollection>,
}

impl RecipeStore {
    /// Open a store backed by the given file.
    ///
    /// A missing file is an empty collection; the file is created lazily on
    /// the first save, so readers never fail just because nothing has been
    /// saved yet. An existing but unparsable file is surfaced as
    /// [`StoreError::Corrupt`] rather than silently reset.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let mut collection = if path.exists() {
            let content = fs::read_to_string(&path).map_err(StoreError::Read)?;
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.display().to_string(),
                source,
            })?
        } else {
            RecipeCollection::default()
        };

        // Legacy files carry recipes but no id counter; keep ids unique.
        collection.reconcile_next_id();

        debug!(
            "opened recipe store at {} ({} recipes)",
            path.display(),
            collection.recipes.len()
        );

        Ok(Self {
            path,
            collection: Mutex::new(collection),
        })
    }

    /// Save a recipe, returning its new id.
    ///
    /// Ids come from a persisted counter and are never reused, even after
    /// deletions.
    pub fn save(
        &self,
        title: &str,
        content: &str,
        ingredients: Vec<String>,
        dietary_filters: Vec<String>,
    ) -> Result<u64, StoreError> {
        let title = title.trim();
        if title.is_empty() || content.trim().is_empty() {
            return Err(StoreError::InvalidRecipe);
        }

        let mut collection = self.lock();
        let mut updated = collection.clone();

        let id = updated.next_id;
        updated.next_id += 1;
        updated.recipes.push(SavedRecipe {
            id,
            title: title.to_string(),
            content: content.to_string(),
            ingredients,
            dietary_filters,
            saved_at: Utc::now(),
        });

        self.persist(&updated)?;
        *collection = updated;

        info!("saved recipe {id}: {title}");
        Ok(id)
    }

    /// All saved recipes in insertion order, most recently saved last.
    pub fn list_all(&self) -> Vec<SavedRecipe> {
        self.lock().recipes.clone()
    }

    /// Fetch one recipe by id.
    pub fn get(&self, id: u64) -> Result<SavedRecipe, StoreError> {
        self.lock()
            .recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Delete a recipe by id. Deleting an unknown id is an error, not a
    /// no-op.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut collection = self.lock();
        if !collection.recipes.iter().any(|recipe| recipe.id == id) {
            return Err(StoreError::NotFound(id));
        }

        let mut updated = collection.clone();
        updated.recipes.retain(|recipe| recipe.id != id);

        self.persist(&updated)?;
        *collection = updated;

        info!("deleted recipe {id}");
        Ok(())
    }

    /// Case-insensitive substring search over titles and ingredients, in
    /// insertion order. No match is an empty result, not an error.
    pub fn search(&self, query: &str) -> Vec<SavedRecipe> {
        self.lock()
            .recipes
            .iter()
            .filter(|recipe| recipe.matches(query))
            .cloned()
            .collect()
    }

    /// Number of saved recipes.
    pub fn count(&self) -> usize {
        self.lock().recipes.len()
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, RecipeCollection> {
        // The collection is only replaced after a successful persist, so it
        // stays coherent even if a panic poisoned the lock.
        self.collection.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Write the collection to a temp file in the target directory, then
    /// rename it over the backing file. The rename keeps the on-disk
    /// document complete at every instant.
    fn persist(&self, collection: &RecipeCollection) -> Result<(), StoreError> {
        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(dir).map_err(StoreError::Write)?;

        let json = serde_json::to_string_pretty(collection).map_err(StoreError::Encode)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(StoreError::Write)?;
        tmp.write_all(json.as_bytes()).map_err(StoreError::Write)?;
        tmp.persist(&self.path).map_err(|e| StoreError::Write(e.error))?;

        Ok(())
    }
}
