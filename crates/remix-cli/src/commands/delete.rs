//! Delete command - remove a saved recipe.

use std::path::Path;

use super::open_store;

pub(crate) fn run(store_path: &Path, id: u64) -> miette::Result<()> {
    let store = open_store(store_path)?;
    store.delete(id).map_err(|e| miette::miette!("{e}"))?;

    println!("Deleted recipe {id}");
    Ok(())
}
