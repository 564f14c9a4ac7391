//! Loading and saving the project documents

use overrides_fs::{JsonDocument, NormalizedPath, ProjectLayout};

use crate::{Manifest, OverrideStore, Result};

/// Load the base manifest (`public/manifest.json`).
pub fn load_base_manifest(layout: &ProjectLayout) -> Result<Manifest> {
    Ok(JsonDocument::new().load(&layout.base_manifest())?)
}

/// Load the override store (`src/manifestOverrides.json`).
pub fn load_store(layout: &ProjectLayout) -> Result<OverrideStore> {
    Ok(JsonDocument::new().load(&layout.override_store())?)
}

/// Persist the override store, replacing the existing document.
pub fn save_store(layout: &ProjectLayout, store: &OverrideStore) -> Result<()> {
    let path = layout.override_store();
    JsonDocument::new().save(&path, store)?;
    tracing::debug!(%path, records = store.len(), "Saved override store");
    Ok(())
}

/// Write a merged manifest to `path`.
pub fn write_manifest(path: &NormalizedPath, manifest: &Manifest) -> Result<()> {
    JsonDocument::new().save(path, manifest)?;
    Ok(())
}
