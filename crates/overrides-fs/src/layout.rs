//! Project layout resolution
//!
//! Maps the well-known [`ProjectPath`] documents onto a concrete project root.

use std::path::Path;

use crate::{NormalizedPath, ProjectPath};

/// The on-disk layout of a project using manifest overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root; every well-known path is relative to it.
    pub root: NormalizedPath,
}

impl ProjectLayout {
    /// Create a layout rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: NormalizedPath::new(root),
        }
    }

    /// Resolve a well-known document against the root.
    pub fn path(&self, which: ProjectPath) -> NormalizedPath {
        self.root.join(which.as_str())
    }

    /// Path of the base manifest.
    pub fn base_manifest(&self) -> NormalizedPath {
        self.path(ProjectPath::BaseManifest)
    }

    /// Path of the override store.
    pub fn override_store(&self) -> NormalizedPath {
        self.path(ProjectPath::OverrideStore)
    }

    /// Path of the pre-build staging manifest.
    pub fn staging_manifest(&self) -> NormalizedPath {
        self.path(ProjectPath::StagingManifest)
    }

    /// Path of the manifest artifact inside `build_dir`.
    ///
    /// A relative `build_dir` is resolved against the root.
    pub fn build_manifest(&self, build_dir: impl AsRef<Path>) -> NormalizedPath {
        self.root
            .join(build_dir)
            .join(ProjectPath::BuildManifest.as_str())
    }
}
