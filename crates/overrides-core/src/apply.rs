//! Apply orchestration
//!
//! Loads the base manifest and the override store, resolves the selection,
//! merges, and writes the result to the destination chosen by the stage.

use std::path::PathBuf;

use overrides_fs::constants::DEFAULT_BUILD_DIR;
use overrides_fs::{NormalizedPath, ProjectLayout};

use crate::documents::{load_base_manifest, load_store, write_manifest};
use crate::selection::{Selection, Selector, resolve};
use crate::{Error, Manifest, Result};

/// Step name that selects the pre-build staging destination.
pub const START_STAGE: &str = "start";

/// When the apply step runs relative to the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Before the build: write the staging manifest in the source tree
    Start,
    /// After the build: write into the build directory
    Build,
}

impl Stage {
    /// Interpret a step argument. Only `"start"` means [`Stage::Start`].
    pub fn from_step(step: &str) -> Self {
        if step == START_STAGE {
            Self::Start
        } else {
            Self::Build
        }
    }
}

impl From<&str> for Stage {
    fn from(step: &str) -> Self {
        Self::from_step(step)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Build => write!(f, "build"),
        }
    }
}

/// Configuration for an apply run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyConfig {
    /// Project whose documents are read and written
    pub layout: ProjectLayout,
    /// Build output directory, relative to the project root unless absolute
    pub build_dir: PathBuf,
}

impl ApplyConfig {
    /// Configuration for the project at `layout` with the default build dir.
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
        }
    }

    pub fn with_build_dir(mut self, build_dir: impl Into<PathBuf>) -> Self {
        self.build_dir = build_dir.into();
        self
    }

    /// Where the merged manifest is written for `stage`.
    pub fn destination(&self, stage: Stage) -> NormalizedPath {
        match stage {
            Stage::Start => self.layout.staging_manifest(),
            Stage::Build => self.layout.build_manifest(&self.build_dir),
        }
    }
}

/// Result of a successful apply.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The merged manifest was written
    Written {
        id: String,
        path: NormalizedPath,
        manifest: Manifest,
    },
    /// The default manifest was selected; nothing was written
    Skipped,
}

/// Run the full read-merge-write cycle.
///
/// Both input documents must load before selection starts. Selecting the
/// default manifest is a successful no-op.
pub fn apply(config: &ApplyConfig, stage: Stage, selector: &dyn Selector) -> Result<ApplyOutcome> {
    let base = load_base_manifest(&config.layout)?;
    let store = load_store(&config.layout)?;
    tracing::debug!(%stage, overrides = store.len(), "Loaded apply inputs");

    let id = match resolve(&store, selector)? {
        Selection::Default => {
            tracing::info!("Default manifest selected; no overrides applied");
            return Ok(ApplyOutcome::Skipped);
        }
        Selection::Override(id) => id,
    };

    let record = store
        .get(&id)
        .ok_or_else(|| Error::UnknownIdentifier { id: id.clone() })?;
    let merged = base.merge(&record.manifest);

    let path = config.destination(stage);
    write_manifest(&path, &merged)?;
    tracing::info!(%path, id = %id, "Wrote merged manifest");

    Ok(ApplyOutcome::Written {
        id,
        path,
        manifest: merged,
    })
}
