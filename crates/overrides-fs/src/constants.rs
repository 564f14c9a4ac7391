//! Constants and enums for the well-known project documents.

use std::path::Path;

/// Default build directory, relative to the project root.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Standard project files read or written by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The base manifest (`public/manifest.json`)
    BaseManifest,
    /// The override store (`src/manifestOverrides.json`)
    OverrideStore,
    /// Pre-build staging output (`src/manifest.tmp.json`)
    StagingManifest,
    /// Artifact file name inside the build directory
    BuildManifest,
    /// The npm package descriptor (`package.json`)
    PackageJson,
    /// The development proxy script (`src/setupProxy.js`)
    SetupProxy,
}

impl ProjectPath {
    /// Get the path relative to the project root (or build dir for
    /// [`ProjectPath::BuildManifest`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseManifest => "public/manifest.json",
            Self::OverrideStore => "src/manifestOverrides.json",
            Self::StagingManifest => "src/manifest.tmp.json",
            Self::BuildManifest => "manifest.json",
            Self::PackageJson => "package.json",
            Self::SetupProxy => "src/setupProxy.js",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
