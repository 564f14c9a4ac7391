//! Shared test utilities for the manifest-overrides workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`TestProject`] builds a scratch project with a base manifest, an
//!   override store and the npm files touched by first-run setup.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

/// Base manifest location relative to the project root.
pub const BASE_MANIFEST: &str = "public/manifest.json";
/// Override store location relative to the project root.
pub const OVERRIDE_STORE: &str = "src/manifestOverrides.json";
/// Staging output location relative to the project root.
pub const STAGING_MANIFEST: &str = "src/manifest.tmp.json";

/// A temporary project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use overrides_test_utils::TestProject;
/// use serde_json::json;
///
/// let project = TestProject::new()
///     .with_base_manifest(&json!({"title": "t"}))
///     .with_store(&json!({}));
/// project.assert_file_exists("public/manifest.json");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `public/manifest.json`.
    pub fn with_base_manifest(self, manifest: &Value) -> Self {
        self.write_json(BASE_MANIFEST, manifest);
        self
    }

    /// Write `src/manifestOverrides.json`.
    pub fn with_store(self, store: &Value) -> Self {
        self.write_json(OVERRIDE_STORE, store);
        self
    }

    /// Write an arbitrary file relative to the root, creating parents.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {}", full_path.display(), e));
    }

    /// Write a pretty-printed JSON file relative to the root.
    pub fn write_json(&self, path: &str, value: &Value) {
        self.write_file(path, &serde_json::to_string_pretty(value).unwrap());
    }

    /// Read a file relative to the root.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Read and parse a JSON file relative to the root.
    pub fn read_json(&self, path: &str) -> Value {
        let content = self.read_file(path);
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}\n{}", path, e, content))
    }

    /// Assert that `path` (relative to the root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
