//! JSON document loading and saving

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

const FORMAT: &str = "JSON";

/// Loads and saves JSON documents.
///
/// Output is pretty-printed with two-space indentation and written
/// atomically. Key order is preserved end to end.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDocument;

impl JsonDocument {
    pub fn new() -> Self {
        Self
    }

    /// Load and deserialize a document.
    ///
    /// Returns [`Error::NotFound`] when the file is absent and
    /// [`Error::Parse`] when its content is not valid for `T`.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        tracing::debug!(%path, "Loaded document");
        serde_json::from_str(&content).map_err(|e| Error::Parse {
            path: path.to_native(),
            format: FORMAT.into(),
            message: e.to_string(),
        })
    }

    /// Serialize a value to pretty JSON text.
    pub fn render<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| Error::Serialize {
            path: path.to_native(),
            format: FORMAT.into(),
            message: e.to_string(),
        })
    }

    /// Serialize and atomically write a document, replacing any existing file.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let content = self.render(path, value)?;
        io::write_text(path, &content)
    }
}
