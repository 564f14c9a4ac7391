//! Filesystem layer for manifest overrides
//!
//! Provides the well-known project paths, normalized path handling and
//! safe JSON document I/O used by the core and CLI crates.

pub mod constants;
pub mod document;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use constants::ProjectPath;
pub use document::JsonDocument;
pub use error::{Error, Result};
pub use layout::ProjectLayout;
pub use path::NormalizedPath;
