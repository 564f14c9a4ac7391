//! Core logic for manifest overrides
//!
//! This crate implements the parts of the tool with real semantics:
//!
//! - **Merge engine**: [`Manifest::merge`], a pure shallow union with
//!   identity-aligned merging of `mapping` (by `alias`) and `collections`
//!   (by `name`)
//! - **Override store**: [`OverrideStore`] and its creation path
//!   [`add_override`], with first-run [`scaffold`]ing
//! - **Selection**: [`Selector`] implementations and [`resolve`]
//! - **Apply orchestration**: [`apply`], which writes the merged manifest to
//!   the destination chosen by the [`Stage`]
//!
//! # Architecture
//!
//! ```text
//!        overrides-cli
//!              |
//!        overrides-core
//!              |
//!        overrides-fs
//! ```
//!
//! # Example
//!
//! ```
//! use overrides_core::Manifest;
//! use serde_json::json;
//!
//! let base = Manifest::try_from(json!({
//!     "mapping": [{"alias": "a", "x": 0, "y": 9}],
//!     "title": "t"
//! })).unwrap();
//! let overlay = Manifest::try_from(json!({
//!     "mapping": [{"alias": "a", "x": 1}]
//! })).unwrap();
//!
//! let merged = base.merge(&overlay);
//! assert_eq!(merged.get("mapping"), Some(&json!([{"alias": "a", "x": 1, "y": 9}])));
//! ```

pub mod apply;
pub mod documents;
pub mod error;
pub mod manifest;
pub mod mutator;
pub mod scaffold;
pub mod selection;
pub mod store;

pub use apply::{ApplyConfig, ApplyOutcome, Stage, apply};
pub use error::{Error, Result};
pub use manifest::{AlignedField, Manifest};
pub use mutator::{AddOutcome, add_override, validate_identifier};
pub use scaffold::ScaffoldReport;
pub use selection::{
    Choice, ChoicePrompt, ExplicitSelector, InteractiveSelector, Selection, Selector, resolve,
    selector_for,
};
pub use store::{OverrideRecord, OverrideStore};
