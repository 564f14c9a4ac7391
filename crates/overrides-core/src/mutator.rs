//! Creation of new override records

use overrides_fs::ProjectLayout;

use crate::documents::{load_store, save_store};
use crate::scaffold::{self, ScaffoldReport};
use crate::{Error, Result};

/// What `add_override` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The record was appended to the existing store
    Added,
    /// No store existed yet; first-run setup created it with the record
    Scaffolded(ScaffoldReport),
}

/// Trim an identifier and reject empty ones.
pub fn validate_identifier(id: &str) -> Result<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidIdentifier {
            reason: "identifier cannot be empty".into(),
        });
    }
    Ok(trimmed)
}

/// Add a record with an empty partial manifest to the project's store.
///
/// An absent store document triggers [`scaffold::setup`]. A store that
/// exists but fails to parse is reported and left untouched, as is a store
/// that already contains `id`.
pub fn add_override(layout: &ProjectLayout, id: &str, description: &str) -> Result<AddOutcome> {
    let id = validate_identifier(id)?;

    let mut store = match load_store(layout) {
        Ok(store) => store,
        Err(Error::MissingDocument { path }) => {
            tracing::debug!(path = %path.display(), "No override store; running first-time setup");
            let report = scaffold::setup(layout, id, description)?;
            return Ok(AddOutcome::Scaffolded(report));
        }
        Err(e) => return Err(e),
    };

    store.add(id, description)?;
    save_store(layout, &store)?;
    tracing::info!(id, "Added override");
    Ok(AddOutcome::Added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("prod", "prod")]
    #[case("  staging ", "staging")]
    #[case("eu-west_1", "eu-west_1")]
    fn test_validate_identifier_accepts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_identifier(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_validate_identifier_rejects_empty(#[case] input: &str) {
        assert!(matches!(
            validate_identifier(input),
            Err(Error::InvalidIdentifier { .. })
        ));
    }
}
