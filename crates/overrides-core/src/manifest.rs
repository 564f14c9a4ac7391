//! Manifest documents and the override merge engine
//!
//! A manifest is an arbitrary JSON object. Merging is a shallow union where
//! the override wins, except for the identity-aligned arrays described by
//! [`AlignedField`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Array-valued manifest fields merged element by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignedField {
    /// `mapping`, aligned on each element's `alias`
    Mapping,
    /// `collections`, aligned on each element's `name`
    Collections,
}

impl AlignedField {
    pub const ALL: [AlignedField; 2] = [AlignedField::Mapping, AlignedField::Collections];

    /// The top-level manifest key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Mapping => "mapping",
            Self::Collections => "collections",
        }
    }

    /// The element field that identifies an entry.
    pub fn identity(&self) -> &'static str {
        match self {
            Self::Mapping => "alias",
            Self::Collections => "name",
        }
    }
}

/// A JSON manifest document (top level must be an object).
///
/// Key order is preserved through load, merge and save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Merge `overlay` onto this manifest, returning a new manifest.
    ///
    /// 1. Every key in `overlay` replaces the same key here; keys only in
    ///    `overlay` are appended.
    /// 2. When both sides hold an array under an [`AlignedField`] key, the
    ///    result keeps exactly the base elements in base order. Each base
    ///    element is shallow-merged with the first overlay element carrying
    ///    the same identity value. Overlay elements with no base
    ///    counterpart are dropped.
    ///
    /// `self.merge(&Manifest::new()) == self`.
    pub fn merge(&self, overlay: &Manifest) -> Manifest {
        let mut merged = self.0.clone();
        for (key, value) in &overlay.0 {
            merged.insert(key.clone(), value.clone());
        }

        for field in AlignedField::ALL {
            let base = self.0.get(field.key()).and_then(Value::as_array);
            let over = overlay.0.get(field.key()).and_then(Value::as_array);
            if let (Some(base), Some(over)) = (base, over) {
                let aligned = align_elements(base, over, field.identity());
                tracing::debug!(
                    field = field.key(),
                    base = base.len(),
                    overlay = over.len(),
                    "Aligned array field"
                );
                merged.insert(field.key().to_string(), Value::Array(aligned));
            }
        }

        Manifest(merged)
    }
}

/// Shallow-merge overlay elements onto base elements sharing an identity.
fn align_elements(base: &[Value], overlay: &[Value], identity: &str) -> Vec<Value> {
    base.iter()
        .map(|element| {
            let (Some(fields), Some(id)) = (element.as_object(), element.get(identity)) else {
                return element.clone();
            };
            let patch = overlay
                .iter()
                .find(|candidate| candidate.get(identity) == Some(id))
                .and_then(Value::as_object);
            match patch {
                Some(patch) => {
                    let mut fields = fields.clone();
                    for (key, value) in patch {
                        fields.insert(key.clone(), value.clone());
                    }
                    Value::Object(fields)
                }
                None => element.clone(),
            }
        })
        .collect()
}

impl From<Map<String, Value>> for Manifest {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Manifest {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

impl From<Manifest> for Value {
    fn from(manifest: Manifest) -> Self {
        Value::Object(manifest.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn manifest(value: Value) -> Manifest {
        Manifest::try_from(value).unwrap()
    }

    #[test]
    fn test_merge_empty_override_is_identity() {
        let base = manifest(json!({
            "title": "t",
            "mapping": [{"alias": "a", "x": 0}],
            "nested": {"deep": true}
        }));
        assert_eq!(base.merge(&Manifest::new()), base);
    }

    #[test]
    fn test_merge_scalar_override_wins() {
        let base = manifest(json!({"title": "base", "version": 1}));
        let overlay = manifest(json!({"title": "prod"}));

        let merged = base.merge(&overlay);

        assert_eq!(merged, manifest(json!({"title": "prod", "version": 1})));
    }

    #[test]
    fn test_merge_objects_are_replaced_not_deep_merged() {
        let base = manifest(json!({"theme": {"color": "red", "font": "serif"}}));
        let overlay = manifest(json!({"theme": {"color": "blue"}}));

        let merged = base.merge(&overlay);

        assert_eq!(merged.get("theme"), Some(&json!({"color": "blue"})));
    }

    #[test]
    fn test_merge_adds_new_keys_after_existing() {
        let base = manifest(json!({"b": 1, "a": 2}));
        let overlay = manifest(json!({"c": 3, "a": 4}));

        let merged = base.merge(&overlay);
        let keys: Vec<&str> = merged.as_map().keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(merged.get("a"), Some(&json!(4)));
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let base = manifest(json!({"mapping": [{"alias": "a", "x": 0}]}));
        let overlay = manifest(json!({"mapping": [{"alias": "a", "x": 1}]}));
        let base_before = base.clone();
        let overlay_before = overlay.clone();

        let _ = base.merge(&overlay);

        assert_eq!(base, base_before);
        assert_eq!(overlay, overlay_before);
    }

    #[test]
    fn test_aligned_field_identities() {
        assert_eq!(AlignedField::Mapping.key(), "mapping");
        assert_eq!(AlignedField::Mapping.identity(), "alias");
        assert_eq!(AlignedField::Collections.key(), "collections");
        assert_eq!(AlignedField::Collections.identity(), "name");
    }

    #[test]
    fn test_align_uses_first_matching_overlay_element() {
        let base = vec![json!({"alias": "a", "x": 0})];
        let overlay = vec![json!({"alias": "a", "x": 1}), json!({"alias": "a", "x": 2})];

        let aligned = align_elements(&base, &overlay, "alias");

        assert_eq!(aligned, vec![json!({"alias": "a", "x": 1})]);
    }

    #[test]
    fn test_align_keeps_non_object_and_unidentified_elements() {
        let base = vec![json!("plain"), json!({"x": 0})];
        let overlay = vec![json!({"x": 1})];

        let aligned = align_elements(&base, &overlay, "alias");

        assert_eq!(aligned, base);
    }
}
