//! Selection of the override to apply
//!
//! The orchestrator depends on a [`Selector`]. [`ExplicitSelector`] serves an
//! identifier given on the command line; [`InteractiveSelector`] delegates to
//! a [`ChoicePrompt`] collaborator. [`selector_for`] picks between them
//! based on whether an identifier was supplied.

use crate::{Error, OverrideStore, Result};

/// Label of the synthetic choice that keeps the base manifest.
pub const DEFAULT_CHOICE_LABEL: &str = "Use default manifest";

/// Message shown by the interactive prompt.
pub const SELECTION_PROMPT: &str = "Which overrides should be applied?";

/// Outcome of selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Keep the base manifest; nothing is applied
    Default,
    /// Apply the override with this identifier
    Override(String),
}

impl Selection {
    /// The selected identifier, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Override(id) => Some(id),
        }
    }
}

/// One entry of the interactive choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub selection: Selection,
}

/// Build the choice list: the default entry first, then one
/// `"<id>: <description>"` entry per record in store order.
pub fn choices(store: &OverrideStore) -> Vec<Choice> {
    let mut choices = Vec::with_capacity(store.len() + 1);
    choices.push(Choice {
        label: DEFAULT_CHOICE_LABEL.to_string(),
        selection: Selection::Default,
    });
    choices.extend(store.iter().map(|(id, record)| Choice {
        label: format!("{}: {}", id, record.description),
        selection: Selection::Override(id.to_string()),
    }));
    choices
}

/// Interactive collaborator presenting a filterable list.
pub trait ChoicePrompt {
    /// Present `choices` and return the index of the one picked.
    fn choose(&self, message: &str, choices: &[Choice]) -> Result<usize>;
}

impl<P: ChoicePrompt + ?Sized> ChoicePrompt for &P {
    fn choose(&self, message: &str, choices: &[Choice]) -> Result<usize> {
        (**self).choose(message, choices)
    }
}

/// Determines which override applies.
pub trait Selector {
    fn select(&self, store: &OverrideStore) -> Result<Selection>;
}

/// Selects a pre-supplied identifier.
#[derive(Debug, Clone)]
pub struct ExplicitSelector {
    id: String,
}

impl ExplicitSelector {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Selector for ExplicitSelector {
    fn select(&self, store: &OverrideStore) -> Result<Selection> {
        if !store.contains(&self.id) {
            return Err(Error::UnknownIdentifier {
                id: self.id.clone(),
            });
        }
        Ok(Selection::Override(self.id.clone()))
    }
}

/// Asks a [`ChoicePrompt`] to pick among the stored overrides.
#[derive(Debug, Clone)]
pub struct InteractiveSelector<P> {
    prompt: P,
}

impl<P: ChoicePrompt> InteractiveSelector<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }
}

impl<P: ChoicePrompt> Selector for InteractiveSelector<P> {
    fn select(&self, store: &OverrideStore) -> Result<Selection> {
        if store.is_empty() {
            return Err(Error::NoOverridesAvailable);
        }

        let mut choices = choices(store);
        let index = self.prompt.choose(SELECTION_PROMPT, &choices)?;
        if index >= choices.len() {
            return Err(Error::prompt(format!(
                "choice {} out of range ({} choices)",
                index,
                choices.len()
            )));
        }
        Ok(choices.swap_remove(index).selection)
    }
}

/// Pick the selector matching the arguments: explicit when an identifier
/// is present, interactive otherwise.
pub fn selector_for<'a, P: ChoicePrompt + 'a>(
    explicit_id: Option<String>,
    prompt: P,
) -> Box<dyn Selector + 'a> {
    match explicit_id {
        Some(id) => Box::new(ExplicitSelector::new(id)),
        None => Box::new(InteractiveSelector::new(prompt)),
    }
}

/// Resolve the selection against `store`.
///
/// A concrete selection is guaranteed to name a record in `store`.
pub fn resolve(store: &OverrideStore, selector: &dyn Selector) -> Result<Selection> {
    let selection = selector.select(store)?;
    if let Some(id) = selection.id().filter(|id| !store.contains(id)) {
        return Err(Error::UnknownIdentifier { id: id.to_string() });
    }
    tracing::debug!(?selection, "Resolved selection");
    Ok(selection)
}
