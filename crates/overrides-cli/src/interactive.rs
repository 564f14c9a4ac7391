//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based input and filterable selection.

use dialoguer::{FuzzySelect, Input};
use overrides_core::{Choice, ChoicePrompt};

use crate::error::Result;

/// Filterable override picker backed by [`FuzzySelect`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FuzzyPrompt;

impl ChoicePrompt for FuzzyPrompt {
    fn choose(&self, message: &str, choices: &[Choice]) -> overrides_core::Result<usize> {
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        FuzzySelect::new()
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact()
            .map_err(overrides_core::Error::prompt)
    }
}

/// Fill in whichever of identifier and description was not supplied.
pub fn collect_override_details(
    identifier: Option<String>,
    description: Option<String>,
) -> Result<(String, String)> {
    let identifier = match identifier {
        Some(id) => id,
        None => Input::<String>::new()
            .with_prompt("Enter an identifier for this manifest")
            .interact_text()?,
    };

    let description = match description {
        Some(desc) => desc,
        None => Input::<String>::new()
            .with_prompt("Enter a description for this manifest")
            .allow_empty(true)
            .interact_text()?,
    };

    Ok((identifier, description))
}
