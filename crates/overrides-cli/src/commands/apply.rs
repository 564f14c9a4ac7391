//! Manifest override application command

use std::path::Path;

use colored::Colorize;
use overrides_core::{ApplyConfig, ApplyOutcome, Selector, Stage, apply, selector_for};
use overrides_fs::ProjectLayout;

use crate::error::Result;
use crate::interactive::FuzzyPrompt;

/// Run the apply-manifest command
///
/// Applies `id` when given, otherwise asks which override to apply.
pub fn run_apply(root: &Path, step: &str, id: Option<String>, build_dir: &Path) -> Result<()> {
    let config = ApplyConfig::new(ProjectLayout::new(root)).with_build_dir(build_dir);
    let selector = selector_for(id, FuzzyPrompt);
    apply_with(&config, Stage::from_step(step), selector.as_ref())
}

/// Apply with an already chosen selector and report the outcome.
///
/// An empty store is reported as a warning, not a failure.
pub fn apply_with(config: &ApplyConfig, stage: Stage, selector: &dyn Selector) -> Result<()> {
    match apply(config, stage, selector) {
        Ok(ApplyOutcome::Written { id, path, .. }) => {
            println!(
                "{} Applied {} ({} stage) to {}",
                "OK".green().bold(),
                id.cyan(),
                stage,
                path
            );
            Ok(())
        }
        Ok(ApplyOutcome::Skipped) => {
            println!("No overrides applied");
            Ok(())
        }
        Err(overrides_core::Error::NoOverridesAvailable) => {
            println!(
                "{} No overrides available; no overrides applied",
                "WARN".yellow().bold()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
