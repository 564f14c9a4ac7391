//! Manifest override creation command

use std::path::Path;

use colored::Colorize;
use overrides_core::{AddOutcome, add_override};
use overrides_fs::{ProjectLayout, ProjectPath};

use crate::error::Result;
use crate::interactive::collect_override_details;

/// Run the manifest command
///
/// Prompts for any missing argument, then records the override.
pub fn run_add(root: &Path, identifier: Option<String>, description: Option<String>) -> Result<()> {
    let (identifier, description) = collect_override_details(identifier, description)?;
    add_to_store(root, &identifier, &description)
}

/// Record an override in the project's store and report what changed.
pub fn add_to_store(root: &Path, identifier: &str, description: &str) -> Result<()> {
    let layout = ProjectLayout::new(root);
    match add_override(&layout, identifier, description)? {
        AddOutcome::Added => {
            println!(
                "{} {} added to {}",
                "OK".green().bold(),
                identifier.trim().cyan(),
                ProjectPath::OverrideStore
            );
        }
        AddOutcome::Scaffolded(report) => {
            println!(
                "{} Created {} with {}",
                "OK".green().bold(),
                ProjectPath::OverrideStore,
                identifier.trim().cyan()
            );
            if report.scripts_added.is_empty() {
                println!(
                    "   {}: {}",
                    "Scripts".dimmed(),
                    "(none added)".dimmed()
                );
            } else {
                println!(
                    "   {}: {}",
                    "Scripts".dimmed(),
                    report.scripts_added.join(", ").yellow()
                );
            }
            if report.proxy_patched {
                println!("   {}: {}", "Proxy".dimmed(), ProjectPath::SetupProxy.to_string().yellow());
            }
        }
    }
    Ok(())
}
