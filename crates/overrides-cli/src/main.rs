//! Manifest overrides CLI
//!
//! Records named manifest overrides and merges one into the base manifest
//! before or after a build.

mod cli;
mod commands;
mod error;
mod interactive;

use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    tracing::debug!(root = %root.display(), "Resolved project root");

    match cli.command {
        Some(cmd) => execute_command(cmd, &root),
        None => {
            println!("{} Manifest overrides CLI", "overrides".green().bold());
            println!();
            println!("Run {} for available commands.", "overrides --help".cyan());
            Ok(())
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands, root: &Path) -> Result<()> {
    match cmd {
        Commands::Manifest {
            identifier,
            description,
        } => commands::run_add(root, identifier, description),
        Commands::ApplyManifest {
            step,
            id,
            build_dir,
        } => commands::run_apply(root, &step, id, &build_dir),
        Commands::ListManifests { json } => commands::run_list(root, json),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

fn cmd_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use overrides_test_utils::{STAGING_MANIFEST, TestProject};
    use serde_json::json;

    #[test]
    fn test_execute_add_then_apply() {
        let project = TestProject::new().with_base_manifest(&json!({
            "mapping": [{"alias": "a", "x": 0}]
        }));

        execute_command(
            Commands::Manifest {
                identifier: Some("prod".into()),
                description: Some("Prod config".into()),
            },
            project.root(),
        )
        .unwrap();

        execute_command(
            Commands::ApplyManifest {
                step: "start".into(),
                id: Some("prod".into()),
                build_dir: PathBuf::from("build"),
            },
            project.root(),
        )
        .unwrap();

        // Fresh override has an empty manifest, so the output equals the base
        assert_eq!(
            project.read_json(STAGING_MANIFEST),
            json!({"mapping": [{"alias": "a", "x": 0}]})
        );
    }
}
