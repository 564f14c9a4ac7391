//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use overrides_fs::constants::DEFAULT_BUILD_DIR;

/// Manifest overrides - record manifest variants and merge one in at build time
#[derive(Parser, Debug)]
#[command(name = "overrides")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, env = "OVERRIDES_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a new manifest override
    ///
    /// Missing arguments are asked for interactively. The first override
    /// also creates src/manifestOverrides.json and wires the npm hooks.
    ///
    /// Examples:
    ///   overrides manifest prod "Production config"
    ///   overrides m                                  # prompt for both
    #[command(visible_alias = "m")]
    Manifest {
        /// Identifier for the override
        identifier: Option<String>,

        /// Description shown when selecting overrides
        description: Option<String>,
    },

    /// Apply a manifest override
    ///
    /// With step "start" the merged manifest goes to src/manifest.tmp.json;
    /// any other step writes <build_dir>/manifest.json.
    ///
    /// Examples:
    ///   overrides apply-manifest start               # choose interactively
    ///   overrides apply-manifest build prod
    ///   overrides am build prod dist
    #[command(visible_alias = "am")]
    ApplyManifest {
        /// Build step ("start" or a post-build step)
        step: String,

        /// Override to apply (prompted for when omitted)
        id: Option<String>,

        /// Build output directory
        #[arg(default_value = DEFAULT_BUILD_DIR)]
        build_dir: PathBuf,
    },

    /// List recorded manifest overrides
    #[command(visible_alias = "lm")]
    ListManifests {
        /// Output the store as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   overrides completions bash > ~/.local/share/bash-completion/completions/overrides
    ///   overrides completions zsh > ~/.zfunc/_overrides
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
