use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vault-changelog")]
#[command(
    author,
    version,
    about = "Keeps a changelog note listing the most recently modified files in a Markdown vault"
)]
pub struct Cli {
    /// Vault root directory (defaults to the current directory)
    #[clap(long, default_value = ".")]
    pub vault: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite the changelog note once from the current vault state
    Update {
        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Watch the vault and rewrite the changelog after bursts of changes
    Watch,

    /// Show or modify the stored settings
    Config {
        /// What to do with the settings
        #[clap(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,

    /// Validate and persist a single setting
    Set {
        /// Setting name, e.g. maxRecentFiles or datetimeFormat
        key: String,

        /// New value; excludedFolders takes a comma-separated list
        value: String,
    },

    /// Edit all settings interactively
    Edit,
}
