use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::datetime;
use crate::error::{ChangelogError, Result};

/// Name of the settings document stored at the vault root.
pub const SETTINGS_FILE: &str = ".vault-changelog.json";

/// Configuration options for changelog generation and the watch mode.
///
/// Serialized as camelCase JSON so documents persisted by older builds keep
/// loading; unknown keys are ignored and missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Rewrite the changelog automatically when vault files change
    pub auto_update: bool,
    /// Vault-relative path of the changelog note
    pub changelog_path: String,
    /// Timestamp pattern, moment-style tokens (e.g. `YYYY-MM-DD[T]HHmm`)
    pub datetime_format: String,
    /// Maximum number of entries to list (at least 1)
    pub max_recent_files: u32,
    /// Render entry names as `[[wiki links]]`
    pub use_wiki_links: bool,
    /// Optional heading emitted before the entries; empty means none
    pub changelog_heading: String,
    /// Path prefixes to exclude (literal string match, not segment-aware)
    pub excluded_folders: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_update: false,
            changelog_path: "Changelog.md".to_string(),
            datetime_format: "YYYY-MM-DD[T]HHmm".to_string(),
            max_recent_files: 25,
            use_wiki_links: true,
            changelog_heading: String::new(),
            excluded_folders: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings from the vault root, falling back to defaults when the
    /// document is missing or malformed. Never fails: a broken settings file
    /// must not take the tool down with it.
    pub fn load(vault_root: &Path) -> Self {
        let path = vault_root.join(SETTINGS_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("settings document at {} is malformed ({err}); using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Persists the settings document at the vault root as pretty JSON.
    pub fn save(&self, vault_root: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(vault_root.join(SETTINGS_FILE), raw)?;
        Ok(())
    }
}

/// Validates a user-supplied maximum file count: a whole number >= 1.
pub fn validate_max_recent_files(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(ChangelogError::InvalidCount(raw.to_string())),
    }
}

/// Validates a user-supplied timestamp pattern by formatting a sample
/// timestamp with it.
pub fn validate_datetime_format(raw: &str) -> Result<()> {
    datetime::validate(raw)
}

/// Splits a comma-separated folder list into prefixes, dropping empties.
pub fn parse_excluded_folders(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|prefix| !prefix.is_empty())
        .map(String::from)
        .collect()
}
