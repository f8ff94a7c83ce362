//! vault-changelog keeps a single note inside a Markdown vault up to date
//! with a list of the most recently modified notes.
//!
//! The pipeline is list → select → render → write: scan the vault, keep the
//! most recent notes after exclusion rules, render one timestamped line per
//! note and replace the changelog's contents. In watch mode a trailing-edge
//! debounce gate coalesces bursts of file-system events into a single run.

pub mod datetime;
pub mod error;
pub mod gate;
pub mod pipeline;
pub mod render;
pub mod select;
pub mod settings;
pub mod ui;
pub mod vault;
pub mod watch;
pub mod writer;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{ChangelogError, Result};
pub use settings::Settings;
pub use vault::{EntryKind, FsVault, NoteRef, VaultFs};
