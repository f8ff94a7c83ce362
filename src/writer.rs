//! Persistence of the rendered changelog body.

use std::path::PathBuf;

use crate::error::{ChangelogError, Result};
use crate::vault::{EntryKind, VaultFs};

/// Writes the changelog body to its target path, creating the file first
/// when nothing exists there. The write replaces the full prior contents.
///
/// A directory (or anything else that is not a regular file) occupying the
/// target path is reported as [`ChangelogError::NotAFile`] so the caller can
/// surface a notice instead of crashing.
pub fn write_changelog(fs: &dyn VaultFs, path: &str, content: &str) -> Result<()> {
    match fs.entry_kind(path)? {
        None => fs.create_file(path)?,
        Some(EntryKind::File) => {}
        Some(EntryKind::Directory) => {
            return Err(ChangelogError::NotAFile(PathBuf::from(path)));
        }
    }
    fs.overwrite(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MemVault;

    #[test]
    fn creates_missing_target_then_writes() {
        let vault = MemVault::new();
        write_changelog(&vault, "Changelog.md", "- entry\n").unwrap();
        assert_eq!(vault.contents("Changelog.md").as_deref(), Some("- entry\n"));
    }

    #[test]
    fn overwrites_rather_than_appends() {
        let vault = MemVault::new();
        vault.put_file("Changelog.md", "old body\nwith lines\n");
        write_changelog(&vault, "Changelog.md", "new\n").unwrap();
        assert_eq!(vault.contents("Changelog.md").as_deref(), Some("new\n"));
    }

    #[test]
    fn directory_at_target_is_not_a_file() {
        let vault = MemVault::new();
        vault.put_dir("Changelog.md");
        let err = write_changelog(&vault, "Changelog.md", "body").unwrap_err();
        assert!(matches!(err, ChangelogError::NotAFile(_)));
        // The directory is left untouched.
        assert!(vault.contents("Changelog.md").is_none());
    }

    #[test]
    fn repeated_writes_with_same_body_are_identical() {
        let vault = MemVault::new();
        write_changelog(&vault, "Changelog.md", "- a\n").unwrap();
        write_changelog(&vault, "Changelog.md", "- a\n").unwrap();
        assert_eq!(vault.contents("Changelog.md").as_deref(), Some("- a\n"));
    }
}
