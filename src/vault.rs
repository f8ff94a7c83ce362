//! Vault access: the note model and the file-system facade the pipeline
//! stages are injected with.

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::settings::SETTINGS_FILE;

/// A reference to a Markdown note in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRef {
    /// Vault-relative path with forward slashes, e.g. `Projects/plan.md`
    pub path: String,
    /// Display name: file name without directory or extension
    pub basename: String,
    /// Last modification time
    pub modified: DateTime<Local>,
}

/// Kind of entry found at a vault path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// File-system capabilities the pipeline needs from the vault.
///
/// The pipeline stages take this as a handle rather than touching the file
/// system directly, so tests can run against an in-memory vault.
pub trait VaultFs {
    /// Lists every Markdown note in the vault with its metadata.
    fn list_notes(&self) -> Result<Vec<NoteRef>>;

    /// Probes a vault-relative path; `None` means nothing exists there.
    fn entry_kind(&self, path: &str) -> Result<Option<EntryKind>>;

    /// Creates an empty file at a vault-relative path, including parents.
    fn create_file(&self, path: &str) -> Result<()>;

    /// Replaces the full contents of an existing file.
    fn overwrite(&self, path: &str, content: &str) -> Result<()>;
}

/// Vault rooted at a directory on the local file system.
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl VaultFs for FsVault {
    fn list_notes(&self) -> Result<Vec<NoteRef>> {
        let mut notes = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry));
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            let basename = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let rel = path
                .strip_prefix(&self.root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            if rel == SETTINGS_FILE {
                continue;
            }
            let modified = entry
                .metadata()?
                .modified()
                .unwrap_or(SystemTime::UNIX_EPOCH);
            notes.push(NoteRef {
                path: rel,
                basename,
                modified: DateTime::<Local>::from(modified),
            });
        }
        Ok(notes)
    }

    fn entry_kind(&self, path: &str) -> Result<Option<EntryKind>> {
        match fs::metadata(self.resolve(path)) {
            Ok(meta) if meta.is_file() => Ok(Some(EntryKind::File)),
            Ok(_) => Ok(Some(EntryKind::Directory)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn create_file(&self, path: &str) -> Result<()> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, "")?;
        Ok(())
    }

    fn overwrite(&self, path: &str, content: &str) -> Result<()> {
        fs::write(self.resolve(path), content)?;
        Ok(())
    }
}

/// Dot-prefixed directories (`.obsidian`, `.git`, ...) are not notes.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.'))
}
