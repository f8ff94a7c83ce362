//! In-memory test doubles for the vault facade and the notice sink.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::ui::NoticeSink;
use crate::vault::{EntryKind, NoteRef, VaultFs};

#[derive(Debug, Clone)]
enum MemEntry {
    File(String),
    Dir,
}

/// Vault backed by a map, for exercising the pipeline without touching disk.
pub(crate) struct MemVault {
    entries: RefCell<BTreeMap<String, MemEntry>>,
    notes: RefCell<Vec<NoteRef>>,
}

impl MemVault {
    pub(crate) fn new() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            notes: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with_notes(notes: Vec<NoteRef>) -> Self {
        let vault = Self::new();
        *vault.notes.borrow_mut() = notes;
        vault
    }

    pub(crate) fn put_file(&self, path: &str, content: &str) {
        self.entries
            .borrow_mut()
            .insert(path.to_string(), MemEntry::File(content.to_string()));
    }

    pub(crate) fn put_dir(&self, path: &str) {
        self.entries
            .borrow_mut()
            .insert(path.to_string(), MemEntry::Dir);
    }

    pub(crate) fn contents(&self, path: &str) -> Option<String> {
        match self.entries.borrow().get(path) {
            Some(MemEntry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }
}

impl VaultFs for MemVault {
    fn list_notes(&self) -> Result<Vec<NoteRef>> {
        Ok(self.notes.borrow().clone())
    }

    fn entry_kind(&self, path: &str) -> Result<Option<EntryKind>> {
        Ok(self.entries.borrow().get(path).map(|entry| match entry {
            MemEntry::File(_) => EntryKind::File,
            MemEntry::Dir => EntryKind::Directory,
        }))
    }

    fn create_file(&self, path: &str) -> Result<()> {
        self.put_file(path, "");
        Ok(())
    }

    fn overwrite(&self, path: &str, content: &str) -> Result<()> {
        self.put_file(path, content);
        Ok(())
    }
}

/// Notice sink that records every message it is handed.
pub(crate) struct CollectingNotices {
    messages: RefCell<Vec<String>>,
}

impl CollectingNotices {
    pub(crate) fn new() -> Self {
        Self {
            messages: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl NoticeSink for CollectingNotices {
    fn notice(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
