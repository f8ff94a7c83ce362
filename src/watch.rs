//! Watch mode: drive the pipeline from file-system change events.

use crossbeam_channel::{unbounded, RecvTimeoutError};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::gate::{ChangeGate, DEBOUNCE_DELAY};
use crate::pipeline;
use crate::settings::Settings;
use crate::ui::NoticeSink;
use crate::vault::FsVault;

/// Watches the vault and rewrites the changelog after each burst of changes.
///
/// Blocks until the watcher channel disconnects. Refuses to start when
/// auto-update is disabled; a pipeline run already in flight when the
/// process is interrupted finishes on its own (there is no cancellation).
pub fn watch(vault: &FsVault, settings: &Settings, notices: &dyn NoticeSink) -> Result<()> {
    if !settings.auto_update {
        notices.notice(
            "Auto-update is disabled; enable it with `vault-changelog config set autoUpdate true`",
        );
        return Ok(());
    }

    let (tx, rx) = unbounded();
    let mut watcher = notify::recommended_watcher(move |event| {
        let _ = tx.send(event);
    })?;
    watcher.watch(vault.root(), RecursiveMode::Recursive)?;
    info!(vault = %vault.root().display(), "watching vault for changes");

    let mut gate = ChangeGate::new(DEBOUNCE_DELAY);
    loop {
        let received = match gate.deadline() {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    Err(RecvTimeoutError::Timeout)
                } else {
                    rx.recv_timeout(deadline - now)
                }
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(Ok(event)) => {
                if is_relevant(&event, vault.root(), settings) {
                    debug!(kind = ?event.kind, "change event, arming debounce gate");
                    gate.arm(Instant::now());
                }
            }
            Ok(Err(err)) => warn!("watch error: {err}"),
            Err(RecvTimeoutError::Timeout) => {
                if gate.fire(Instant::now()) {
                    if let Some(report) = pipeline::run_noticed(vault, settings, notices) {
                        info!(
                            scanned = report.scanned,
                            selected = report.selected,
                            "changelog updated"
                        );
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(())
}

/// Whether an event should arm the gate: a modify, delete or rename of a
/// Markdown note other than the changelog itself. Renames arrive from
/// `notify` as modify-name events.
fn is_relevant(event: &Event, root: &Path, settings: &Settings) -> bool {
    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Remove(_)) {
        return false;
    }
    event.paths.iter().any(|path| {
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            return false;
        }
        let rel = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        rel != settings.changelog_path
            && !rel.split('/').any(|segment| segment.starts_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{DataChange, ModifyKind, RemoveKind};
    use std::path::PathBuf;

    fn modify_event(path: &str) -> Event {
        Event {
            kind: EventKind::Modify(ModifyKind::Data(DataChange::Content)),
            paths: vec![PathBuf::from(path)],
            attrs: Default::default(),
        }
    }

    #[test]
    fn note_modification_is_relevant() {
        let settings = Settings::default();
        let event = modify_event("/vault/Projects/plan.md");
        assert!(is_relevant(&event, Path::new("/vault"), &settings));
    }

    #[test]
    fn changelog_events_are_ignored() {
        let settings = Settings::default();
        let event = modify_event("/vault/Changelog.md");
        assert!(!is_relevant(&event, Path::new("/vault"), &settings));
    }

    #[test]
    fn non_markdown_and_hidden_paths_are_ignored() {
        let settings = Settings::default();
        assert!(!is_relevant(
            &modify_event("/vault/image.png"),
            Path::new("/vault"),
            &settings
        ));
        assert!(!is_relevant(
            &modify_event("/vault/.trash/old.md"),
            Path::new("/vault"),
            &settings
        ));
    }

    #[test]
    fn deletions_are_relevant() {
        let settings = Settings::default();
        let event = Event {
            kind: EventKind::Remove(RemoveKind::File),
            paths: vec![PathBuf::from("/vault/A.md")],
            attrs: Default::default(),
        };
        assert!(is_relevant(&event, Path::new("/vault"), &settings));
    }

    #[test]
    fn creations_alone_are_not_relevant() {
        let settings = Settings::default();
        let event = Event {
            kind: EventKind::Create(notify::event::CreateKind::File),
            paths: vec![PathBuf::from("/vault/A.md")],
            attrs: Default::default(),
        };
        assert!(!is_relevant(&event, Path::new("/vault"), &settings));
    }
}
