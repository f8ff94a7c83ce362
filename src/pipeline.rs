//! The full changelog pipeline: list, select, render, write.

use tracing::warn;

use crate::error::Result;
use crate::render::render;
use crate::select::select_recent;
use crate::settings::Settings;
use crate::ui::NoticeSink;
use crate::vault::VaultFs;
use crate::writer::write_changelog;

/// What a pipeline run did, for verbose output and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineReport {
    /// Notes found in the vault
    pub scanned: usize,
    /// Notes that made it into the changelog
    pub selected: usize,
}

/// Runs the pipeline once: scan the vault, select the most recent notes,
/// render the body and replace the changelog's contents with it.
pub fn run(fs: &dyn VaultFs, settings: &Settings) -> Result<PipelineReport> {
    let notes = fs.list_notes()?;
    let scanned = notes.len();
    let selected = select_recent(notes, settings);
    let listed = selected.len();
    let body = render(&selected, settings)?;
    write_changelog(fs, &settings.changelog_path, &body)?;
    Ok(PipelineReport {
        scanned,
        selected: listed,
    })
}

/// Fire-and-forget variant for event-driven triggers: a failure becomes a
/// one-shot notice naming the target path instead of an error return. There
/// is no retry; the next triggering event is the only retry mechanism.
pub fn run_noticed(
    fs: &dyn VaultFs,
    settings: &Settings,
    notices: &dyn NoticeSink,
) -> Option<PipelineReport> {
    match run(fs, settings) {
        Ok(report) => Some(report),
        Err(err) => {
            warn!("changelog update failed: {err}");
            notices.notice(&format!(
                "Could not update {}: {}",
                settings.changelog_path,
                err.user_message()
            ));
            None
        }
    }
}
