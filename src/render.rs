//! Rendering of the changelog body.

use crate::datetime;
use crate::error::Result;
use crate::settings::Settings;
use crate::vault::NoteRef;

/// Renders the changelog body for an already-selected list of notes.
///
/// Pure function of its inputs: identical arguments produce byte-identical
/// output. An empty selection yields an empty body (plus the heading when
/// one is configured).
pub fn render(selected: &[NoteRef], settings: &Settings) -> Result<String> {
    let fmt = datetime::compile(&settings.datetime_format)?;
    let mut out = String::with_capacity(selected.len() * 48);

    if !settings.changelog_heading.is_empty() {
        out.push_str(&settings.changelog_heading);
        out.push_str("\n\n");
    }

    for note in selected {
        let stamp = note.modified.format(&fmt).to_string();
        out.push_str("- ");
        out.push_str(&stamp);
        out.push_str(" · ");
        if settings.use_wiki_links {
            out.push_str("[[");
            out.push_str(&note.basename);
            out.push_str("]]");
        } else {
            out.push_str(&note.basename);
        }
        out.push('\n');
    }

    Ok(out)
}
