//! Selection of the notes a changelog run will list.

use crate::settings::Settings;
use crate::vault::NoteRef;

/// Produces the ordered, bounded subset of notes the changelog lists.
///
/// The changelog note itself is dropped by exact path match so an automatic
/// rewrite can never feed back into itself. Folder exclusion is a literal
/// string-prefix match: a prefix of `Project` also excludes `Projects/x.md`.
/// That mirrors the historical behavior and is deliberately not made
/// segment-aware.
pub fn select_recent(notes: Vec<NoteRef>, settings: &Settings) -> Vec<NoteRef> {
    let mut kept: Vec<NoteRef> = notes
        .into_iter()
        .filter(|note| note.path != settings.changelog_path)
        .filter(|note| !is_excluded(&note.path, &settings.excluded_folders))
        .collect();
    // Stable sort: equal timestamps keep their input order.
    kept.sort_by(|a, b| b.modified.cmp(&a.modified));
    kept.truncate(settings.max_recent_files as usize);
    kept
}

fn is_excluded(path: &str, excluded_folders: &[String]) -> bool {
    excluded_folders
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .any(|prefix| path.starts_with(prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn note(path: &str, mtime: i64) -> NoteRef {
        let basename = path
            .rsplit('/')
            .next()
            .unwrap()
            .trim_end_matches(".md")
            .to_string();
        NoteRef {
            path: path.to_string(),
            basename,
            modified: ts(mtime),
        }
    }

    fn ts(secs: i64) -> DateTime<Local> {
        Local.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn sorts_by_mtime_descending_and_truncates() {
        let mut settings = Settings::default();
        settings.max_recent_files = 2;
        let notes = vec![note("C.md", 100), note("A.md", 300), note("B.md", 200)];

        let selected = select_recent(notes, &settings);
        let paths: Vec<&str> = selected.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["A.md", "B.md"]);
    }

    #[test]
    fn never_lists_the_changelog_itself() {
        let settings = Settings::default();
        let notes = vec![note("Changelog.md", 999), note("A.md", 1)];

        let selected = select_recent(notes, &settings);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].path, "A.md");
    }

    #[test]
    fn excluded_folder_prefix_wins_regardless_of_mtime() {
        let mut settings = Settings::default();
        settings.excluded_folders = vec!["Archive/".to_string()];
        let notes = vec![note("Archive/old.md", 999), note("A.md", 1)];

        let selected = select_recent(notes, &settings);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].path, "A.md");
    }

    #[test]
    fn prefix_match_is_literal_not_segment_aware() {
        let mut settings = Settings::default();
        settings.excluded_folders = vec!["Project".to_string()];
        let notes = vec![note("Projects/x.md", 10), note("A.md", 1)];

        let selected = select_recent(notes, &settings);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].path, "A.md");
    }

    #[test]
    fn empty_prefix_excludes_nothing() {
        let mut settings = Settings::default();
        settings.excluded_folders = vec![String::new()];
        let selected = select_recent(vec![note("A.md", 1)], &settings);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let settings = Settings::default();
        let notes = vec![note("first.md", 50), note("second.md", 50)];

        let selected = select_recent(notes, &settings);
        let paths: Vec<&str> = selected.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["first.md", "second.md"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(select_recent(Vec::new(), &Settings::default()).is_empty());
    }
}
