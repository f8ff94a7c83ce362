use dialoguer::{Confirm, Input};
use std::path::Path;

use vault_changelog::settings::{
    parse_excluded_folders, validate_datetime_format, validate_max_recent_files, Settings,
};
use vault_changelog::{datetime, ui, ChangelogError, Result};

use crate::cli::ConfigAction;

/// Executes the settings surface: show, set one key, or edit interactively.
pub fn execute(vault_root: &Path, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(vault_root),
        ConfigAction::Set { key, value } => set(vault_root, &key, &value),
        ConfigAction::Edit => edit(vault_root),
    }
}

fn show(vault_root: &Path) -> Result<()> {
    let settings = Settings::load(vault_root);
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn set(vault_root: &Path, key: &str, value: &str) -> Result<()> {
    let mut settings = Settings::load(vault_root);
    apply(&mut settings, key, value)?;
    settings.save(vault_root)?;
    ui::success_message(&format!("Set {key}"));
    Ok(())
}

/// Validates and applies a single key/value pair. Invalid input is rejected
/// without touching the stored settings.
fn apply(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "autoUpdate" => settings.auto_update = parse_bool(key, value)?,
        "changelogPath" => {
            if value.trim().is_empty() {
                return Err(ChangelogError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
            settings.changelog_path = value.to_string();
        }
        "datetimeFormat" => {
            validate_datetime_format(value)?;
            settings.datetime_format = value.to_string();
        }
        "maxRecentFiles" => settings.max_recent_files = validate_max_recent_files(value)?,
        "useWikiLinks" => settings.use_wiki_links = parse_bool(key, value)?,
        "changelogHeading" => settings.changelog_heading = value.to_string(),
        "excludedFolders" => settings.excluded_folders = parse_excluded_folders(value),
        other => return Err(ChangelogError::UnknownSetting(other.to_string())),
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ChangelogError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Walks every setting with a validated prompt, persisting once at the end.
fn edit(vault_root: &Path) -> Result<()> {
    let current = Settings::load(vault_root);
    let mut next = current.clone();

    next.changelog_path = Input::new()
        .with_prompt("Changelog note path")
        .default(current.changelog_path.clone())
        .interact_text()?;

    next.datetime_format = Input::new()
        .with_prompt("Timestamp format")
        .default(current.datetime_format.clone())
        .validate_with(|raw: &String| {
            datetime::validate(raw).map_err(|err| err.user_message())
        })
        .interact_text()?;

    let max_raw: String = Input::new()
        .with_prompt("Maximum entries")
        .default(current.max_recent_files.to_string())
        .validate_with(|raw: &String| {
            validate_max_recent_files(raw)
                .map(|_| ())
                .map_err(|err| err.user_message())
        })
        .interact_text()?;
    next.max_recent_files = validate_max_recent_files(&max_raw)?;

    next.use_wiki_links = Confirm::new()
        .with_prompt("Link entries as [[wiki links]]?")
        .default(current.use_wiki_links)
        .interact()?;

    next.changelog_heading = Input::new()
        .with_prompt("Heading above the entries (empty for none)")
        .allow_empty(true)
        .default(current.changelog_heading.clone())
        .interact_text()?;

    let folders_raw: String = Input::new()
        .with_prompt("Excluded folder prefixes (comma separated)")
        .allow_empty(true)
        .default(current.excluded_folders.join(", "))
        .interact_text()?;
    next.excluded_folders = parse_excluded_folders(&folders_raw);

    next.auto_update = Confirm::new()
        .with_prompt("Rewrite automatically when vault files change?")
        .default(current.auto_update)
        .interact()?;

    next.save(vault_root)?;
    ui::success_message("Settings saved");
    Ok(())
}
