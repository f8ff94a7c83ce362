use std::path::Path;

use vault_changelog::{pipeline, settings::Settings, ui, FsVault, Result};

/// Executes the manual "update changelog" trigger: one pipeline run, no
/// debounce gate involved.
pub fn execute(vault_root: &Path, verbose: bool) -> Result<()> {
    let vault = FsVault::new(vault_root);
    let settings = Settings::load(vault_root);

    let report = pipeline::run(&vault, &settings)?;

    if verbose {
        ui::info_message(&format!(
            "Scanned {} notes, listed {}",
            report.scanned, report.selected
        ));
    }
    ui::success_message(&format!("Changelog written to {}", settings.changelog_path));
    Ok(())
}
