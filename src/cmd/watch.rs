use std::path::Path;

use vault_changelog::{settings::Settings, ui::ConsoleNotices, watch, FsVault, Result};

/// Executes watch mode: auto-update driven by file-system events.
pub fn execute(vault_root: &Path) -> Result<()> {
    tracing_subscriber::fmt::init();

    let vault = FsVault::new(vault_root);
    let settings = Settings::load(vault_root);
    watch::watch(&vault, &settings, &ConsoleNotices)
}
