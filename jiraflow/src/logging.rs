use jiraflow_core::config::APP_NAME;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

const LOG_FILE_NAME: &str = "jiraflow.log";
const MAX_LOG_SIZE_MB: u64 = 10;
const MAX_ROTATED_FILES: u32 = 10;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// `$XDG_CACHE_HOME/jiraflow`, else `~/.cache/jiraflow`, else a temp dir.
fn resolve_cache_dir(xdg_cache_home: Option<OsString>, home: Option<&Path>) -> PathBuf {
    match (xdg_cache_home.filter(|v| !v.is_empty()), home) {
        (Some(xdg), _) => PathBuf::from(xdg).join(APP_NAME),
        (None, Some(home)) => home.join(".cache").join(APP_NAME),
        (None, None) => std::env::temp_dir().join(APP_NAME),
    }
}

pub fn default_log_file() -> PathBuf {
    let home = dirs::home_dir();
    resolve_cache_dir(std::env::var_os("XDG_CACHE_HOME"), home.as_deref()).join(LOG_FILE_NAME)
}

/// Send the `log` facade to a size-rotated file. Nothing may reach the
/// terminal while the wizard is drawing.
pub fn setup_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    let log_file = default_log_file();
    if let Some(dir) = log_file.parent() {
        std::fs::create_dir_all(dir)?;
    }
    simple_log::file(
        log_file.to_string_lossy().into_owned(),
        level,
        MAX_LOG_SIZE_MB,
        MAX_ROTATED_FILES,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    log::info!(
        "{APP_NAME} {} logging to {} at {level}",
        env!("CARGO_PKG_VERSION"),
        log_file.display()
    );
    Ok(())
}
