use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".budget_insights";
const CONFIG_FILE: &str = "config.json";
const SNAPSHOT_FILE: &str = "snapshot.json";

/// Returns the application-specific data directory, defaulting to
/// `~/.budget_insights`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_INSIGHTS_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the report configuration file.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Default location of the budget snapshot when no path is given on the
/// command line.
pub fn default_snapshot_file() -> PathBuf {
    app_data_dir().join(SNAPSHOT_FILE)
}

/// Creates a directory (and any missing parents) if it does not exist.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
