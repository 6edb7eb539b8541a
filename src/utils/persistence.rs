use std::{fs, path::Path};

use crate::{budget::BudgetRecord, errors::InsightsError};

/// Writes the snapshot to disk atomically by staging to a temporary file.
pub fn save_snapshot_to_file(record: &BudgetRecord, path: &Path) -> Result<(), InsightsError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a budget snapshot from disk, returning structured errors on failure.
pub fn load_snapshot_from_file(path: &Path) -> Result<BudgetRecord, InsightsError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
