//! Location of the record file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

const DATA_FILE_NAME: &str = "feeding_records.json";

/// Resolve the record file, preferring an explicit path.
pub fn data_file_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let dirs =
        ProjectDirs::from("", "", "feedlog").context("Could not determine data directory")?;

    Ok(dirs.data_dir().join(DATA_FILE_NAME))
}
