use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{io_context, with_parse_context};

/// Reads and deserializes a JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path, data_type: &str) -> Result<T> {
    let json = fs::read_to_string(path).with_context(|| io_context("read", &path.display().to_string()))?;
    let data = with_parse_context(serde_json::from_str(&json), data_type)?;
    info!("Loaded {} from {}", data_type, path.display());
    Ok(data)
}

/// Writes `data` next to `path` and renames it into place, so readers never see
/// a half-written file
pub fn save_json_atomic<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let temp_path = temp_path_for(path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| io_context("create directory", &parent.display().to_string()))?;
    }
    if temp_path.exists() {
        fs::remove_file(&temp_path)
            .with_context(|| io_context("remove stale", &temp_path.display().to_string()))?;
    }

    let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
    fs::write(&temp_path, json).with_context(|| io_context("write", &temp_path.display().to_string()))?;
    fs::rename(&temp_path, path).with_context(|| io_context("replace", &path.display().to_string()))?;

    info!("Saved data to {}", path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
