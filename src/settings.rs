use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub credentials_path: String,
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("sheetsync")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| SyncError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// Spreadsheet id for this run: the command-line override when given,
/// otherwise the configured one.
pub fn resolve_spreadsheet_id(override_id: Option<&str>) -> Result<String> {
    if let Some(id) = override_id {
        return Ok(id.to_string());
    }
    let settings = load_settings();
    if settings.spreadsheet_id.is_empty() {
        return Err(SyncError::Settings(
            "no spreadsheet id configured; run `sheetsync init` first".to_string(),
        ));
    }
    Ok(settings.spreadsheet_id)
}

pub fn resolve_credentials() -> Result<PathBuf> {
    let settings = load_settings();
    if settings.credentials_path.is_empty() {
        return Err(SyncError::Settings(
            "no service-account key configured; run `sheetsync init` first".to_string(),
        ));
    }
    Ok(PathBuf::from(settings.credentials_path))
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}
