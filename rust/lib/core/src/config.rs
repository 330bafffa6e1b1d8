//! Application configuration.
//!
//! Reads/writes `~/.clinic/config.toml`. Every field has a default, so a
//! missing file or a partial file is always usable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ClinicError;

/// Clinic-wide settings shared by the shell and the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Name shown in the shell header.
    pub clinic_name: String,

    /// Administrator contact shown by "forgot password".
    pub support_email: String,
    pub support_phone: String,

    /// Account type preselected on the login screen ("Admin" or "Employee").
    pub default_account_type: String,

    /// `tracing` filter used when neither `--log` nor `RUST_LOG` is set.
    pub log_filter: String,

    /// Console line-editor history file. Empty disables history.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub history_file: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            clinic_name: "Smiley Dental Clinic and Services".to_string(),
            support_email: "admin@smileydental.com".to_string(),
            support_phone: "(555) 123-4567".to_string(),
            default_account_type: "Admin".to_string(),
            log_filter: "warn".to_string(),
            history_file: String::new(),
        }
    }
}

impl ClinicConfig {
    /// Default config file path: ~/.clinic/config.toml.
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load config from disk, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ClinicError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClinicConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk, creating the parent directory.
    pub fn save(&self, path: &Path) -> Result<(), ClinicError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Render as TOML text.
    pub fn to_toml(&self) -> Result<String, ClinicError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Return the clinic config directory (~/.clinic).
fn config_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".clinic")
}
