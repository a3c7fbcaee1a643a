//! Global rota configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{RotaError, RotaResult};

static DEFAULT_CLASS_DIR: &str = "~/classes";

fn default_class_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CLASS_DIR)
}

fn is_default_class_dir(p: &PathBuf) -> bool {
    *p == default_class_dir()
}

/// Global configuration at ~/.config/rota/config.toml
///
/// Classroom-specific configuration (backend binding) is stored in each
/// classroom's .rota/config.toml file instead; `backend_url` and `token`
/// here are only the defaults applied when a classroom is created.
#[derive(Serialize, Deserialize, Clone)]
pub struct RotaConfig {
    #[serde(default = "default_class_dir", skip_serializing_if = "is_default_class_dir")]
    pub class_dir: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<Url>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl RotaConfig {
    pub fn config_path() -> RotaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RotaError::Config("Could not determine config directory".into()))?
            .join("rota");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/rota/config.toml
    pub fn save(&self) -> RotaResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| RotaError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| RotaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> RotaResult<()> {
        let contents = format!(
            "\
# rota configuration

# Where your classroom timetables live:
# class_dir = \"{}\"

# Defaults applied when creating a classroom with `rota new`:
# backend_url = \"https://school.example.edu/api\"
# token = \"...\"
",
            DEFAULT_CLASS_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RotaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RotaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
