//! Per-classroom local configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RotaError, RotaResult};
use crate::remote::Remote;

/// Configuration stored in each classroom's .rota/config.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct ClassroomConfig {
    pub remote: Option<Remote>,
}

impl ClassroomConfig {
    /// Load config from .rota/config.toml
    pub fn load(classroom_dir: &Path) -> RotaResult<Self> {
        let path = classroom_dir.join(".rota/config.toml");

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: ClassroomConfig =
                toml::from_str(&content).map_err(|e| RotaError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to .rota/config.toml
    pub fn save(&self, classroom_dir: &Path) -> RotaResult<()> {
        let dir = classroom_dir.join(".rota");
        std::fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");

        let content =
            toml::to_string_pretty(self).map_err(|e| RotaError::Config(e.to_string()))?;

        std::fs::write(&path, content)?;

        Ok(())
    }
}
