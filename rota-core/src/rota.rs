//! Rota root directory management.

use std::path::PathBuf;

use config::{Config, File};
use url::Url;

use crate::classroom::Classroom;
use crate::error::{RotaError, RotaResult};
use crate::rota_config::RotaConfig;

#[derive(Clone)]
pub struct Rota {
    config: RotaConfig,
}

impl Rota {
    pub fn load() -> RotaResult<Self> {
        let config_path = RotaConfig::config_path()?;

        if !config_path.exists() {
            RotaConfig::create_default_config(&config_path)?;
        }

        let config: RotaConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| RotaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RotaError::Config(e.to_string()))?;

        Ok(Rota { config })
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.class_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the class directory path in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.class_dir.clone()
    }

    /// Backend URL applied to classrooms created without an explicit one.
    pub fn default_backend_url(&self) -> Option<&Url> {
        self.config.backend_url.as_ref()
    }

    /// Token applied to classrooms created while it is configured.
    pub fn default_token(&self) -> Option<&str> {
        self.config.token.as_deref()
    }

    /// Discover classrooms by scanning class_dir for subdirectories
    /// with .rota/config.toml files.
    pub fn classrooms(&self) -> Vec<Classroom> {
        let data_path = self.data_path();

        let Ok(entries) = std::fs::read_dir(&data_path) else {
            return Vec::new();
        };

        let mut classrooms: Vec<Classroom> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir() && path.join(".rota").exists())
            .filter_map(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .and_then(|name| Classroom::load(name).ok())
            })
            .collect();

        classrooms.sort_by(|a, b| a.slug.cmp(&b.slug));
        classrooms
    }
}
