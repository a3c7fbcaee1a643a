//! Classroom directory management.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::classroom_config::ClassroomConfig;
use crate::error::{RotaError, RotaResult};
use crate::remote::Remote;
use crate::rota::Rota;
use crate::slot::ScheduleEntry;

/// The locally edited schedule, one file per classroom.
pub const SCHEDULE_FILE: &str = "schedule.toml";

#[derive(Clone)]
pub struct Classroom {
    pub slug: String,
    pub config: ClassroomConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ScheduleFile {
    #[serde(default, rename = "slot")]
    slots: Vec<ScheduleEntry>,
}

impl Classroom {
    pub fn new(slug: &str) -> Self {
        Classroom {
            slug: slug.to_string(),
            config: ClassroomConfig::default(),
        }
    }

    fn base_slug_for(name: &str) -> String {
        let base = slug::slugify(name);
        if base.is_empty() {
            "classroom".to_string()
        } else {
            base
        }
    }

    /// Generate a unique slug that doesn't conflict with existing classroom
    /// directories. If the base slug exists, tries slug-2, slug-3, etc.
    pub fn unique_slug_for(name: &str) -> RotaResult<String> {
        let base = Self::base_slug_for(name);
        let rota = Rota::load()?;
        let data_path = rota.data_path();

        if !data_path.join(&base).exists() {
            return Ok(base);
        }

        for n in 2..=100 {
            let suffixed = format!("{}-{}", base, n);
            if !data_path.join(&suffixed).exists() {
                return Ok(suffixed);
            }
        }

        Err(RotaError::Config(format!(
            "Too many classroom name collisions for '{}'",
            base
        )))
    }

    pub fn load(slug: &str) -> RotaResult<Self> {
        let classroom_dir = Self::path_for(slug)?;
        let config = ClassroomConfig::load(&classroom_dir)?;

        Ok(Classroom {
            slug: slug.to_string(),
            config,
        })
    }

    pub fn path_for(slug: &str) -> RotaResult<PathBuf> {
        let rota = Rota::load()?;
        Ok(rota.data_path().join(slug))
    }

    pub fn path(&self) -> RotaResult<PathBuf> {
        Self::path_for(&self.slug)
    }

    pub fn save_config(&self) -> RotaResult<()> {
        self.config.save(&self.path()?)
    }

    /// Where schedule changes get pushed to / pulled from (None if the
    /// classroom isn't connected to the backend).
    pub fn remote(&self) -> Option<&Remote> {
        self.config.remote.as_ref()
    }

    pub fn require_remote(&self) -> RotaResult<&Remote> {
        self.remote()
            .ok_or_else(|| RotaError::NoRemoteConfigured(self.slug.clone()))
    }

    /// Load the locally edited schedule. A classroom without a schedule
    /// file simply has no slots yet.
    pub fn schedule(&self) -> RotaResult<Vec<ScheduleEntry>> {
        let path = self.path()?.join(SCHEDULE_FILE);

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path)?;
        let file: ScheduleFile = toml::from_str(&content)
            .map_err(|e| RotaError::ScheduleParse(format!("{}: {}", self.slug, e)))?;

        Ok(file.slots)
    }

    pub fn write_schedule(&self, entries: &[ScheduleEntry]) -> RotaResult<()> {
        let dir = self.path()?;
        std::fs::create_dir_all(&dir)?;

        let file = ScheduleFile {
            slots: entries.to_vec(),
        };
        let content =
            toml::to_string_pretty(&file).map_err(|e| RotaError::Serialization(e.to_string()))?;

        std::fs::write(dir.join(SCHEDULE_FILE), content)?;

        Ok(())
    }
}

impl fmt::Display for Classroom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.slug)
    }
}
