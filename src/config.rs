//! Scheduling configuration file support.
//!
//! Reads the duration table, the working-day window and the assignment
//! policy from TOML:
//!
//! ```toml
//! policy = "first_capable"
//!
//! [durations]
//! fallback_minutes = 30
//!
//! [durations.services]
//! makeup = 45
//! hair = 30
//!
//! [day]
//! starts_at = "06:00"
//! finishes_at = "18:00"
//! ```
//!
//! Every section is optional; missing sections take their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{ClientRegistry, DayWindow, DurationTable};
use crate::scheduler::AssignmentPolicy;

/// Scheduling configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// How capable artists are chosen.
    #[serde(default)]
    pub policy: AssignmentPolicy,
    /// Default duration per service. A `[durations.services]` table
    /// replaces the built-in service entries; without one they are kept.
    #[serde(default)]
    pub durations: DurationTable,
    /// Working-day window; `None` disables day-window checks.
    #[serde(default)]
    pub day: Option<DayWindow>,
}

impl ScheduleConfig {
    /// Parses and validates configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ScheduleConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded schedule config from {}", path.display());
        Ok(config)
    }

    /// Checks durations and the day window.
    pub fn validate(&self) -> Result<()> {
        self.durations.validate()?;
        if let Some(day) = &self.day {
            day.validate()?;
        }
        Ok(())
    }

    /// An empty client registry priced with this configuration's durations.
    pub fn client_registry(&self) -> ClientRegistry {
        ClientRegistry::with_durations(self.durations.clone())
    }

    /// Serializes back to TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
