use crate::model::StaffId;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration d'une génération de planning.
///
/// L'ordre de `staff_pool` et de `task_list` est significatif : il pilote la
/// rotation et l'appariement positionnel tâche/personne. Les champs JSON
/// inconnus sont ignorés au chargement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub staff_pool: Vec<StaffId>,
    pub task_list: Vec<String>,
    /// Lundi de la semaine 0.
    pub start_date: NaiveDate,
    pub week_count: u32,
}

/// Configuration rejetée avant tout calcul ; jamais de résultat partiel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("staff pool cannot be empty")]
    EmptyStaffPool,
    #[error("task list cannot be empty")]
    EmptyTaskList,
    #[error("week count must be at least 1")]
    InvalidWeekCount,
    #[error("duplicate staff id: {0}")]
    DuplicateStaff(String),
    #[error("start date {0} must be a Monday")]
    StartDateNotMonday(NaiveDate),
}

impl RosterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.staff_pool.is_empty() {
            return Err(ConfigError::EmptyStaffPool);
        }
        if self.task_list.is_empty() {
            return Err(ConfigError::EmptyTaskList);
        }
        if self.week_count < 1 {
            return Err(ConfigError::InvalidWeekCount);
        }
        let mut seen = HashSet::new();
        for staff in &self.staff_pool {
            if !seen.insert(staff) {
                return Err(ConfigError::DuplicateStaff(staff.as_str().to_string()));
            }
        }
        if self.start_date.weekday() != Weekday::Mon {
            return Err(ConfigError::StartDateNotMonday(self.start_date));
        }
        Ok(())
    }
}

/// Charge et valide une configuration JSON.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<RosterConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: RosterConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Export JSON de la configuration (jolie mise en forme)
pub fn export_config_json<P: AsRef<Path>>(path: P, config: &RosterConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
