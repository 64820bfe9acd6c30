use crate::config::RosterConfig;
use crate::model::Schedule;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Frontière de persistance du générateur : charger une configuration,
/// écrire le planning résultat. L'écriture est un écrasement complet
/// (dernier écrivain gagnant), jamais une fusion.
pub trait Storage {
    /// Charge et valide la configuration.
    fn load_config(&self) -> anyhow::Result<RosterConfig>;
    /// Charge le dernier planning sauvegardé.
    fn load_schedule(&self) -> anyhow::Result<Schedule>;
    /// Sauvegarde le planning de manière atomique.
    fn save_schedule(&self, schedule: &Schedule) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    config_path: PathBuf,
    schedule_path: PathBuf,
}

impl JsonStorage {
    pub fn open<C: AsRef<Path>, S: AsRef<Path>>(
        config_path: C,
        schedule_path: S,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            config_path: config_path.as_ref().to_path_buf(),
            schedule_path: schedule_path.as_ref().to_path_buf(),
        })
    }
}

impl Storage for JsonStorage {
    fn load_config(&self) -> anyhow::Result<RosterConfig> {
        crate::config::load_config_from_file(&self.config_path)
    }

    fn load_schedule(&self) -> anyhow::Result<Schedule> {
        let data = fs::read(&self.schedule_path)
            .with_context(|| format!("reading {}", self.schedule_path.display()))?;
        let schedule: Schedule =
            serde_json::from_slice(&data).with_context(|| "parsing schedule.json")?;
        Ok(schedule)
    }

    fn save_schedule(&self, schedule: &Schedule) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(schedule)?;
        let mut tmp = NamedTempFile::new_in(
            self.schedule_path.parent().unwrap_or_else(|| Path::new(".")),
        )
        .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.schedule_path)
            .with_context(|| "atomic rename")?;
        Ok(())
    }
}
