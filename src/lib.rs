#![forbid(unsafe_code)]
//! Rotaplan : génération déterministe de plannings d'équipe (sans BD).
//!
//! - Bloc de semaine (lundi..vendredi) : rotation cyclique du personnel sur
//!   la liste des tâches, décalée d'un cran par semaine.
//! - Deux créneaux de renfort hebdomadaires, rotation indépendante sur le
//!   pool non tourné.
//! - Dates naïves (calendrier), formatage ISO partout.
//! - Export CSV/ICS/JSON ; persistance fichier atomique.

pub mod config;
pub mod export;
pub mod model;
pub mod rota;
pub mod storage;

pub use config::{load_config_from_file, ConfigError, RosterConfig};
pub use export::{
    export_schedule_csv, export_schedule_ics, export_schedule_json, schedule_to_csv_string,
    schedule_to_ics_string,
};
pub use model::{Schedule, Shift, ShiftKind, StaffId};
pub use rota::{
    detect_double_duty, generate, DoubleDuty, RotaError, ONCALL_AFTERNOON, ONCALL_MORNING,
};
pub use storage::{JsonStorage, Storage};
