use crate::config::ConfigError;
use crate::model::StaffId;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("date arithmetic overflow past {0}")]
    DateOverflow(NaiveDate),
}

/// Cumul de service : un même membre tient une tâche de semaine et un
/// renfort à la même date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleDuty {
    pub date: NaiveDate,
    pub staff: StaffId,
}
