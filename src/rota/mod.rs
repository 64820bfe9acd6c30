mod assignment;
mod conflicts;
mod oncall;
mod types;
mod util;

pub use types::{DoubleDuty, RotaError};

use crate::config::RosterConfig;
use crate::model::Schedule;

/// Libellé fixe du renfort du lendemain du début de semaine (après-midi).
pub const ONCALL_AFTERNOON: &str = "backup-afternoon";
/// Libellé fixe du renfort du sixième jour (matin).
pub const ONCALL_MORNING: &str = "backup-morning";

/// Génère le planning complet pour la configuration donnée.
///
/// Fonction pure et déterministe : même configuration, même planning,
/// aucune E/S ni état caché. La configuration est validée avant tout
/// calcul ; régénérer remplace intégralement le planning précédent côté
/// appelant (écrasement, pas de fusion).
pub fn generate(config: &RosterConfig) -> Result<Schedule, RotaError> {
    config.validate()?;

    let mut schedule = Schedule::default();
    for week in 0..config.week_count {
        let week_start = util::add_days(config.start_date, u64::from(week) * 7)?;
        assignment::assign_week(&mut schedule, config, week, week_start)?;
        oncall::assign_week(&mut schedule, config, week, week_start)?;
    }
    Ok(schedule)
}

/// Signale les cumuls tâche de semaine + renfort un même jour.
///
/// Inspection consultative : `generate` n'appelle jamais cette fonction et
/// n'empêche pas le cumul. À l'appelant de trancher.
pub fn detect_double_duty(schedule: &Schedule) -> Vec<DoubleDuty> {
    conflicts::detect_double_duty(schedule)
}
