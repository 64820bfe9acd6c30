use super::{types::RotaError, util};
use crate::config::RosterConfig;
use crate::model::{Schedule, Shift, ShiftKind};
use chrono::NaiveDate;

/// Jours couverts par le bloc de semaine (lundi..vendredi).
const BLOCK_DAYS: u64 = 5;

/// Affecte le bloc de semaine `week` (base 0) à partir de `week_start`.
///
/// Le pool est tourné d'un cran par semaine ; la tâche d'indice `i` revient
/// à `rotated[i % len]`, le modulo autorisant plus de tâches que de
/// personnes. L'appariement tâche/personne est identique sur les cinq
/// jours du bloc.
pub(super) fn assign_week(
    schedule: &mut Schedule,
    config: &RosterConfig,
    week: u32,
    week_start: NaiveDate,
) -> Result<(), RotaError> {
    let rotated = util::rotate_left(&config.staff_pool, week as usize);

    for day in 0..BLOCK_DAYS {
        let date = util::add_days(week_start, day)?;
        for (index, label) in config.task_list.iter().enumerate() {
            schedule.push(
                date,
                Shift {
                    staff: rotated[index % rotated.len()].clone(),
                    label: label.clone(),
                    kind: ShiftKind::Core,
                    week: week + 1,
                },
            );
        }
    }
    Ok(())
}
