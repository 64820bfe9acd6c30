use super::{types::RotaError, util, ONCALL_AFTERNOON, ONCALL_MORNING};
use crate::config::RosterConfig;
use crate::model::{Schedule, Shift, ShiftKind};
use chrono::NaiveDate;

/// Affecte les deux renforts de la semaine `week` (base 0).
///
/// Rotation par indexation directe dans le pool non tourné, découplée de la
/// rotation du bloc de semaine. Les deux créneaux reviennent au même
/// membre : après-midi à `week_start + 1`, matin à `week_start + 5`.
pub(super) fn assign_week(
    schedule: &mut Schedule,
    config: &RosterConfig,
    week: u32,
    week_start: NaiveDate,
) -> Result<(), RotaError> {
    let lead = config.staff_pool[week as usize % config.staff_pool.len()].clone();

    let afternoon = util::add_days(week_start, 1)?;
    schedule.push(
        afternoon,
        Shift {
            staff: lead.clone(),
            label: ONCALL_AFTERNOON.to_string(),
            kind: ShiftKind::OnCall,
            week: week + 1,
        },
    );

    let morning = util::add_days(week_start, 5)?;
    schedule.push(
        morning,
        Shift {
            staff: lead,
            label: ONCALL_MORNING.to_string(),
            kind: ShiftKind::OnCall,
            week: week + 1,
        },
    );
    Ok(())
}
