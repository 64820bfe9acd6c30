use super::types::DoubleDuty;
use crate::model::{Schedule, ShiftKind};

/// Liste, jour par jour, les membres tenant à la fois une tâche de semaine
/// et un renfort. Une entrée par couple (date, membre).
pub(super) fn detect_double_duty(schedule: &Schedule) -> Vec<DoubleDuty> {
    let mut out: Vec<DoubleDuty> = Vec::new();

    for (date, shifts) in schedule.days() {
        for oncall in shifts.iter().filter(|s| s.kind == ShiftKind::OnCall) {
            let also_core = shifts
                .iter()
                .any(|s| s.kind == ShiftKind::Core && s.staff == oncall.staff);
            if !also_core {
                continue;
            }
            let already = out
                .iter()
                .any(|d| d.date == date && d.staff == oncall.staff);
            if !already {
                out.push(DoubleDuty {
                    date,
                    staff: oncall.staff.clone(),
                });
            }
        }
    }

    out
}
