use super::types::RotaError;
use crate::model::StaffId;
use chrono::{Days, NaiveDate};

/// Rotation cyclique vers la gauche : les `by % len` premiers éléments
/// passent en queue, ordre relatif préservé. `pool` non vide.
pub(super) fn rotate_left(pool: &[StaffId], by: usize) -> Vec<StaffId> {
    let cut = by % pool.len();
    pool[cut..]
        .iter()
        .chain(pool[..cut].iter())
        .cloned()
        .collect()
}

pub(super) fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, RotaError> {
    date.checked_add_days(Days::new(days))
        .ok_or(RotaError::DateOverflow(date))
}
