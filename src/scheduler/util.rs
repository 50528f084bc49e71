use super::SchedError;
use crate::model::MAX_EMPLOYEES;

/// Jours de télétravail par semaine complète ; les deux autres sont en présentiel.
pub(super) const FULL_WEEK_REMOTE_DAYS: usize = 3;
/// Semaine partielle : un seul jour de télétravail.
pub(super) const SHORT_WEEK_REMOTE_DAYS: usize = 1;
/// Longueur maximale d'une série de jours identiques.
pub(super) const MAX_STREAK: usize = 2;

pub(crate) fn check_headcount(count: usize) -> Result<(), SchedError> {
    if count == 0 {
        return Err(SchedError::NoEmployees);
    }
    if count > MAX_EMPLOYEES {
        return Err(SchedError::TooManyEmployees {
            count,
            max: MAX_EMPLOYEES,
        });
    }
    Ok(())
}
