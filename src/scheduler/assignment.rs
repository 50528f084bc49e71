use super::{types::SchedError, util};
use crate::model::{AttendanceMode, Employee, MonthCalendar, Roster, Week};
use anyhow::anyhow;
use rand::seq::index;
use rand::Rng;

/// Passe 1 : quota hebdomadaire tiré au hasard, indépendamment par collaborateur et par semaine.
pub(super) fn assign_quotas<R: Rng + ?Sized>(
    rng: &mut R,
    employees: &[Employee],
    calendar: &MonthCalendar,
) -> Result<Roster, SchedError> {
    let mut columns = Vec::with_capacity(employees.len());

    for _ in employees {
        let mut column = Vec::with_capacity(calendar.workdays.len());
        for week in &calendar.weeks {
            column.extend(week_modes(rng, week));
        }
        columns.push(column);
    }

    Roster::from_columns(calendar.workdays.clone(), employees.to_vec(), columns).ok_or_else(|| {
        SchedError::Other(anyhow!(
            "weeks do not cover the workdays or employee ids are not ordinal"
        ))
    })
}

fn week_modes<R: Rng + ?Sized>(rng: &mut R, week: &Week) -> Vec<AttendanceMode> {
    let quota = if week.is_full() {
        util::FULL_WEEK_REMOTE_DAYS
    } else {
        util::SHORT_WEEK_REMOTE_DAYS
    };
    let len = week.days.len();
    let remote = index::sample(rng, len, quota.min(len)).into_vec();

    (0..len)
        .map(|i| {
            if remote.contains(&i) {
                AttendanceMode::Remote
            } else {
                AttendanceMode::OnSite
            }
        })
        .collect()
}
