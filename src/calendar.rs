use crate::model::{MonthCalendar, Week, Workday};
use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate};

/// Calcule les jours ouvrés d'un mois et leur découpage en semaines.
pub fn build_weeks(year: i32, month: u32) -> Result<MonthCalendar, SchedError> {
    let workdays = month_workdays(year, month)?;
    let weeks = partition_weeks(&workdays);
    tracing::debug!(year, month, workdays = workdays.len(), weeks = weeks.len(), "calendar built");
    Ok(MonthCalendar {
        year,
        month,
        workdays,
        weeks,
    })
}

/// Dernier jour du mois : premier jour du mois suivant moins un jour.
pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, SchedError> {
    first_day(year, month)?;
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1).ok_or(SchedError::InvalidYear(year))?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or(SchedError::InvalidYear(year))
}

/// Jours lundi–vendredi du mois, en ordre croissant.
pub fn month_workdays(year: i32, month: u32) -> Result<Vec<Workday>, SchedError> {
    let first = first_day(year, month)?;
    let last = last_day_of_month(year, month)?;
    Ok(first
        .iter_days()
        .take_while(|d| *d <= last)
        .filter(|d| d.weekday().num_days_from_monday() < 5)
        .collect())
}

/// Découpe une liste ordonnée de jours ouvrés en semaines.
///
/// Une nouvelle semaine commence dès que l'indice du jour n'augmente plus strictement.
pub fn partition_weeks(workdays: &[Workday]) -> Vec<Week> {
    let mut weeks: Vec<Week> = Vec::new();
    let mut last_weekday: Option<u32> = None;

    for day in workdays {
        let weekday = day.weekday().num_days_from_monday();
        let rollover = last_weekday.map_or(true, |last| weekday <= last);
        if rollover {
            weeks.push(Week {
                number: weeks.len(),
                days: Vec::new(),
            });
        }
        if let Some(week) = weeks.last_mut() {
            week.days.push(*day);
        }
        last_weekday = Some(weekday);
    }

    weeks
}

fn first_day(year: i32, month: u32) -> Result<NaiveDate, SchedError> {
    if !(1..=12).contains(&month) {
        return Err(SchedError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(SchedError::InvalidYear(year))
}
