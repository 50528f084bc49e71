use crate::calendar;
use crate::export::{Exporter, XlsxExporter};
use crate::io;
use crate::model::{Employee, MonthCalendar, Roster};
use crate::scheduler::{check_headcount, detect_violations, AssignOptions, SchedError, Scheduler};
use rand::Rng;
use std::path::PathBuf;

/// Saisie validée de l'utilisateur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub employees: Vec<Employee>,
    pub year: i32,
    pub month: u32,
}

impl ScheduleRequest {
    /// Valide le nombre de noms avant de parser le mois et l'année.
    pub fn parse(names_csv: &str, month: &str, year: &str) -> Result<Self, SchedError> {
        let employees = io::parse_employee_names(names_csv)?;
        check_headcount(employees.len())?;
        let month = month
            .trim()
            .parse::<u32>()
            .map_err(|e| SchedError::Parse(format!("month {month:?}: {e}")))?;
        let year = year
            .trim()
            .parse::<i32>()
            .map_err(|e| SchedError::Parse(format!("year {year:?}: {e}")))?;
        Ok(Self {
            employees,
            year,
            month,
        })
    }

    pub fn new(names_csv: &str, year: i32, month: u32) -> Result<Self, SchedError> {
        let employees = io::parse_employee_names(names_csv)?;
        check_headcount(employees.len())?;
        Ok(Self {
            employees,
            year,
            month,
        })
    }
}

/// Génère l'escala du mois et l'enregistre dans le dossier par défaut.
pub fn generate_and_save_schedule(
    names_csv: &str,
    year: i32,
    month: u32,
) -> Result<PathBuf, SchedError> {
    let request = ScheduleRequest::new(names_csv, year, month)?;
    let exporter = XlsxExporter::with_default_dir().map_err(SchedError::from_export)?;
    let mut scheduler = Scheduler::new(AssignOptions::default());
    generate_and_save_with(&request, &mut scheduler, &exporter)
}

pub fn generate_and_save_with<R: Rng, E: Exporter + ?Sized>(
    request: &ScheduleRequest,
    scheduler: &mut Scheduler<R>,
    exporter: &E,
) -> Result<PathBuf, SchedError> {
    let (roster, calendar) = plan(request, scheduler)?;
    let path = exporter
        .export(&roster, &calendar)
        .map_err(SchedError::from_export)?;
    Ok(path)
}

/// Construit le calendrier et l'escala sans rien écrire.
pub fn plan<R: Rng>(
    request: &ScheduleRequest,
    scheduler: &mut Scheduler<R>,
) -> Result<(Roster, MonthCalendar), SchedError> {
    let calendar = calendar::build_weeks(request.year, request.month)?;
    let roster = scheduler.generate(&request.employees, &calendar)?;

    for violation in detect_violations(&roster) {
        let day = roster.days()[violation.day];
        let employee = violation.employee.map(|id| id.index());
        tracing::warn!(
            day = %day,
            employee = ?employee,
            kind = ?violation.kind,
            "roster left with a policy violation"
        );
    }

    Ok((roster, calendar))
}
