use crate::export::DAY_FORMAT;
use crate::model::{AttendanceMode, Employee, MonthCalendar, Roster, MAX_EMPLOYEES};
use crate::scheduler::SchedError;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Découpe la saisie "Ana, Bruno,Carla" en collaborateurs (noms nettoyés, entrées vides ignorées).
///
/// La limite de 20 porte sur les entrées brutes, entrées vides comprises.
pub fn parse_employee_names(raw: &str) -> Result<Vec<Employee>, SchedError> {
    let entries: Vec<&str> = raw.split(',').map(str::trim).collect();
    if entries.len() > MAX_EMPLOYEES {
        return Err(SchedError::TooManyEmployees {
            count: entries.len(),
            max: MAX_EMPLOYEES,
        });
    }
    Ok(Employee::from_names(
        entries.into_iter().filter(|name| !name.is_empty()),
    ))
}

#[derive(Serialize)]
struct RosterDump<'a> {
    year: i32,
    month: u32,
    employees: Vec<&'a str>,
    rows: Vec<RowDump>,
}

#[derive(Serialize)]
struct RowDump {
    day: String,
    week: Option<usize>,
    modes: Vec<AttendanceMode>,
}

/// Export JSON de l'escala (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    calendar: &MonthCalendar,
) -> anyhow::Result<()> {
    let dump = RosterDump {
        year: calendar.year,
        month: calendar.month,
        employees: roster.employees().iter().map(|e| e.name.as_str()).collect(),
        rows: roster
            .days()
            .iter()
            .enumerate()
            .map(|(idx, day)| RowDump {
                day: day.to_string(),
                week: calendar.week_of(idx),
                modes: roster.row(idx).to_vec(),
            })
            .collect(),
    };
    let s = serde_json::to_string_pretty(&dump)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV : header `day,<noms...>`, une ligne par jour ouvré.
pub fn export_roster_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    let mut header = vec!["day"];
    header.extend(roster.employees().iter().map(|e| e.name.as_str()));
    w.write_record(&header)?;
    for (idx, day) in roster.days().iter().enumerate() {
        let mut record = vec![day.format(DAY_FORMAT).to_string()];
        record.extend(roster.row(idx).iter().map(|m| m.as_str().to_string()));
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}
