#![forbid(unsafe_code)]
//! Escala — génération d'une escala mensuelle télétravail / présentiel.
//!
//! - Calendrier : jours ouvrés du mois découpés en semaines.
//! - Trois passes : quota hebdomadaire, couverture quotidienne, séries de jours identiques.
//! - Export XLSX coloré par semaine (écriture atomique).
//! - Source aléatoire injectable pour rejouer une escala.

pub mod calendar;
pub mod export;
pub mod io;
pub mod model;
pub mod scheduler;
pub mod service;

pub use calendar::{build_weeks, last_day_of_month, month_workdays, partition_weeks};
pub use export::{default_output_dir, Exporter, XlsxExporter};
pub use model::{
    AttendanceMode, Employee, EmployeeId, MonthCalendar, Roster, Week, Workday, MAX_EMPLOYEES,
};
pub use scheduler::{detect_violations, AssignOptions, SchedError, Scheduler, Violation, ViolationKind};
pub use service::{generate_and_save_schedule, generate_and_save_with, plan, ScheduleRequest};
