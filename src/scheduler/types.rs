use crate::model::{AttendanceMode, EmployeeId};
use thiserror::Error;

/// Options de génération
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignOptions {
    /// Relance la réparation de couverture après la réparation des séries.
    pub recheck_coverage: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    NoCoverage,                                   // aucun présentiel ce jour-là
    Streak { mode: AttendanceMode, len: usize }, // plus de 2 jours identiques d'affilée
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Ligne du jour concerné (premier jour de la série pour `Streak`).
    pub day: usize,
    pub employee: Option<EmployeeId>,
    pub kind: ViolationKind,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("too many employees: {count} given, at most {max} allowed")]
    TooManyEmployees { count: usize, max: usize },
    #[error("at least one employee is required")]
    NoEmployees,
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("invalid year: {0}")]
    InvalidYear(i32),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SchedError {
    /// Remonte une erreur d'export ; les erreurs d'E/S gardent leur contexte sous `Io`.
    pub fn from_export(err: anyhow::Error) -> Self {
        let context = err.to_string();
        match err.downcast::<std::io::Error>() {
            Ok(source) => Self::Io { context, source },
            Err(other) => Self::Other(other),
        }
    }
}
