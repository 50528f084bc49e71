use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nombre maximal de collaborateurs par escala.
pub const MAX_EMPLOYEES: usize = 20;

/// Jour ouvré (lundi–vendredi) du mois cible.
pub type Workday = NaiveDate;

/// Identifiant fort pour Employee : position ordinale dans la saisie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(usize);

impl EmployeeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

/// Collaborateur. Deux noms identiques restent deux colonnes distinctes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
}

impl Employee {
    pub fn new<N: AsRef<str>>(index: usize, name: N) -> Self {
        Self {
            id: EmployeeId::new(index),
            name: name.as_ref().trim().to_owned(),
        }
    }

    /// Construit la liste ordonnée à partir de noms bruts.
    pub fn from_names<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| Self::new(idx, name))
            .collect()
    }
}

/// Mode de présence d'un collaborateur pour une journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceMode {
    Remote,
    OnSite,
}

impl AttendanceMode {
    /// Libellé écrit dans la feuille de calcul.
    pub fn label(self) -> &'static str {
        match self {
            Self::Remote => "Home",
            Self::OnSite => "Presencial",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::OnSite => "on_site",
        }
    }
}

impl fmt::Display for AttendanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Groupe contigu de jours ouvrés, unité d'équité du quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub number: usize,
    pub days: Vec<Workday>,
}

impl Week {
    /// Semaine complète (lundi à vendredi).
    pub fn is_full(&self) -> bool {
        self.days.len() >= 5
    }
}

/// Jours ouvrés d'un mois et leur découpage en semaines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub workdays: Vec<Workday>,
    pub weeks: Vec<Week>,
}

impl MonthCalendar {
    /// Numéro de semaine de la ligne `day_index`.
    pub fn week_of(&self, day_index: usize) -> Option<usize> {
        let day = self.workdays.get(day_index)?;
        self.weeks
            .iter()
            .find(|w| w.days.contains(day))
            .map(|w| w.number)
    }
}

/// Escala complète : lignes = jours, colonnes = collaborateurs.
///
/// La grille est dense, indexée ligne par ligne ; chaque cellule est remplie dès la construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    days: Vec<Workday>,
    employees: Vec<Employee>,
    cells: Vec<AttendanceMode>,
}

impl Roster {
    /// Assemble une escala à partir des colonnes (une par collaborateur, dans l'ordre des jours).
    ///
    /// Retourne `None` si une colonne n'a pas exactement une valeur par jour,
    /// ou si les identifiants ne suivent pas l'ordre des colonnes.
    pub fn from_columns(
        days: Vec<Workday>,
        employees: Vec<Employee>,
        columns: Vec<Vec<AttendanceMode>>,
    ) -> Option<Self> {
        if columns.len() != employees.len() || columns.iter().any(|c| c.len() != days.len()) {
            return None;
        }
        if employees.iter().enumerate().any(|(i, e)| e.id.index() != i) {
            return None;
        }
        let width = employees.len();
        let mut cells = Vec::with_capacity(days.len() * width);
        for row in 0..days.len() {
            cells.extend(columns.iter().map(|col| col[row]));
        }
        Some(Self {
            days,
            employees,
            cells,
        })
    }

    pub fn days(&self) -> &[Workday] {
        &self.days
    }
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn get(&self, day: usize, employee: EmployeeId) -> AttendanceMode {
        self.cells[self.offset(day, employee)]
    }

    pub fn set(&mut self, day: usize, employee: EmployeeId, mode: AttendanceMode) {
        let at = self.offset(day, employee);
        self.cells[at] = mode;
    }

    /// Modes de tous les collaborateurs pour la ligne `day`.
    pub fn row(&self, day: usize) -> &[AttendanceMode] {
        let width = self.employees.len();
        &self.cells[day * width..(day + 1) * width]
    }

    /// Modes d'un collaborateur, dans l'ordre chronologique.
    pub fn column(&self, employee: EmployeeId) -> impl Iterator<Item = AttendanceMode> + '_ {
        (0..self.days.len()).map(move |day| self.get(day, employee))
    }

    pub fn on_site_count(&self, day: usize) -> usize {
        self.row(day)
            .iter()
            .filter(|m| **m == AttendanceMode::OnSite)
            .count()
    }

    fn offset(&self, day: usize, employee: EmployeeId) -> usize {
        day * self.employees.len() + employee.index()
    }
}
