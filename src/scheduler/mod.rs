mod assignment;
mod conflicts;
mod repair;
mod types;
mod util;

pub use types::{AssignOptions, SchedError, Violation, ViolationKind};
pub(crate) use util::check_headcount;

use crate::model::{Employee, MonthCalendar, Roster};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scheduler : porte la source aléatoire et les options de génération.
#[derive(Debug)]
pub struct Scheduler<R = StdRng> {
    rng: R,
    opts: AssignOptions,
}

impl Scheduler<StdRng> {
    /// Source aléatoire initialisée depuis l'entropie du système.
    pub fn new(opts: AssignOptions) -> Self {
        Self::with_rng(StdRng::from_entropy(), opts)
    }

    /// Source déterministe, pour rejouer une escala.
    pub fn seeded(seed: u64, opts: AssignOptions) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), opts)
    }
}

impl Default for Scheduler<StdRng> {
    fn default() -> Self {
        Self::new(AssignOptions::default())
    }
}

impl<R: Rng> Scheduler<R> {
    pub fn with_rng(rng: R, opts: AssignOptions) -> Self {
        Self { rng, opts }
    }

    /// Enchaîne quota, réparation de couverture puis réparation des séries.
    pub fn generate(
        &mut self,
        employees: &[Employee],
        calendar: &MonthCalendar,
    ) -> Result<Roster, SchedError> {
        check_headcount(employees.len())?;

        let mut roster = self.assign_quotas(employees, calendar)?;
        let repaired = self.repair_coverage(&mut roster);
        let flips = self.repair_streaks(&mut roster);
        tracing::debug!(
            repaired_days = repaired.len(),
            streak_flips = flips,
            "repair passes done"
        );

        if self.opts.recheck_coverage {
            let rechecked = self.repair_coverage(&mut roster);
            tracing::debug!(rechecked_days = rechecked.len(), "coverage rechecked");
        }

        Ok(roster)
    }

    pub fn assign_quotas(
        &mut self,
        employees: &[Employee],
        calendar: &MonthCalendar,
    ) -> Result<Roster, SchedError> {
        assignment::assign_quotas(&mut self.rng, employees, calendar)
    }

    /// Retourne les lignes réparées.
    pub fn repair_coverage(&mut self, roster: &mut Roster) -> Vec<usize> {
        repair::repair_coverage(&mut self.rng, roster)
    }

    /// Retourne le nombre de cellules inversées.
    pub fn repair_streaks(&self, roster: &mut Roster) -> usize {
        repair::repair_streaks(roster)
    }
}

/// Jours sans présentiel et séries de plus de deux jours identiques.
pub fn detect_violations(roster: &Roster) -> Vec<Violation> {
    conflicts::detect_violations(roster)
}
