use super::util::MAX_STREAK;
use crate::model::{AttendanceMode, EmployeeId, Roster};
use rand::seq::SliceRandom;
use rand::Rng;

/// Passe 2 : force un présentiel tiré au hasard sur chaque jour qui n'en a aucun.
pub(super) fn repair_coverage<R: Rng + ?Sized>(rng: &mut R, roster: &mut Roster) -> Vec<usize> {
    let mut repaired = Vec::new();

    for day in 0..roster.day_count() {
        if roster.on_site_count(day) > 0 {
            continue;
        }
        let Some(pick) = roster.employees().choose(rng).map(|e| e.id) else {
            break;
        };
        roster.set(day, pick, AttendanceMode::OnSite);
        tracing::debug!(day, employee = pick.index(), "coverage repaired");
        repaired.push(day);
    }

    repaired
}

/// Passe 3 : balayage unique par collaborateur ; le 3e jour identique d'affilée est inversé.
pub(super) fn repair_streaks(roster: &mut Roster) -> usize {
    let mut flips = 0usize;

    for idx in 0..roster.employee_count() {
        let employee = EmployeeId::new(idx);
        let mut streak_remote = 0usize;
        let mut streak_on_site = 0usize;

        for day in 0..roster.day_count() {
            match roster.get(day, employee) {
                AttendanceMode::Remote => {
                    streak_remote += 1;
                    streak_on_site = 0;
                }
                AttendanceMode::OnSite => {
                    streak_on_site += 1;
                    streak_remote = 0;
                }
            }

            if streak_on_site > MAX_STREAK {
                roster.set(day, employee, AttendanceMode::Remote);
                streak_remote = 1;
                streak_on_site = 0;
                flips += 1;
            }

            if streak_remote > MAX_STREAK {
                roster.set(day, employee, AttendanceMode::OnSite);
                streak_remote = 0;
                streak_on_site = 1;
                flips += 1;
            }
        }
    }

    flips
}
