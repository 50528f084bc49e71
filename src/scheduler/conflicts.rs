use super::{util::MAX_STREAK, Violation, ViolationKind};
use crate::model::{AttendanceMode, EmployeeId, Roster};

pub(super) fn detect_violations(roster: &Roster) -> Vec<Violation> {
    let mut out = Vec::new();

    for day in 0..roster.day_count() {
        if roster.on_site_count(day) == 0 {
            out.push(Violation {
                day,
                employee: None,
                kind: ViolationKind::NoCoverage,
            });
        }
    }

    for employee in roster.employees() {
        let mut run: Option<(AttendanceMode, usize, usize)> = None; // (mode, début, longueur)
        for (day, mode) in roster.column(employee.id).enumerate() {
            run = match run {
                Some((current, start, len)) if current == mode => Some((current, start, len + 1)),
                Some(done) => {
                    push_streak(&mut out, employee.id, done);
                    Some((mode, day, 1))
                }
                None => Some((mode, day, 1)),
            };
        }
        if let Some(done) = run {
            push_streak(&mut out, employee.id, done);
        }
    }

    out
}

fn push_streak(
    out: &mut Vec<Violation>,
    employee: EmployeeId,
    (mode, start, len): (AttendanceMode, usize, usize),
) {
    if len > MAX_STREAK {
        out.push(Violation {
            day: start,
            employee: Some(employee),
            kind: ViolationKind::Streak { mode, len },
        });
    }
}
