#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate};
use escala::{build_weeks, last_day_of_month, month_workdays, partition_weeks, SchedError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weekdays_only_ascending_and_complete() {
    for year in 2020..=2030 {
        for month in 1..=12 {
            let cal = build_weeks(year, month).unwrap();

            let expected: Vec<NaiveDate> = (1..=31)
                .filter_map(|d| NaiveDate::from_ymd_opt(year, month, d))
                .filter(|d| d.weekday().num_days_from_monday() < 5)
                .collect();
            assert_eq!(cal.workdays, expected, "{year}-{month}");

            for pair in cal.workdays.windows(2) {
                assert!(pair[0] < pair[1]);
            }

            let flattened: Vec<NaiveDate> =
                cal.weeks.iter().flat_map(|w| w.days.iter().copied()).collect();
            assert_eq!(flattened, cal.workdays);

            for (n, week) in cal.weeks.iter().enumerate() {
                assert_eq!(week.number, n);
                assert!((1..=5).contains(&week.days.len()));
                let iso = week.days[0].iso_week();
                assert!(week.days.iter().all(|d| d.iso_week() == iso));
            }
        }
    }
}

#[test]
fn month_starting_midweek_has_short_first_week() {
    // 1er mai 2024 : mercredi
    let cal = build_weeks(2024, 5).unwrap();
    assert_eq!(cal.workdays.len(), 23);
    assert_eq!(cal.weeks.len(), 5);
    assert_eq!(cal.weeks[0].days, vec![date(2024, 5, 1), date(2024, 5, 2), date(2024, 5, 3)]);
    assert!(!cal.weeks[0].is_full());
    assert!(cal.weeks[1..].iter().all(|w| w.is_full()));
    assert_eq!(cal.week_of(3), Some(1));
    assert_eq!(cal.week_of(99), None);
}

#[test]
fn week_partition_snapshot() {
    let cal = build_weeks(2024, 5).unwrap();
    let rendered: Vec<String> = cal
        .weeks
        .iter()
        .map(|w| {
            let days: Vec<String> = w.days.iter().map(|d| d.format("%d/%m").to_string()).collect();
            format!("{}: {}", w.number, days.join(" "))
        })
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r###"
    0: 01/05 02/05 03/05
    1: 06/05 07/05 08/05 09/05 10/05
    2: 13/05 14/05 15/05 16/05 17/05
    3: 20/05 21/05 22/05 23/05 24/05
    4: 27/05 28/05 29/05 30/05 31/05
    "###);
}

#[test]
fn end_of_month_is_calendar_correct() {
    assert_eq!(last_day_of_month(2024, 2).unwrap(), date(2024, 2, 29));
    assert_eq!(last_day_of_month(2023, 2).unwrap(), date(2023, 2, 28));
    assert_eq!(last_day_of_month(2024, 4).unwrap(), date(2024, 4, 30));
    assert_eq!(last_day_of_month(2024, 12).unwrap(), date(2024, 12, 31));

    let december = month_workdays(2024, 12).unwrap();
    assert_eq!(december.first(), Some(&date(2024, 12, 2)));
    assert_eq!(december.last(), Some(&date(2024, 12, 31)));
    assert_eq!(december.len(), 22);
}

#[test]
fn build_weeks_is_pure() {
    assert_eq!(build_weeks(2024, 4).unwrap(), build_weeks(2024, 4).unwrap());
}

#[test]
fn rollover_detected_on_non_increasing_weekday() {
    // mercredi puis lundi suivant : deux semaines
    let days = [date(2024, 5, 1), date(2024, 5, 6), date(2024, 5, 7)];
    let weeks = partition_weeks(&days);
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].days, vec![date(2024, 5, 1)]);
    assert_eq!(weeks[1].days, vec![date(2024, 5, 6), date(2024, 5, 7)]);

    assert!(partition_weeks(&[]).is_empty());
}

#[test]
fn invalid_month_is_rejected() {
    assert!(matches!(build_weeks(2024, 0), Err(SchedError::InvalidMonth(0))));
    assert!(matches!(build_weeks(2024, 13), Err(SchedError::InvalidMonth(13))));
    assert!(matches!(build_weeks(i32::MAX, 1), Err(SchedError::InvalidYear(_))));
}
