use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::collections::HashSet;

use classcue_models::{
    DayCode, Period, PeriodId, Priority, Recurrence, Reminder, ReminderId, ScheduleEntry, UserId,
};
use classcue_schedule::{
    DueState, FilterSet, PeriodIndex, ReminderFilter, classify, classify_on, group_by_period,
    resolve_day_code,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at_noon(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(12, 0, 0).unwrap()
}

fn period(name: &str, slots: &[(DayCode, &str)]) -> Period {
    Period {
        id: PeriodId::new(),
        name: name.to_string(),
        start_time: "8:00 AM".to_string(),
        end_time: "11:59 PM".to_string(),
        subject: Some("Math".to_string()),
        location: Some("Room 12".to_string()),
        schedules: slots
            .iter()
            .map(|(day, start)| ScheduleEntry {
                day_of_week: *day,
                start_time: start.to_string(),
                end_time: "11:59 PM".to_string(),
            })
            .collect(),
    }
}

fn reminder(title: &str) -> Reminder {
    let created = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
    Reminder {
        id: ReminderId::new(),
        user_id: UserId::new(),
        title: title.to_string(),
        period_id: None,
        days: Vec::new(),
        timing: "Start of class".to_string(),
        reminder_type: "Task".to_string(),
        priority: Priority::Medium,
        category: None,
        recurrence: Recurrence::Once,
        due_date: None,
        completed: false,
        term_id: None,
        notes: None,
        created_at: created,
        updated_at: created,
    }
}

fn ids(reminders: &[&Reminder]) -> HashSet<ReminderId> {
    reminders.iter().map(|r| r.id).collect()
}

/// A week of periods and reminders in varied states.
fn fixture(today: NaiveDate) -> (Vec<Period>, Vec<Reminder>) {
    let periods = vec![
        period("Biology", &[(DayCode::Monday, "10:00 AM"), (DayCode::Thursday, "1:00 PM")]),
        period("Algebra", &[(DayCode::Monday, "9:00 AM"), (DayCode::Tuesday, "9:00 AM")]),
        period("Study Hall", &[(DayCode::Friday, "2:30 PM")]),
    ];

    let mut reminders = Vec::new();
    for (i, day) in DayCode::SCHOOL_WEEK.iter().enumerate() {
        for offset in -3..=3_i64 {
            let mut r = reminder(&format!("r-{}-{}", day, offset));
            r.period_id = Some(periods[i % periods.len()].id);
            r.days = vec![*day];
            r.due_date = Some(today + Duration::days(offset));
            r.completed = offset % 2 == 0 && i % 2 == 0;
            r.recurrence = match offset.rem_euclid(4) {
                0 => Recurrence::Once,
                1 => Recurrence::Weekly,
                2 => Recurrence::Daily,
                _ => Recurrence::Once,
            };
            reminders.push(r);
        }
    }
    (periods, reminders)
}

#[test]
fn test_grouping_includes_exactly_periods_meeting_that_day() {
    let (periods, reminders) = fixture(date(2025, 9, 1));

    for day in [
        DayCode::Monday,
        DayCode::Tuesday,
        DayCode::Wednesday,
        DayCode::Thursday,
        DayCode::Friday,
        DayCode::Saturday,
        DayCode::Sunday,
    ] {
        let grouping = group_by_period(&periods, &reminders, day);
        let grouped: HashSet<PeriodId> = grouping.groups.iter().map(|g| g.period.id).collect();
        for period in &periods {
            let meets = period.schedules.iter().any(|s| s.day_of_week == day);
            assert_eq!(grouped.contains(&period.id), meets, "{} on {}", period.name, day);
        }
        for group in &grouping.groups {
            for r in &group.reminders {
                assert_eq!(r.period_id, Some(group.period.id));
                assert!(r.days.contains(&day));
            }
        }
    }
}

#[test]
fn test_grouping_orders_by_parsed_start_time() {
    let (periods, reminders) = fixture(date(2025, 9, 1));
    let grouping = group_by_period(&periods, &reminders, DayCode::Monday);

    let names: Vec<&str> = grouping.groups.iter().map(|g| g.period.name.as_str()).collect();
    assert_eq!(names, vec!["Algebra", "Biology"]);

    let starts: Vec<u16> = grouping
        .groups
        .iter()
        .map(|g| g.schedule.start().unwrap().minutes_since_midnight())
        .collect();
    assert!(starts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_resolve_day_code_is_total_over_a_year() {
    let start = date(2025, 1, 1);
    for offset in 0..366 {
        let day = start + Duration::days(offset);
        let code = resolve_day_code(day);
        assert!(DayCode::SCHOOL_WEEK.contains(&code), "{} resolved to {}", day, code);
    }
    assert_eq!(resolve_day_code(date(2025, 9, 6)), DayCode::Monday);
}

#[test]
fn test_past_due_and_completed_are_disjoint_and_exhaustive() {
    for offset in 0..7 {
        let today = date(2025, 9, 1) + Duration::days(offset);
        let (_, reminders) = fixture(date(2025, 9, 3));
        let classification = classify(&reminders, at_noon(today));

        assert!(ids(&classification.past_due).is_disjoint(&ids(&classification.completed)));
        assert_eq!(classification.len(), reminders.len());

        let mut seen = HashSet::new();
        for state in [DueState::Today, DueState::Upcoming, DueState::PastDue, DueState::Completed] {
            for r in classification.bucket(state) {
                assert!(seen.insert(r.id), "{} classified twice", r.title);
            }
        }
    }
}

#[test]
fn test_classification_is_idempotent() {
    let today = date(2025, 9, 3);
    let (_, reminders) = fixture(today);
    let first = classify(&reminders, at_noon(today));
    let second = classify(&reminders, at_noon(today));
    assert_eq!(first, second);
}

#[test]
fn test_monday_period_reminder_shows_in_group_and_today() {
    let monday = date(2025, 9, 1);
    let periods = vec![period("P1", &[(DayCode::Monday, "9:00 AM")])];
    let mut r = reminder("R");
    r.period_id = Some(periods[0].id);
    r.days = vec![DayCode::Monday];
    let reminders = vec![r];

    let grouping = group_by_period(&periods, &reminders, resolve_day_code(monday));
    assert_eq!(grouping.groups.len(), 1);
    assert_eq!(grouping.groups[0].reminders[0].title, "R");

    let classification = classify(&reminders, at_noon(monday));
    assert_eq!(classification.today.len(), 1);
    assert_eq!(classification.today[0].title, "R");
}

#[test]
fn test_yesterdays_once_reminder_is_past_due() {
    let today = date(2025, 9, 3);
    let mut r = reminder("yesterday");
    r.due_date = Some(today - Duration::days(1));
    let reminders = vec![r];

    let classification = classify(&reminders, at_noon(today));
    assert_eq!(classification.past_due.len(), 1);
    assert!(classification.today.is_empty());
    assert!(classification.upcoming.is_empty());
}

#[test]
fn test_orphaned_reminder_is_classified_but_not_grouped() {
    let monday = date(2025, 9, 1);
    let periods = vec![period("P1", &[(DayCode::Monday, "9:00 AM")])];
    let mut orphan = reminder("orphan");
    orphan.period_id = Some(PeriodId::new());
    orphan.days = vec![DayCode::Monday];
    let reminders = vec![orphan];

    let grouping = group_by_period(&periods, &reminders, DayCode::Monday);
    assert_eq!(grouping.reminder_count(), 0);

    let classification = classify(&reminders, at_noon(monday));
    assert_eq!(classification.today.len(), 1);

    let index = PeriodIndex::new(&periods);
    assert_eq!(index.display_name(reminders[0].period_id), "N/A");
    assert!(index.is_orphaned(&reminders[0]));
}

#[test]
fn test_recurring_reminders_never_go_past_due() {
    let today = date(2025, 9, 3);
    let mut reminders = Vec::new();
    for recurrence in [
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::BiWeekly,
        Recurrence::Monthly,
    ] {
        let mut r = reminder(&recurrence.to_string());
        r.recurrence = recurrence;
        r.due_date = Some(today - Duration::days(14));
        r.days = vec![DayCode::Wednesday];
        reminders.push(r);
    }

    let classification = classify(&reminders, at_noon(today));
    assert!(classification.past_due.is_empty());
    assert_eq!(classification.today.len(), 4);
    assert_eq!(classification.diagnostics.len(), 2);
}

#[test]
fn test_filters_apply_after_classification() {
    let today = date(2025, 9, 3);
    let (periods, reminders) = fixture(today);
    let classification = classify(&reminders, at_noon(today));

    let algebra = FilterSet::new().with(ReminderFilter::Period(periods[1].id));
    let filtered = algebra.apply(classification.past_due.iter().copied());
    assert!(filtered.iter().all(|r| r.period_id == Some(periods[1].id)));
    assert!(filtered.len() <= classification.past_due.len());
}

#[test]
fn test_period_reminders_due_today_match_the_grouping() {
    let monday_only = period("Algebra", &[(DayCode::Monday, "9:00 AM")]);
    let every_day = period(
        "Homeroom",
        &DayCode::SCHOOL_WEEK.map(|day| (day, "8:00 AM")),
    );
    let periods = vec![monday_only.clone(), every_day.clone()];
    let index = PeriodIndex::new(&periods);

    let mut off_day = reminder("algebra task");
    off_day.recurrence = Recurrence::Weekly;
    off_day.period_id = Some(monday_only.id);
    off_day.days = vec![DayCode::Wednesday];

    let mut on_day = reminder("attendance");
    on_day.recurrence = Recurrence::Daily;
    on_day.period_id = Some(every_day.id);
    on_day.days = DayCode::SCHOOL_WEEK.to_vec();

    let reminders = vec![off_day, on_day];
    let wednesday = date(2025, 9, 3);
    let classification = classify_on(&reminders, wednesday, Some(DayCode::Wednesday), Some(&index));
    let grouping = group_by_period(&periods, &reminders, DayCode::Wednesday);

    let due: HashSet<ReminderId> = classification.today.iter().map(|r| r.id).collect();
    let grouped: HashSet<ReminderId> = grouping
        .groups
        .iter()
        .flat_map(|group| group.reminders.iter().map(|r| r.id))
        .collect();
    assert_eq!(due, grouped);
    assert_eq!(classification.upcoming.len(), 1);
    assert_eq!(classification.upcoming[0].title, "algebra task");
}
