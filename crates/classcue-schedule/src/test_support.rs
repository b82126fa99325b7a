use chrono::{NaiveDate, TimeZone, Utc};

use classcue_models::{
    DayCode, Period, PeriodId, Priority, Recurrence, Reminder, ReminderId, ScheduleEntry, UserId,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn period(name: &str, slots: &[(DayCode, &str)]) -> Period {
    Period {
        id: PeriodId::new(),
        name: name.to_string(),
        start_time: slots.first().map(|s| s.1).unwrap_or("8:00 AM").to_string(),
        end_time: "11:59 PM".to_string(),
        subject: None,
        location: None,
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

pub fn reminder(title: &str) -> Reminder {
    let created = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
    Reminder {
        id: ReminderId::new(),
        user_id: UserId::new(),
        title: title.to_string(),
        period_id: None,
        days: Vec::new(),
        timing: "Before".to_string(),
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
