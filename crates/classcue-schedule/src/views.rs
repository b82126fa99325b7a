//! Owned, serializable payloads combining resolver, grouper and classifier.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

use classcue_models::{DayCode, Period, Reminder, ReminderId, ScheduleEntry, SchoolSetup, Term};

use crate::classify::{Classification, DueState, classify_on};
use crate::day::{resolve_day_code, week_start};
use crate::diagnostics::Diagnostic;
use crate::grouping::{Grouping, PeriodGroup, group_by_period};
use crate::lookup::PeriodIndex;
use crate::stats::DashboardStats;

/// A reminder with its resolved period name and due state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReminderRow {
    #[serde(flatten)]
    pub reminder: Reminder,
    /// Period name, or "N/A" when unassigned or dangling.
    pub period_name: String,
    pub due_state: DueState,
}

impl ReminderRow {
    pub fn new(reminder: &Reminder, index: &PeriodIndex<'_>, due_state: DueState) -> Self {
        Self {
            reminder: reminder.clone(),
            period_name: index.display_name(reminder.period_id).to_string(),
            due_state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduledPeriod {
    pub period: Period,
    pub schedule: ScheduleEntry,
    pub reminders: Vec<Reminder>,
}

impl From<&PeriodGroup<'_>> for ScheduledPeriod {
    fn from(group: &PeriodGroup<'_>) -> Self {
        Self {
            period: group.period.clone(),
            schedule: group.schedule.clone(),
            reminders: group.reminders.iter().map(|r| (*r).clone()).collect(),
        }
    }
}

fn scheduled(grouping: &Grouping<'_>) -> Vec<ScheduledPeriod> {
    grouping.groups.iter().map(ScheduledPeriod::from).collect()
}

/// The classifier's buckets as owned rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifiedReminders {
    pub today: Vec<ReminderRow>,
    pub upcoming: Vec<ReminderRow>,
    pub past_due: Vec<ReminderRow>,
    pub completed: Vec<ReminderRow>,
}

impl ClassifiedReminders {
    pub fn from_classification(classification: &Classification<'_>, index: &PeriodIndex<'_>) -> Self {
        let rows = |state: DueState| -> Vec<ReminderRow> {
            classification
                .bucket(state)
                .iter()
                .map(|reminder| ReminderRow::new(reminder, index, state))
                .collect()
        };

        Self {
            today: rows(DueState::Today),
            upcoming: rows(DueState::Upcoming),
            past_due: rows(DueState::PastDue),
            completed: rows(DueState::Completed),
        }
    }
}

/// Periods and reminders for a single day code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DaySchedule {
    pub day: DayCode,
    /// Calendar date, when the schedule was built for a concrete week.
    pub date: Option<NaiveDate>,
    pub is_school_day: bool,
    pub periods: Vec<ScheduledPeriod>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DaySchedule {
    /// Groups `periods` for `day` without regard to the school-day set.
    pub fn for_day(periods: &[Period], reminders: &[Reminder], day: DayCode) -> Self {
        let grouping = group_by_period(periods, reminders, day);
        Self {
            day,
            date: None,
            is_school_day: true,
            periods: scheduled(&grouping),
            diagnostics: grouping.diagnostics,
        }
    }
}

/// Everything the "today" screen needs in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TodayView {
    pub date: NaiveDate,
    /// Resolved day code; weekends resolve to `M`.
    pub day_code: DayCode,
    pub is_school_day: bool,
    pub onboarded: bool,
    pub current_term: Option<Term>,
    /// Periods meeting today, earliest first. Empty when there is no school.
    pub schedule: Vec<ScheduledPeriod>,
    /// Reminders due today that are not shown under any of today's periods.
    pub unscheduled: Vec<ReminderRow>,
    pub reminders: ClassifiedReminders,
    pub stats: DashboardStats,
    pub diagnostics: Vec<Diagnostic>,
}

/// The day code classes follow on `date`, or `None` without classes.
///
/// Without a setup, Monday to Friday are school days. A setup that teaches
/// on a weekend day uses that day's own code.
pub fn school_day_code(setup: Option<&SchoolSetup>, date: NaiveDate) -> Option<DayCode> {
    let weekday = DayCode::from_weekday(date.weekday());
    match setup {
        Some(setup) => setup.teaches_on(weekday).then_some(weekday),
        None => weekday.is_school_weekday().then(|| resolve_day_code(date)),
    }
}

impl TodayView {
    pub fn build(setup: Option<&SchoolSetup>, reminders: &[Reminder], date: NaiveDate) -> Self {
        let periods = setup.map(|s| s.periods.as_slice()).unwrap_or_default();
        let index = PeriodIndex::new(periods);
        let school_day = school_day_code(setup, date);

        let classification = classify_on(reminders, date, school_day, Some(&index));
        let grouping = match school_day {
            Some(day) => group_by_period(periods, reminders, day),
            None => Grouping::default(),
        };

        let grouped: HashSet<ReminderId> = grouping
            .groups
            .iter()
            .flat_map(|group| group.reminders.iter().map(|r| r.id))
            .collect();
        let unscheduled = classification
            .today
            .iter()
            .filter(|reminder| !grouped.contains(&reminder.id))
            .map(|reminder| ReminderRow::new(reminder, &index, DueState::Today))
            .collect();

        let mut diagnostics = grouping.diagnostics.clone();
        diagnostics.extend(classification.diagnostics.iter().cloned());

        Self {
            date,
            day_code: resolve_day_code(date),
            is_school_day: school_day.is_some(),
            onboarded: setup.is_some(),
            current_term: setup.and_then(|s| s.current_term(date)).cloned(),
            schedule: scheduled(&grouping),
            unscheduled,
            reminders: ClassifiedReminders::from_classification(&classification, &index),
            stats: DashboardStats::from_classification(&classification),
            diagnostics,
        }
    }
}

/// Monday to Friday of the week containing `week_of`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeekView {
    /// Monday of the week.
    pub week_of: NaiveDate,
    pub days: Vec<DaySchedule>,
}

impl WeekView {
    pub fn build(setup: Option<&SchoolSetup>, reminders: &[Reminder], date: NaiveDate) -> Self {
        let monday = week_start(date);
        let periods = setup.map(|s| s.periods.as_slice()).unwrap_or_default();

        let days = DayCode::SCHOOL_WEEK
            .iter()
            .zip(0..)
            .map(|(&day, offset)| {
                let day_date = monday + Duration::days(offset);
                let is_school_day = setup.is_none_or(|s| s.teaches_on(day));
                let mut schedule = DaySchedule::for_day(periods, reminders, day);
                if !is_school_day {
                    schedule.periods.clear();
                }
                DaySchedule {
                    date: Some(day_date),
                    is_school_day,
                    ..schedule
                }
            })
            .collect();

        Self { week_of: monday, days }
    }
}
