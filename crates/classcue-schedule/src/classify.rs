//! Due-state classification.
//!
//! Every reminder lands in exactly one bucket:
//!
//! | reminder                                   | bucket     |
//! |--------------------------------------------|------------|
//! | completed                                  | completed  |
//! | once, due before today                     | past due   |
//! | once, due today                            | today      |
//! | once, due after today                      | upcoming   |
//! | once without due date, or any recurrence   | today if it fires on today's code on a school day, else upcoming |
//!
//! A day-driven reminder tied to a known period is only due today when that
//! period also meets today. Unassigned and dangling reminders follow their
//! `days` alone.
//!
//! Recurring reminders never become past due: their due date, if any, is
//! ignored.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use utoipa::ToSchema;

use classcue_models::{DayCode, Recurrence, Reminder};

use crate::day::{is_school_weekday, resolve_day_code};
use crate::diagnostics::Diagnostic;
use crate::lookup::PeriodIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DueState {
    Today,
    Upcoming,
    PastDue,
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Classification<'a> {
    pub today: Vec<&'a Reminder>,
    pub upcoming: Vec<&'a Reminder>,
    pub past_due: Vec<&'a Reminder>,
    pub completed: Vec<&'a Reminder>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Classification<'a> {
    pub fn bucket(&self, state: DueState) -> &[&'a Reminder] {
        match state {
            DueState::Today => &self.today,
            DueState::Upcoming => &self.upcoming,
            DueState::PastDue => &self.past_due,
            DueState::Completed => &self.completed,
        }
    }

    pub fn len(&self) -> usize {
        self.today.len() + self.upcoming.len() + self.past_due.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, state: DueState, reminder: &'a Reminder) {
        match state {
            DueState::Today => self.today.push(reminder),
            DueState::Upcoming => self.upcoming.push(reminder),
            DueState::PastDue => self.past_due.push(reminder),
            DueState::Completed => self.completed.push(reminder),
        }
    }
}

/// Decides the bucket for one reminder on `today`.
///
/// `school_day` is the day code classes follow on `today`, or `None` when
/// there are no classes. Day-driven reminders are only due today on a
/// school day whose code they fire on. With `periods`, a reminder whose
/// period resolves additionally needs that period to meet on the day.
pub fn due_state(
    reminder: &Reminder,
    today: NaiveDate,
    school_day: Option<DayCode>,
    periods: Option<&PeriodIndex<'_>>,
) -> DueState {
    if reminder.completed {
        return DueState::Completed;
    }

    if reminder.recurrence == Recurrence::Once {
        if let Some(due) = reminder.due_date {
            return match due.cmp(&today) {
                Ordering::Less => DueState::PastDue,
                Ordering::Equal => DueState::Today,
                Ordering::Greater => DueState::Upcoming,
            };
        }
    }

    let period = periods.and_then(|index| index.resolve(reminder));
    let due_today = school_day.is_some_and(|day| {
        reminder.fires_on(day) && period.is_none_or(|period| period.is_active_on(day))
    });

    if due_today {
        DueState::Today
    } else {
        DueState::Upcoming
    }
}

/// Classifies reminders against the calendar date of `now`, treating
/// Monday to Friday as school days.
pub fn classify(reminders: &[Reminder], now: NaiveDateTime) -> Classification<'_> {
    let today = now.date();
    let school_day = is_school_weekday(today).then(|| resolve_day_code(today));
    classify_on(reminders, today, school_day, None)
}

/// Classifies reminders against `today` with an explicit school day code.
/// See [`due_state`].
pub fn classify_on<'a>(
    reminders: &'a [Reminder],
    today: NaiveDate,
    school_day: Option<DayCode>,
    periods: Option<&PeriodIndex<'_>>,
) -> Classification<'a> {
    let mut classification = Classification::default();

    for reminder in reminders {
        if reminder.recurrence.has_undefined_cadence() {
            classification.diagnostics.push(Diagnostic::UnspecifiedRecurrence {
                reminder_id: reminder.id,
                recurrence: reminder.recurrence,
            });
        }
        classification.push(due_state(reminder, today, school_day, periods), reminder);
    }

    classification
}
