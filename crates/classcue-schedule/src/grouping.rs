//! Period grouping for a single school day.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use classcue_models::{DayCode, Period, PeriodId, Reminder, ScheduleEntry, TimeOfDay};

use crate::diagnostics::Diagnostic;

/// One period meeting on the requested day, with the reminders attached to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodGroup<'a> {
    pub period: &'a Period,
    /// The first schedule entry of `period` for the requested day.
    pub schedule: &'a ScheduleEntry,
    pub reminders: Vec<&'a Reminder>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grouping<'a> {
    /// Ordered by start time, earliest first.
    pub groups: Vec<PeriodGroup<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Grouping<'a> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn reminder_count(&self) -> usize {
        self.groups.iter().map(|group| group.reminders.len()).sum()
    }

    pub fn group(&self, id: PeriodId) -> Option<&PeriodGroup<'a>> {
        self.groups.iter().find(|group| group.period.id == id)
    }
}

/// Builds the ordered list of periods meeting on `day`, each paired with the
/// reminders that reference it and fire on `day`.
///
/// Periods whose start time cannot be parsed are kept, sorted after every
/// well-formed period, and reported as [`Diagnostic::MalformedTime`].
/// Reminders pointing at an unknown period are left out of every group.
pub fn group_by_period<'a>(
    periods: &'a [Period],
    reminders: &'a [Reminder],
    day: DayCode,
) -> Grouping<'a> {
    let mut by_period: HashMap<PeriodId, Vec<&'a Reminder>> = HashMap::new();
    for reminder in reminders.iter().filter(|r| r.fires_on(day)) {
        if let Some(period_id) = reminder.period_id {
            by_period.entry(period_id).or_default().push(reminder);
        }
    }

    let mut diagnostics = Vec::new();
    let mut keyed: Vec<(Option<TimeOfDay>, PeriodGroup<'a>)> = Vec::new();

    for period in periods {
        let Some(schedule) = period.schedule_for(day) else {
            continue;
        };

        let start = match schedule.start() {
            Ok(start) => Some(start),
            Err(e) => {
                debug!(period_id = %period.id, value = %schedule.start_time, "Unparseable start time");
                diagnostics.push(Diagnostic::MalformedTime {
                    period_id: period.id,
                    period_name: period.name.clone(),
                    day,
                    value: schedule.start_time.clone(),
                    reason: e.to_string(),
                });
                None
            }
        };

        keyed.push((
            start,
            PeriodGroup {
                period,
                schedule,
                reminders: by_period.get(&period.id).cloned().unwrap_or_default(),
            },
        ));
    }

    // `sort_by_key` is stable: equal start times keep their input order.
    keyed.sort_by_key(|(start, _)| match start {
        Some(time) => (false, time.minutes_since_midnight()),
        None => (true, 0),
    });

    Grouping {
        groups: keyed.into_iter().map(|(_, group)| group).collect(),
        diagnostics,
    }
}
