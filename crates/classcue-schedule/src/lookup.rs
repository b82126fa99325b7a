//! Reminder-to-period lookups that tolerate dangling references.
//!
//! Periods live inside the school setup document and reminders reference
//! them loosely, so a reminder may point at a period that has since been
//! removed. Lookups here resolve such references to "absent" rather than
//! failing.

use std::collections::HashMap;

use classcue_models::{Period, PeriodId, Reminder};

/// Placeholder shown wherever a reminder has no resolvable period.
pub const UNASSIGNED_LABEL: &str = "N/A";

#[derive(Debug, Clone, Default)]
pub struct PeriodIndex<'a> {
    by_id: HashMap<PeriodId, &'a Period>,
}

impl<'a> PeriodIndex<'a> {
    /// Indexes `periods` by id. When ids repeat, the first period wins.
    pub fn new(periods: &'a [Period]) -> Self {
        let mut by_id = HashMap::with_capacity(periods.len());
        for period in periods {
            by_id.entry(period.id).or_insert(period);
        }
        Self { by_id }
    }

    pub fn get(&self, id: PeriodId) -> Option<&'a Period> {
        self.by_id.get(&id).copied()
    }

    pub fn resolve(&self, reminder: &Reminder) -> Option<&'a Period> {
        reminder.period_id.and_then(|id| self.get(id))
    }

    /// The period's name, or [`UNASSIGNED_LABEL`] when the id is missing or dangling.
    pub fn display_name(&self, id: Option<PeriodId>) -> &'a str {
        id.and_then(|id| self.get(id))
            .map(|period| period.name.as_str())
            .unwrap_or(UNASSIGNED_LABEL)
    }

    /// True when the reminder names a period that no longer exists.
    pub fn is_orphaned(&self, reminder: &Reminder) -> bool {
        reminder.period_id.is_some() && self.resolve(reminder).is_none()
    }

    /// Reminders with no period, or with a period that no longer exists.
    pub fn unassigned<'r>(&self, reminders: impl IntoIterator<Item = &'r Reminder>) -> Vec<&'r Reminder> {
        reminders
            .into_iter()
            .filter(|reminder| self.resolve(reminder).is_none())
            .collect()
    }
}
