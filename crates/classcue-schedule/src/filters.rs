//! Composable reminder filters.

use classcue_models::{DayCode, PeriodId, Priority, Reminder, ReminderFilterParams, TermId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderFilter {
    /// Case-insensitive category match.
    Category(String),
    Priority(Priority),
    Day(DayCode),
    Period(PeriodId),
    Term(TermId),
    Completed(bool),
    /// `true` keeps reminders with no period; `false` keeps those with one.
    Unassigned(bool),
}

impl ReminderFilter {
    pub fn matches(&self, reminder: &Reminder) -> bool {
        match self {
            ReminderFilter::Category(category) => reminder
                .category
                .as_deref()
                .is_some_and(|c| c.trim().eq_ignore_ascii_case(category.trim())),
            ReminderFilter::Priority(priority) => reminder.priority == *priority,
            ReminderFilter::Day(day) => reminder.fires_on(*day),
            ReminderFilter::Period(id) => reminder.period_id == Some(*id),
            ReminderFilter::Term(id) => reminder.term_id == Some(*id),
            ReminderFilter::Completed(completed) => reminder.completed == *completed,
            ReminderFilter::Unassigned(unassigned) => reminder.period_id.is_none() == *unassigned,
        }
    }
}

/// Conjunction of filters. An empty set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<ReminderFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: ReminderFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn push(&mut self, filter: ReminderFilter) {
        self.filters.push(filter);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn filters(&self) -> &[ReminderFilter] {
        &self.filters
    }

    pub fn matches(&self, reminder: &Reminder) -> bool {
        self.filters.iter().all(|filter| filter.matches(reminder))
    }

    pub fn apply<'a>(&self, reminders: impl IntoIterator<Item = &'a Reminder>) -> Vec<&'a Reminder> {
        reminders
            .into_iter()
            .filter(|reminder| self.matches(reminder))
            .collect()
    }
}

impl From<&ReminderFilterParams> for FilterSet {
    fn from(params: &ReminderFilterParams) -> Self {
        let mut set = FilterSet::new();
        if let Some(category) = &params.category {
            set.push(ReminderFilter::Category(category.clone()));
        }
        if let Some(priority) = params.priority {
            set.push(ReminderFilter::Priority(priority));
        }
        if let Some(day) = params.day {
            set.push(ReminderFilter::Day(day));
        }
        if let Some(period_id) = params.period_id {
            set.push(ReminderFilter::Period(period_id));
        }
        if let Some(term_id) = params.term_id {
            set.push(ReminderFilter::Term(term_id));
        }
        if let Some(completed) = params.completed {
            set.push(ReminderFilter::Completed(completed));
        }
        if let Some(unassigned) = params.unassigned {
            set.push(ReminderFilter::Unassigned(unassigned));
        }
        set
    }
}
