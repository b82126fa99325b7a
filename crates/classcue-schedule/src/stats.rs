use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use classcue_models::Priority;

use crate::classify::Classification;

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total: usize,
    pub today: usize,
    pub upcoming: usize,
    pub past_due: usize,
    pub completed: usize,
    /// Open (not completed) reminders with high priority.
    pub high_priority_open: usize,
    /// Completed over total, in `0.0..=1.0`. Zero when there are no reminders.
    pub completion_rate: f64,
}

impl DashboardStats {
    pub fn from_classification(classification: &Classification<'_>) -> Self {
        let total = classification.len();
        let completed = classification.completed.len();

        let high_priority_open = classification
            .today
            .iter()
            .chain(&classification.upcoming)
            .chain(&classification.past_due)
            .filter(|reminder| reminder.priority == Priority::High)
            .count();

        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        };

        Self {
            total,
            today: classification.today.len(),
            upcoming: classification.upcoming.len(),
            past_due: classification.past_due.len(),
            completed,
            high_priority_open,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_on;
    use crate::test_support::{date, reminder};
    use chrono::Duration;
    use classcue_models::DayCode;

    #[test]
    fn test_empty_classification() {
        let stats = DashboardStats::from_classification(&Classification::default());
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(stats.completion_rate, 0.0);
    }

    #[test]
    fn test_counts_and_rate() {
        let today = date(2025, 9, 3);

        let mut overdue = reminder("overdue");
        overdue.priority = Priority::High;
        overdue.due_date = Some(today - Duration::days(2));

        let mut done = reminder("done");
        done.priority = Priority::High;
        done.completed = true;

        let mut later = reminder("later");
        later.due_date = Some(today + Duration::days(2));

        let mut due = reminder("due");
        due.due_date = Some(today);

        let reminders = vec![overdue, done, later, due];
        let classification = classify_on(&reminders, today, Some(DayCode::Wednesday), None);
        let stats = DashboardStats::from_classification(&classification);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.today, 1);
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.past_due, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.high_priority_open, 1);
        assert_eq!(stats.completion_rate, 0.25);
    }
}
