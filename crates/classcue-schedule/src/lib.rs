//! # ClassCue Schedule
//!
//! Pure reconciliation of a teacher's weekly schedule with their reminders.
//!
//! Three transforms feed each other:
//!
//! ```text
//! calendar date ──► day::resolve_day_code ──► DayCode
//!                                              │
//! periods + reminders ──► grouping::group_by_period ──► ordered (period, reminders[])
//! reminders + now ──────► classify::classify ─────────► today / upcoming / past due / completed
//! ```
//!
//! Nothing here performs I/O or holds state: the same inputs always give the
//! same outputs, and every function is safe to call from any thread.
//! Data-quality problems (an unparseable start time, a recurrence pattern
//! with no defined cadence) never fail a call; they come back as
//! [`Diagnostic`]s next to the result.
//!
//! [`views`] composes the pieces into the payloads the API serves.

pub mod classify;
pub mod day;
pub mod diagnostics;
pub mod filters;
pub mod grouping;
pub mod lookup;
pub mod stats;
pub mod views;

pub use classify::{Classification, DueState, classify, classify_on, due_state};
pub use day::{is_school_weekday, resolve_day_code, week_start};
pub use diagnostics::Diagnostic;
pub use filters::{FilterSet, ReminderFilter};
pub use grouping::{Grouping, PeriodGroup, group_by_period};
pub use lookup::{PeriodIndex, UNASSIGNED_LABEL};
pub use stats::DashboardStats;
pub use views::{
    ClassifiedReminders, DaySchedule, ReminderRow, ScheduledPeriod, TodayView, WeekView,
    school_day_code,
};

#[cfg(test)]
pub(crate) mod test_support;
