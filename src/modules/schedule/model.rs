use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use classcue_core::serde::empty_string_as_none;

pub use classcue_schedule::{
    ClassifiedReminders, DashboardStats, DaySchedule, Diagnostic, DueState, ReminderRow,
    ScheduledPeriod, TodayView, WeekView,
};

/// Optional calendar date; clients send their local date.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Date as YYYY-MM-DD. Defaults to today's UTC date.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<NaiveDate>,
}

impl DateQuery {
    pub fn resolve(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}
