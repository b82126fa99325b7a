//! Reminder models, request DTOs and filter parameters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use classcue_core::serde::empty_string_as_none;

use crate::days::DayCode;
use crate::ids::{PeriodId, ReminderId, TermId, UserId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[sqlx(type_name = "reminder_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        })
    }
}

/// How often a reminder re-fires.
///
/// Only `Once` reminders are driven by `due_date`; every other pattern is
/// evaluated against the reminder's `days`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[sqlx(type_name = "reminder_recurrence", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    #[default]
    Once,
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
}

impl Recurrence {
    pub const fn is_recurring(self) -> bool {
        !matches!(self, Recurrence::Once)
    }

    /// Patterns whose interaction with `due_date` has no defined meaning yet.
    pub const fn has_undefined_cadence(self) -> bool {
        matches!(self, Recurrence::BiWeekly | Recurrence::Monthly)
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recurrence::Once => "once",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::BiWeekly => "bi_weekly",
            Recurrence::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reminder {
    pub id: ReminderId,
    pub user_id: UserId,
    pub title: String,
    /// Weak reference into the owner's school setup; may dangle
    pub period_id: Option<PeriodId>,
    /// Weekly days the reminder fires on
    pub days: Vec<DayCode>,
    /// When in the class block the reminder applies (e.g., "before class")
    pub timing: String,
    #[serde(rename = "type")]
    pub reminder_type: String,
    pub priority: Priority,
    pub category: Option<String>,
    pub recurrence: Recurrence,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub term_id: Option<TermId>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reminder {
    pub fn fires_on(&self, day: DayCode) -> bool {
        self.days.contains(&day)
    }
}

/// Create/replace payload for a reminder.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SaveReminderDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub period_id: Option<PeriodId>,
    #[serde(default)]
    pub days: Vec<DayCode>,
    #[validate(length(min = 1, max = 50))]
    pub timing: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub reminder_type: String,
    #[serde(default)]
    pub priority: Priority,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[serde(default)]
    pub recurrence: Recurrence,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    pub term_id: Option<TermId>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl SaveReminderDto {
    /// Days in week order with duplicates removed.
    pub fn normalized_days(&self) -> Vec<DayCode> {
        let mut days = self.days.clone();
        days.sort();
        days.dedup();
        days
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkCompleteRequest {
    #[validate(length(min = 1, max = 500))]
    pub ids: Vec<ReminderId>,
}

/// Outcome of a bulk completion; ids that could not be updated are listed
/// rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkCompleteResponse {
    pub requested: usize,
    pub completed: Vec<ReminderId>,
    pub failed: Vec<ReminderId>,
}

impl BulkCompleteResponse {
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty() && !self.completed.is_empty()
    }
}

/// Query filters for listing reminders. All present filters must match.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReminderFilterParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub day: Option<DayCode>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub period_id: Option<PeriodId>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub term_id: Option<TermId>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub completed: Option<bool>,
    /// Only reminders with no period
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unassigned: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> SaveReminderDto {
        serde_json::from_value(serde_json::json!({
            "title": "Collect permission slips",
            "days": ["W", "M", "M"],
            "timing": "before class",
            "type": "task"
        }))
        .unwrap()
    }

    #[test]
    fn test_dto_defaults() {
        let dto = dto();
        assert_eq!(dto.priority, Priority::Medium);
        assert_eq!(dto.recurrence, Recurrence::Once);
        assert!(!dto.completed);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_normalized_days_sorted_and_deduped() {
        assert_eq!(
            dto().normalized_days(),
            vec![DayCode::Monday, DayCode::Wednesday]
        );
    }

    #[test]
    fn test_dto_validation() {
        let mut d = dto();
        d.title = String::new();
        assert!(d.validate().is_err());

        let mut d = dto();
        d.category = Some(String::new());
        assert!(d.validate().is_err());

        let mut d = dto();
        d.notes = Some("x".repeat(2001));
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_recurrence_serde() {
        assert_eq!(
            serde_json::to_string(&Recurrence::BiWeekly).unwrap(),
            "\"bi_weekly\""
        );
        assert!(Recurrence::Weekly.is_recurring());
        assert!(!Recurrence::Once.is_recurring());
        assert!(Recurrence::Monthly.has_undefined_cadence());
        assert!(!Recurrence::Daily.has_undefined_cadence());
    }

    #[test]
    fn test_bulk_request_bounds() {
        let empty = BulkCompleteRequest { ids: vec![] };
        assert!(empty.validate().is_err());
        let one = BulkCompleteRequest {
            ids: vec![ReminderId::new()],
        };
        assert!(one.validate().is_ok());
    }

    #[test]
    fn test_filter_params_ignore_empty_values() {
        let params: ReminderFilterParams = serde_json::from_value(serde_json::json!({
            "category": "",
            "priority": "high",
            "day": "Th",
            "completed": "false"
        }))
        .unwrap();
        assert!(params.category.is_none());
        assert_eq!(params.priority, Some(Priority::High));
        assert_eq!(params.day, Some(DayCode::Thursday));
        assert_eq!(params.completed, Some(false));
    }
}
