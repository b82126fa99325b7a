//! Period and weekly schedule models.
//!
//! A period is a recurring class block. Its `schedules` say on which days it
//! meets and when; at most one entry per day is allowed on save, but stored
//! data is read leniently (first matching entry wins).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::days::DayCode;
use crate::ids::PeriodId;
use crate::time_of_day::{TimeOfDay, TimeParseError};

/// One weekly meeting of a period.
///
/// Times stay in their stored string form; call [`ScheduleEntry::start`] /
/// [`ScheduleEntry::end`] to compare them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_schedule_window"))]
pub struct ScheduleEntry {
    pub day_of_week: DayCode,
    /// Start time, e.g. "9:00 AM"
    pub start_time: String,
    /// End time, e.g. "9:50 AM"
    pub end_time: String,
}

impl ScheduleEntry {
    pub fn start(&self) -> Result<TimeOfDay, TimeParseError> {
        self.start_time.parse()
    }

    pub fn end(&self) -> Result<TimeOfDay, TimeParseError> {
        self.end_time.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_unique_schedule_days"))]
pub struct Period {
    /// Omitted ids are assigned on save
    #[serde(default)]
    pub id: PeriodId,
    /// Display name (e.g., "Period 1", "Homeroom")
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Default start time for the block
    #[validate(custom(function = "validate_time_string"))]
    pub start_time: String,
    /// Default end time for the block
    #[validate(custom(function = "validate_time_string"))]
    pub end_time: String,
    #[validate(length(max = 100))]
    pub subject: Option<String>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub schedules: Vec<ScheduleEntry>,
}

impl Period {
    /// The first schedule entry for `day`, if the period meets that day.
    pub fn schedule_for(&self, day: DayCode) -> Option<&ScheduleEntry> {
        self.schedules.iter().find(|s| s.day_of_week == day)
    }

    pub fn is_active_on(&self, day: DayCode) -> bool {
        self.schedule_for(day).is_some()
    }

    /// Days the period meets, in schedule order, without duplicates.
    pub fn meeting_days(&self) -> Vec<DayCode> {
        let mut seen = HashSet::new();
        self.schedules
            .iter()
            .map(|s| s.day_of_week)
            .filter(|day| seen.insert(*day))
            .collect()
    }
}

fn validate_time_string(value: &str) -> Result<(), ValidationError> {
    value.parse::<TimeOfDay>().map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("time_format");
        err.message = Some(e.to_string().into());
        err
    })
}

fn validate_schedule_window(entry: &ScheduleEntry) -> Result<(), ValidationError> {
    let (start, end) = match (entry.start(), entry.end()) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(e), _) | (_, Err(e)) => {
            let mut err = ValidationError::new("time_format");
            err.message = Some(e.to_string().into());
            return Err(err);
        }
    };

    if start >= end {
        let mut err = ValidationError::new("schedule_window");
        err.message = Some(
            format!(
                "Schedule on {} must start before it ends ({} - {})",
                entry.day_of_week, entry.start_time, entry.end_time
            )
            .into(),
        );
        return Err(err);
    }
    Ok(())
}

fn validate_unique_schedule_days(period: &Period) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for entry in &period.schedules {
        if !seen.insert(entry.day_of_week) {
            let mut err = ValidationError::new("duplicate_schedule_day");
            err.message = Some(
                format!(
                    "Period '{}' has more than one schedule on {}",
                    period.name, entry.day_of_week
                )
                .into(),
            );
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: DayCode, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry {
            day_of_week: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    fn period(schedules: Vec<ScheduleEntry>) -> Period {
        Period {
            id: PeriodId::new(),
            name: "Period 1".to_string(),
            start_time: "9:00 AM".to_string(),
            end_time: "9:50 AM".to_string(),
            subject: Some("Biology".to_string()),
            location: Some("Room 204".to_string()),
            schedules,
        }
    }

    #[test]
    fn test_valid_period() {
        let p = period(vec![
            entry(DayCode::Monday, "9:00 AM", "9:50 AM"),
            entry(DayCode::Wednesday, "10:00 AM", "10:50 AM"),
        ]);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_duplicate_day_rejected() {
        let p = period(vec![
            entry(DayCode::Monday, "9:00 AM", "9:50 AM"),
            entry(DayCode::Monday, "1:00 PM", "1:50 PM"),
        ]);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_schedule_must_start_before_end() {
        let p = period(vec![entry(DayCode::Monday, "10:00 AM", "9:00 AM")]);
        assert!(p.validate().is_err());

        // Lexicographically "9:50 AM" > "10:40 AM"; numerically it is earlier.
        let p = period(vec![entry(DayCode::Friday, "9:50 AM", "10:40 AM")]);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_malformed_time_rejected() {
        let p = period(vec![entry(DayCode::Monday, "nine", "9:50 AM")]);
        assert!(p.validate().is_err());

        let mut p = period(vec![]);
        p.start_time = "25:00".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_schedule_for_takes_first_match() {
        let p = period(vec![
            entry(DayCode::Tuesday, "8:00 AM", "8:50 AM"),
            entry(DayCode::Tuesday, "2:00 PM", "2:50 PM"),
        ]);
        assert_eq!(p.schedule_for(DayCode::Tuesday).unwrap().start_time, "8:00 AM");
        assert!(p.schedule_for(DayCode::Monday).is_none());
        assert!(p.is_active_on(DayCode::Tuesday));
        assert_eq!(p.meeting_days(), vec![DayCode::Tuesday]);
    }
}
