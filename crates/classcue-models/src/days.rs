//! Day-of-week codes used by schedules and reminders.
//!
//! The enum declares all seven days, but the school week only covers
//! Monday to Friday. Weekend codes exist so stored data round-trips; the
//! reconciliation logic never produces them.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
    sqlx::Type,
)]
#[sqlx(type_name = "day_code")]
pub enum DayCode {
    #[serde(rename = "M")]
    #[sqlx(rename = "M")]
    Monday,
    #[serde(rename = "T")]
    #[sqlx(rename = "T")]
    Tuesday,
    #[serde(rename = "W")]
    #[sqlx(rename = "W")]
    Wednesday,
    #[serde(rename = "Th")]
    #[sqlx(rename = "Th")]
    Thursday,
    #[serde(rename = "F")]
    #[sqlx(rename = "F")]
    Friday,
    #[serde(rename = "Sa")]
    #[sqlx(rename = "Sa")]
    Saturday,
    #[serde(rename = "Su")]
    #[sqlx(rename = "Su")]
    Sunday,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a day code (expected one of M, T, W, Th, F, Sa, Su)")]
pub struct DayCodeParseError(pub String);

impl DayCode {
    /// Monday through Friday, in order.
    pub const SCHOOL_WEEK: [DayCode; 5] = [
        DayCode::Monday,
        DayCode::Tuesday,
        DayCode::Wednesday,
        DayCode::Thursday,
        DayCode::Friday,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            DayCode::Monday => "M",
            DayCode::Tuesday => "T",
            DayCode::Wednesday => "W",
            DayCode::Thursday => "Th",
            DayCode::Friday => "F",
            DayCode::Saturday => "Sa",
            DayCode::Sunday => "Su",
        }
    }

    /// Direct mapping of a chrono weekday, weekends included.
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayCode::Monday,
            Weekday::Tue => DayCode::Tuesday,
            Weekday::Wed => DayCode::Wednesday,
            Weekday::Thu => DayCode::Thursday,
            Weekday::Fri => DayCode::Friday,
            Weekday::Sat => DayCode::Saturday,
            Weekday::Sun => DayCode::Sunday,
        }
    }

    pub const fn is_school_weekday(self) -> bool {
        !matches!(self, DayCode::Saturday | DayCode::Sunday)
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DayCode {
    type Err = DayCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "mon" | "monday" => Ok(DayCode::Monday),
            "t" | "tue" | "tuesday" => Ok(DayCode::Tuesday),
            "w" | "wed" | "wednesday" => Ok(DayCode::Wednesday),
            "th" | "thu" | "thursday" => Ok(DayCode::Thursday),
            "f" | "fri" | "friday" => Ok(DayCode::Friday),
            "sa" | "sat" | "saturday" => Ok(DayCode::Saturday),
            "su" | "sun" | "sunday" => Ok(DayCode::Sunday),
            _ => Err(DayCodeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_short_codes() {
        assert_eq!(serde_json::to_string(&DayCode::Thursday).unwrap(), "\"Th\"");
        let parsed: Vec<DayCode> = serde_json::from_str(r#"["M","Th","F"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![DayCode::Monday, DayCode::Thursday, DayCode::Friday]
        );
    }

    #[test]
    fn test_from_str_accepts_codes_and_names() {
        assert_eq!("Th".parse::<DayCode>().unwrap(), DayCode::Thursday);
        assert_eq!("th".parse::<DayCode>().unwrap(), DayCode::Thursday);
        assert_eq!("T".parse::<DayCode>().unwrap(), DayCode::Tuesday);
        assert_eq!("friday".parse::<DayCode>().unwrap(), DayCode::Friday);
        assert!("X".parse::<DayCode>().is_err());
    }

    #[test]
    fn test_display_matches_code() {
        for day in DayCode::SCHOOL_WEEK {
            assert_eq!(day.to_string(), day.code());
            assert_eq!(day.code().parse::<DayCode>().unwrap(), day);
        }
    }

    #[test]
    fn test_weekend_is_not_school_weekday() {
        assert!(DayCode::Friday.is_school_weekday());
        assert!(!DayCode::Saturday.is_school_weekday());
        assert!(!DayCode::from_weekday(Weekday::Sun).is_school_weekday());
    }
}
