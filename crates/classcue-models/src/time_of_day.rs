//! Clock times as stored on periods and schedule entries.
//!
//! Times travel as "H:MM AM/PM" strings. Comparing those strings directly
//! puts "10:00 AM" before "9:00 AM", so anything that orders by time parses
//! into [`TimeOfDay`] first and compares minutes since midnight.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("time must not be empty")]
    Empty,
    #[error("'{0}' is not a time in H:MM AM/PM format")]
    Format(String),
    #[error("hour out of range in '{0}'")]
    Hour(String),
    #[error("minute out of range in '{0}'")]
    Minute(String),
}

/// Minutes since midnight, 0..1440.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Builds a time from a 24-hour clock reading.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, TimeParseError> {
        if hour > 23 {
            return Err(TimeParseError::Hour(format!("{}:{:02}", hour, minute)));
        }
        if minute > 59 {
            return Err(TimeParseError::Minute(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    pub const fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }

    pub const fn hour(self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub const fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }
}

enum Meridiem {
    Am,
    Pm,
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    /// Accepts "9:00 AM", "09:00am", "12:30 PM" and 24-hour "14:05".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TimeParseError::Empty);
        }

        let upper = trimmed.to_ascii_uppercase();
        let (clock, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
            (rest.trim_end(), Some(Meridiem::Am))
        } else if let Some(rest) = upper.strip_suffix("PM") {
            (rest.trim_end(), Some(Meridiem::Pm))
        } else {
            (upper.as_str(), None)
        };

        let (hour_part, minute_part) = clock
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(trimmed.to_string()))?;

        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(hour_part) || hour_part.len() > 2 || minute_part.len() != 2 || !is_digits(minute_part) {
            return Err(TimeParseError::Format(trimmed.to_string()));
        }

        let hour: u8 = hour_part
            .parse()
            .map_err(|_| TimeParseError::Format(trimmed.to_string()))?;
        let minute: u8 = minute_part
            .parse()
            .map_err(|_| TimeParseError::Format(trimmed.to_string()))?;

        if minute > 59 {
            return Err(TimeParseError::Minute(trimmed.to_string()));
        }

        let hour = match meridiem {
            Some(_) if !(1..=12).contains(&hour) => {
                return Err(TimeParseError::Hour(trimmed.to_string()));
            }
            Some(Meridiem::Am) => hour % 12,
            Some(Meridiem::Pm) => hour % 12 + 12,
            None if hour > 23 => return Err(TimeParseError::Hour(trimmed.to_string())),
            None => hour,
        };

        Self::from_hm(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, suffix) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{}:{:02} {}", hour, self.minute(), suffix)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
