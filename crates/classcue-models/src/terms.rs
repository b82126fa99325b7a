//! Term (semester, trimester, quarter) models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::ids::TermId;

/// A dated slice of the school year. Stored inside the owning school setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_term_dates"))]
pub struct Term {
    /// Omitted ids are assigned on save
    #[serde(default)]
    pub id: TermId,
    /// Name of the term (e.g., "Fall Semester", "Q1")
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Term {
    /// Whether `date` falls within the term, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

fn validate_term_dates(term: &Term) -> Result<(), ValidationError> {
    if term.start_date > term.end_date {
        let mut err = ValidationError::new("term_dates");
        err.message = Some(format!("Term '{}' starts after it ends", term.name).into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(start: (i32, u32, u32), end: (i32, u32, u32)) -> Term {
        Term {
            id: TermId::new(),
            name: "Fall Semester".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn test_term_validation() {
        assert!(term((2025, 9, 1), (2025, 12, 20)).validate().is_ok());
        assert!(term((2025, 9, 1), (2025, 9, 1)).validate().is_ok());
        assert!(term((2025, 12, 20), (2025, 9, 1)).validate().is_err());

        let mut unnamed = term((2025, 9, 1), (2025, 12, 20));
        unnamed.name = String::new();
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let fall = term((2025, 9, 1), (2025, 12, 20));
        assert!(fall.contains(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
        assert!(fall.contains(NaiveDate::from_ymd_opt(2025, 12, 20).unwrap()));
        assert!(!fall.contains(NaiveDate::from_ymd_opt(2025, 12, 21).unwrap()));
    }

    #[test]
    fn test_missing_id_is_generated() {
        let parsed: Term = serde_json::from_str(
            r#"{"name":"Q1","start_date":"2025-09-01","end_date":"2025-11-01"}"#,
        )
        .unwrap();
        assert_eq!(parsed.name, "Q1");
    }
}
