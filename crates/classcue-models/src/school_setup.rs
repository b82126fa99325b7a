//! School setup aggregate: a teacher's terms, periods, categories and
//! teaching days.
//!
//! Created during onboarding and replaced wholesale on every save; there is
//! no partial update.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashSet;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::days::DayCode;
use crate::ids::{PeriodId, TermId, UserId};
use crate::periods::Period;
use crate::terms::Term;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SchoolSetup {
    pub user_id: UserId,
    #[sqlx(json)]
    pub terms: Vec<Term>,
    #[sqlx(json)]
    pub periods: Vec<Period>,
    pub categories: Vec<String>,
    /// Days the teacher teaches; normally Monday to Friday
    pub school_days: Vec<DayCode>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SchoolSetup {
    pub fn period(&self, id: PeriodId) -> Option<&Period> {
        self.periods.iter().find(|p| p.id == id)
    }

    pub fn term(&self, id: TermId) -> Option<&Term> {
        self.terms.iter().find(|t| t.id == id)
    }

    /// The first term containing `date`.
    pub fn current_term(&self, date: NaiveDate) -> Option<&Term> {
        self.terms.iter().find(|t| t.contains(date))
    }

    /// Whether `day` is a teaching day. An empty set falls back to the
    /// Monday-Friday week.
    pub fn teaches_on(&self, day: DayCode) -> bool {
        if self.school_days.is_empty() {
            day.is_school_weekday()
        } else {
            self.school_days.contains(&day)
        }
    }
}

/// Full replacement payload for `PUT /api/school-setup`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_setup_ids"))]
pub struct SaveSchoolSetupDto {
    #[serde(default)]
    #[validate(nested)]
    pub terms: Vec<Term>,
    #[serde(default)]
    #[validate(nested)]
    pub periods: Vec<Period>,
    #[serde(default)]
    #[validate(custom(function = "validate_categories"))]
    pub categories: Vec<String>,
    #[serde(default = "default_school_days")]
    pub school_days: Vec<DayCode>,
}

fn default_school_days() -> Vec<DayCode> {
    DayCode::SCHOOL_WEEK.to_vec()
}

fn validate_categories(categories: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for category in categories {
        let name = category.trim();
        if name.is_empty() || name.chars().count() > 100 {
            let mut err = ValidationError::new("category_name");
            err.message = Some("Category names must be 1-100 characters".into());
            return Err(err);
        }
        if !seen.insert(name.to_lowercase()) {
            let mut err = ValidationError::new("duplicate_category");
            err.message = Some(format!("Category '{}' is listed twice", name).into());
            return Err(err);
        }
    }
    Ok(())
}

fn validate_setup_ids(dto: &SaveSchoolSetupDto) -> Result<(), ValidationError> {
    let mut periods = HashSet::new();
    if dto.periods.iter().any(|p| !periods.insert(p.id)) {
        let mut err = ValidationError::new("duplicate_period_id");
        err.message = Some("Period ids must be unique".into());
        return Err(err);
    }

    let mut terms = HashSet::new();
    if dto.terms.iter().any(|t| !terms.insert(t.id)) {
        let mut err = ValidationError::new("duplicate_term_id");
        err.message = Some("Term ids must be unique".into());
        return Err(err);
    }
    Ok(())
}
