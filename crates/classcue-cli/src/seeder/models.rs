//! Seed records and the knobs that control how many are generated.

use chrono::NaiveDate;
use classcue_models::{
    DayCode, Period, PeriodId, Priority, Recurrence, Term, TermId, UserId,
};

/// Every seeded account uses this email domain so `clear-seed` can find
/// them again without touching real accounts.
pub const SEED_EMAIL_DOMAIN: &str = "seed.classcue.test";

/// Password shared by all seeded teachers.
pub const SEED_PASSWORD: &str = "password123";

/// Seed data for creating a teacher account.
pub struct UserSeed {
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
}

/// Seed data for one teacher's school setup.
pub struct SchoolSetupSeed {
    pub user_id: UserId,
    pub terms: Vec<Term>,
    pub periods: Vec<Period>,
    pub categories: Vec<String>,
    pub school_days: Vec<DayCode>,
}

impl SchoolSetupSeed {
    /// Ids and categories reminders may point at.
    pub fn targets(&self) -> ReminderTargets {
        ReminderTargets {
            user_id: self.user_id,
            period_ids: self.periods.iter().map(|p| p.id).collect(),
            term_ids: self.terms.iter().map(|t| t.id).collect(),
            categories: self.categories.clone(),
        }
    }
}

/// What a generated reminder is allowed to reference.
#[derive(Clone)]
pub struct ReminderTargets {
    pub user_id: UserId,
    pub period_ids: Vec<PeriodId>,
    pub term_ids: Vec<TermId>,
    pub categories: Vec<String>,
}

/// Seed data for creating a reminder.
pub struct ReminderSeed {
    pub user_id: UserId,
    pub title: String,
    pub period_id: Option<PeriodId>,
    pub days: Vec<DayCode>,
    pub timing: String,
    pub reminder_type: String,
    pub priority: Priority,
    pub category: Option<String>,
    pub recurrence: Recurrence,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub term_id: Option<TermId>,
    pub notes: Option<String>,
}

/// Complete configuration for database seeding.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub teachers: usize,
    pub periods_per_teacher: usize,
    pub reminders_per_teacher: usize,
    /// Anchor for generated due dates and term boundaries
    pub today: NaiveDate,
}

impl SeedConfig {
    pub fn new(teachers: usize) -> Self {
        Self {
            teachers,
            periods_per_teacher: 6,
            reminders_per_teacher: 20,
            today: chrono::Utc::now().date_naive(),
        }
    }

    pub fn with_periods(mut self, periods: usize) -> Self {
        self.periods_per_teacher = periods;
        self
    }

    pub fn with_reminders(mut self, reminders: usize) -> Self {
        self.reminders_per_teacher = reminders;
        self
    }

    pub fn total_reminders(&self) -> usize {
        self.teachers * self.reminders_per_teacher
    }
}
