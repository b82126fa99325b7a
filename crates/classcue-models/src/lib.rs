//! # ClassCue Models
//!
//! Domain models and DTOs shared by the API, the reconciliation core and
//! the CLI.
//!
//! - [`ids`]: Strongly-typed UUID newtypes
//! - [`days`]: [`DayCode`] weekday codes
//! - [`time_of_day`]: Parsed clock times for ordering schedules
//! - [`terms`], [`periods`], [`school_setup`]: The school setup aggregate
//! - [`reminders`]: Reminders, their enums and request DTOs
//! - [`users`], [`auth`]: Accounts and authentication DTOs

pub mod auth;
pub mod days;
pub mod ids;
pub mod periods;
pub mod reminders;
pub mod school_setup;
pub mod terms;
pub mod time_of_day;
pub mod users;

pub use auth::{LoginRequest, LoginResponse, MessageResponse, RefreshTokenRequest, RegisterRequest};
pub use days::{DayCode, DayCodeParseError};
pub use ids::{PeriodId, ReminderId, TermId, UserId};
pub use periods::{Period, ScheduleEntry};
pub use reminders::{
    BulkCompleteRequest, BulkCompleteResponse, Priority, Recurrence, Reminder,
    ReminderFilterParams, SaveReminderDto,
};
pub use school_setup::{SaveSchoolSetupDto, SchoolSetup};
pub use terms::Term;
pub use time_of_day::{TimeOfDay, TimeParseError};
pub use users::User;
