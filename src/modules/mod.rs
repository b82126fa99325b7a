pub mod auth;
pub mod reminders;
pub mod schedule;
pub mod school_setup;
