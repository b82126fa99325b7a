//! The teacher's school setup: terms, periods with their weekly schedule,
//! categories and teaching days.
//!
//! A setup is created during onboarding and always replaced as a whole.
//! Having no setup means onboarding has not been completed.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
