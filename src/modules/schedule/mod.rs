//! Read-only schedule views built from the user's school setup and
//! reminders: today, the school week, a single day, and dashboard counts.
//!
//! The reconciliation itself lives in `classcue-schedule`; this module only
//! loads the inputs and serves the results.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
