//! Reminder CRUD, completion toggling, bulk completion and the past-due
//! review list.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
