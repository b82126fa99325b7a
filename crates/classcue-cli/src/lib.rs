//! # ClassCue CLI
//!
//! Account and demo-data tooling for ClassCue development.
//!
//! Seeded teachers get a school setup (terms, periods, categories) and a
//! spread of reminders covering every due state, which makes the schedule
//! endpoints interesting to click through locally.
//!
//! ## Usage
//!
//! ```ignore
//! use classcue_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_reminders(30);
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
