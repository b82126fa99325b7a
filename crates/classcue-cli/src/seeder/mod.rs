//! Demo data seeding.
//!
//! Data is generated in memory with `fake` and `rayon`, then written with
//! multi-row `INSERT`s, one transaction per table.

pub mod models;
pub mod reminders;
pub mod school_setups;
pub mod users;

pub use models::{SEED_EMAIL_DOMAIN, SEED_PASSWORD, SeedConfig};

use sqlx::PgPool;
use std::time::Instant;

/// Summary of a seeding run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedReport {
    pub teachers: usize,
    pub setups: usize,
    pub reminders: u64,
}

/// Seeds teachers, one school setup each, and their reminders.
pub async fn seed_all(
    db: &PgPool,
    config: SeedConfig,
) -> Result<SeedReport, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} teachers with {} periods and {} reminders each\n",
        config.teachers, config.periods_per_teacher, config.reminders_per_teacher
    );

    // Shared by every seeded account.
    let password_hash = classcue_core::hash_password(SEED_PASSWORD)
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let user_ids = users::seed_users(db, config.teachers, &password_hash).await?;

    let setups =
        school_setups::generate_setups(&user_ids, config.periods_per_teacher, config.today);
    school_setups::seed_school_setups(db, &setups).await?;

    let targets: Vec<_> = setups.iter().map(|s| s.targets()).collect();
    let reminders =
        reminders::generate_reminders(&targets, config.reminders_per_teacher, config.today);
    let inserted = reminders::seed_reminders(db, &reminders).await?;

    println!("\n✅ Seeding finished in {:?}", start_time.elapsed());
    println!(
        "   Log in as any seeded teacher with password '{}'",
        SEED_PASSWORD
    );

    Ok(SeedReport {
        teachers: user_ids.len(),
        setups: setups.len(),
        reminders: inserted,
    })
}

/// Removes every seeded teacher and everything they own.
pub async fn clear_all(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🧹 Clearing seeded data...\n");

    let deleted = users::clear_users(db).await?;

    println!("\n✅ Cleared seeded data in {:?}", start_time.elapsed());
    Ok(deleted)
}
