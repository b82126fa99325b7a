//! Reminder seeding.
//!
//! Generated reminders are spread over every due state: one-off tasks due
//! last week through next fortnight, recurring weekly and daily reminders,
//! a few completed ones, and an occasional bi-weekly or monthly reminder so
//! schedule diagnostics show up too.

use chrono::{Days, NaiveDate};
use classcue_models::{DayCode, Priority, Recurrence};
use fake::Fake;
use fake::faker::boolean::en::Boolean;
use fake::faker::lorem::en::Sentence;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::{ReminderSeed, ReminderTargets};

const TITLES: &[&str] = &[
    "Collect permission slips",
    "Grade unit quiz",
    "Print worksheets",
    "Take attendance",
    "Email parents about field trip",
    "Prepare lab materials",
    "Return graded essays",
    "Update seating chart",
    "Post homework on class page",
    "Check in with counselor",
    "Review IEP accommodations",
    "Set up projector",
];

const TIMINGS: &[&str] = &["before class", "start of class", "end of class", "after school"];
const TYPES: &[&str] = &["task", "reminder", "prep"];
const PRIORITIES: &[Priority] = &[Priority::Low, Priority::Medium, Priority::Medium, Priority::High];

/// Generates `per_teacher` reminders for every target, in parallel.
pub fn generate_reminders(
    targets: &[ReminderTargets],
    per_teacher: usize,
    today: NaiveDate,
) -> Vec<ReminderSeed> {
    targets
        .par_iter()
        .flat_map(|target| {
            (0..per_teacher)
                .map(|_| generate_reminder(target, today))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn generate_reminder(target: &ReminderTargets, today: NaiveDate) -> ReminderSeed {
    let recurrence = pick_recurrence();

    let (days, due_date) = match recurrence {
        Recurrence::Once => (Vec::new(), Some(due_around(today))),
        Recurrence::Daily => (DayCode::SCHOOL_WEEK.to_vec(), None),
        _ => {
            let mut days: Vec<DayCode> = DayCode::SCHOOL_WEEK
                .into_iter()
                .filter(|_| Boolean(30).fake())
                .collect();
            if days.is_empty() {
                days.push(pick(&DayCode::SCHOOL_WEEK));
            }
            (days, None)
        }
    };

    ReminderSeed {
        user_id: target.user_id,
        title: pick(TITLES).to_string(),
        period_id: choose(&target.period_ids, 75),
        days,
        timing: pick(TIMINGS).to_string(),
        reminder_type: pick(TYPES).to_string(),
        priority: pick(PRIORITIES),
        category: choose(&target.categories, 60),
        recurrence,
        due_date,
        completed: Boolean(20).fake(),
        term_id: choose(&target.term_ids, 40),
        notes: Boolean(30).fake::<bool>().then(|| Sentence(4..10).fake()),
    }
}

fn pick_recurrence() -> Recurrence {
    match (0..100).fake::<u8>() {
        0..=54 => Recurrence::Once,
        55..=79 => Recurrence::Weekly,
        80..=94 => Recurrence::Daily,
        95..=97 => Recurrence::BiWeekly,
        _ => Recurrence::Monthly,
    }
}

/// A date from a week ago to two weeks out.
fn due_around(today: NaiveDate) -> NaiveDate {
    let offset: i64 = (-7..=14).fake();
    let shifted = if offset < 0 {
        today.checked_sub_days(Days::new(offset.unsigned_abs()))
    } else {
        today.checked_add_days(Days::new(offset as u64))
    };
    shifted.unwrap_or(today)
}

fn pick<T: Clone>(items: &[T]) -> T {
    items[(0..items.len()).fake::<usize>()].clone()
}

/// A random element `ratio` percent of the time, if there is one.
fn choose<T: Clone>(items: &[T], ratio: u8) -> Option<T> {
    (!items.is_empty() && Boolean(ratio).fake::<bool>()).then(|| pick(items))
}

pub async fn seed_reminders(
    db: &PgPool,
    reminders: &[ReminderSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🔔 Seeding {} reminders...", reminders.len());

    let inserted = insert_reminders_batch(db, reminders).await?;

    println!(
        "   ✓ Inserted {} reminders in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

pub async fn insert_reminders_batch(
    db: &PgPool,
    reminders: &[ReminderSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 13 params per reminder
    const BATCH_SIZE: usize = 4000;
    let mut inserted = 0;

    for chunk in reminders.chunks(BATCH_SIZE) {
        inserted += insert_reminders_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;
    Ok(inserted)
}

async fn insert_reminders_chunk(
    tx: &mut Transaction<'_, Postgres>,
    reminders: &[ReminderSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    if reminders.is_empty() {
        return Ok(0);
    }

    const COLUMNS: usize = 13;
    let mut query = String::from(
        "INSERT INTO reminders (user_id, title, period_id, days, timing, reminder_type, \
         priority, category, recurrence, due_date, completed, term_id, notes) VALUES ",
    );
    for i in 0..reminders.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let placeholders: Vec<String> = (1..=COLUMNS)
            .map(|c| format!("${}", i * COLUMNS + c))
            .collect();
        query.push('(');
        query.push_str(&placeholders.join(", "));
        query.push(')');
    }

    let mut q = sqlx::query(&query);
    for r in reminders {
        q = q
            .bind(r.user_id)
            .bind(&r.title)
            .bind(r.period_id)
            .bind(&r.days)
            .bind(&r.timing)
            .bind(&r.reminder_type)
            .bind(r.priority)
            .bind(&r.category)
            .bind(r.recurrence)
            .bind(r.due_date)
            .bind(r.completed)
            .bind(r.term_id)
            .bind(&r.notes);
    }

    Ok(q.execute(&mut **tx).await?.rows_affected())
}
