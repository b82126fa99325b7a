//! School setup seeding: terms, a period timetable and categories per
//! teacher.

use chrono::{Datelike, NaiveDate};
use classcue_models::{
    DayCode, Period, PeriodId, ScheduleEntry, Term, TermId, TimeOfDay, UserId,
};
use fake::Fake;
use fake::faker::boolean::en::Boolean;
use rayon::prelude::*;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::SchoolSetupSeed;

const FIRST_BELL: u16 = 8 * 60;
const PERIOD_LENGTH: u16 = 50;
const PASSING_TIME: u16 = 5;
const MAX_PERIODS: usize = 10;

const SUBJECTS: &[&str] = &[
    "Algebra I",
    "Biology",
    "World History",
    "English 9",
    "Chemistry",
    "Geometry",
    "Spanish II",
    "Physical Education",
    "Art",
    "Computer Science",
];

const CATEGORIES: &[&str] = &[
    "Grading",
    "Parent Contact",
    "Lesson Prep",
    "Copies",
    "Meetings",
    "Supplies",
];

/// Generates one setup per teacher in parallel.
pub fn generate_setups(
    user_ids: &[UserId],
    periods_per_teacher: usize,
    today: NaiveDate,
) -> Vec<SchoolSetupSeed> {
    let terms = school_year_terms(today);

    user_ids
        .par_iter()
        .map(|&user_id| SchoolSetupSeed {
            user_id,
            terms: terms
                .iter()
                .map(|t| Term {
                    id: TermId::new(),
                    ..t.clone()
                })
                .collect(),
            periods: generate_periods(periods_per_teacher),
            categories: pick_categories(),
            school_days: DayCode::SCHOOL_WEEK.to_vec(),
        })
        .collect()
}

/// Fall and spring semesters of the school year containing `today`.
/// The year turns over in August.
pub fn school_year_terms(today: NaiveDate) -> Vec<Term> {
    let start_year = if today.month() >= 8 {
        today.year()
    } else {
        today.year() - 1
    };

    vec![
        Term {
            id: TermId::new(),
            name: "Fall Semester".to_string(),
            start_date: ymd(start_year, 8, 15),
            end_date: ymd(start_year, 12, 20),
        },
        Term {
            id: TermId::new(),
            name: "Spring Semester".to_string(),
            start_date: ymd(start_year + 1, 1, 6),
            end_date: ymd(start_year + 1, 5, 30),
        },
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Back-to-back periods from the first bell. Each meets on a random,
/// never empty, subset of the school week.
pub fn generate_periods(count: usize) -> Vec<Period> {
    (0..count.min(MAX_PERIODS))
        .map(|idx| {
            let start = FIRST_BELL + idx as u16 * (PERIOD_LENGTH + PASSING_TIME);
            let end = start + PERIOD_LENGTH;
            let (start_time, end_time) = (clock(start), clock(end));

            let mut days: Vec<DayCode> = DayCode::SCHOOL_WEEK
                .into_iter()
                .filter(|_| Boolean(80).fake())
                .collect();
            if days.is_empty() {
                days.push(DayCode::SCHOOL_WEEK[idx % DayCode::SCHOOL_WEEK.len()]);
            }

            Period {
                id: PeriodId::new(),
                name: format!("Period {}", idx + 1),
                start_time: start_time.clone(),
                end_time: end_time.clone(),
                subject: Some(SUBJECTS[idx % SUBJECTS.len()].to_string()),
                location: Some(format!("Room {}", (100..300).fake::<u16>())),
                schedules: days
                    .into_iter()
                    .map(|day_of_week| ScheduleEntry {
                        day_of_week,
                        start_time: start_time.clone(),
                        end_time: end_time.clone(),
                    })
                    .collect(),
            }
        })
        .collect()
}

fn clock(minutes: u16) -> String {
    TimeOfDay::from_hm((minutes / 60) as u8, (minutes % 60) as u8)
        .map(|t| t.to_string())
        .unwrap_or_default()
}

fn pick_categories() -> Vec<String> {
    CATEGORIES
        .iter()
        .filter(|_| Boolean(60).fake())
        .map(|c| c.to_string())
        .collect()
}

pub async fn seed_school_setups(
    db: &PgPool,
    setups: &[SchoolSetupSeed],
) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🏫 Seeding {} school setups...", setups.len());

    insert_setups_batch(db, setups).await?;

    println!(
        "   ✓ Inserted {} school setups in {:?}",
        setups.len(),
        start_time.elapsed()
    );

    Ok(())
}

pub async fn insert_setups_batch(
    db: &PgPool,
    setups: &[SchoolSetupSeed],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 5 params per setup
    const BATCH_SIZE: usize = 500;

    for chunk in setups.chunks(BATCH_SIZE) {
        insert_setups_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;
    Ok(())
}

async fn insert_setups_chunk(
    tx: &mut Transaction<'_, Postgres>,
    setups: &[SchoolSetupSeed],
) -> Result<(), Box<dyn std::error::Error>> {
    if setups.is_empty() {
        return Ok(());
    }

    let mut query = String::from(
        "INSERT INTO school_setups (user_id, terms, periods, categories, school_days) VALUES ",
    );
    for i in 0..setups.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 5;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${})",
            p + 1,
            p + 2,
            p + 3,
            p + 4,
            p + 5
        ));
    }
    query.push_str(" ON CONFLICT (user_id) DO NOTHING");

    let mut q = sqlx::query(&query);
    for setup in setups {
        q = q
            .bind(setup.user_id)
            .bind(Json(&setup.terms))
            .bind(Json(&setup.periods))
            .bind(&setup.categories)
            .bind(&setup.school_days);
    }

    q.execute(&mut **tx).await?;
    Ok(())
}
