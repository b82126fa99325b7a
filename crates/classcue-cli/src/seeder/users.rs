//! Teacher account seeding.

use classcue_models::UserId;
use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::{SEED_EMAIL_DOMAIN, UserSeed};

/// Generates teacher accounts in parallel.
///
/// Emails embed the index so a single run never collides with itself.
pub fn generate_users(count: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let suffix: u32 = (1000..10000).fake();

            UserSeed {
                email: format!(
                    "{}.{}+{}{}@{}",
                    first_name.to_lowercase(),
                    last_name.to_lowercase(),
                    idx,
                    suffix,
                    SEED_EMAIL_DOMAIN
                ),
                display_name: format!("{} {}", first_name, last_name),
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

/// Seeds teacher accounts and returns their ids in insertion order.
pub async fn seed_users(
    db: &PgPool,
    count: usize,
    password_hash: &str,
) -> Result<Vec<UserId>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👩‍🏫 Seeding {} teachers...", count);

    let users = generate_users(count, password_hash);
    let ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn insert_users_batch(
    db: &PgPool,
    users: &[UserSeed],
) -> Result<Vec<UserId>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 3 params per user
    const BATCH_SIZE: usize = 1000;
    let mut all_ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        all_ids.extend(insert_users_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<UserId>, Box<dyn std::error::Error>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO users (email, display_name, password) VALUES ");
    for i in 0..users.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 3;
        query.push_str(&format!("(${}, ${}, ${})", p + 1, p + 2, p + 3));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for user in users {
        q = q
            .bind(&user.email)
            .bind(&user.display_name)
            .bind(&user.password_hash);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}

/// Creates a single account, failing if the email is taken.
pub async fn create_user(
    db: &PgPool,
    email: &str,
    display_name: &str,
    password: &str,
) -> Result<UserId, Box<dyn std::error::Error>> {
    let password_hash = classcue_core::hash_password(password)
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let id: Option<UserId> = sqlx::query_scalar(
        "INSERT INTO users (email, display_name, password)
         VALUES ($1, $2, $3)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(email.trim().to_lowercase())
    .bind(display_name.trim())
    .bind(&password_hash)
    .fetch_optional(db)
    .await?;

    id.ok_or_else(|| "User with this email already exists".into())
}

/// Deletes every seeded account. Setups, reminders and refresh tokens go
/// with them through `ON DELETE CASCADE`.
pub async fn clear_users(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded teachers...");

    let deleted = sqlx::query("DELETE FROM users WHERE email LIKE $1")
        .bind(format!("%@{}", SEED_EMAIL_DOMAIN))
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} teachers in {:?}",
        deleted,
        start_time.elapsed()
    );

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_users_use_seed_domain() {
        let users = generate_users(50, "hash");
        assert_eq!(users.len(), 50);
        assert!(
            users
                .iter()
                .all(|u| u.email.ends_with(&format!("@{}", SEED_EMAIL_DOMAIN)))
        );
        assert!(users.iter().all(|u| u.password_hash == "hash"));
    }

    #[test]
    fn test_generated_emails_are_unique() {
        let users = generate_users(200, "hash");
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), users.len());
    }
}
