use sqlx::{PgPool, types::Json};
use tracing::{info, instrument};

use classcue_core::AppError;
use classcue_models::UserId;

use super::model::{SCHOOL_SETUP_COLUMNS, SaveSchoolSetupDto, SchoolSetup};

pub struct SchoolSetupService;

impl SchoolSetupService {
    /// `None` when the user has not completed onboarding.
    #[instrument(skip(db))]
    pub async fn get_school_setup(
        db: &PgPool,
        user_id: UserId,
    ) -> Result<Option<SchoolSetup>, AppError> {
        let setup = sqlx::query_as::<_, SchoolSetup>(&format!(
            "SELECT {} FROM school_setups WHERE user_id = $1",
            SCHOOL_SETUP_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await?;

        Ok(setup)
    }

    /// Replaces the user's setup wholesale, creating it on first save.
    #[instrument(skip(db, dto), fields(periods = dto.periods.len(), terms = dto.terms.len()))]
    pub async fn save_school_setup(
        db: &PgPool,
        user_id: UserId,
        dto: SaveSchoolSetupDto,
    ) -> Result<SchoolSetup, AppError> {
        let categories: Vec<String> = dto
            .categories
            .iter()
            .map(|c| c.trim().to_string())
            .collect();

        let mut school_days = dto.school_days;
        school_days.sort();
        school_days.dedup();

        let setup = sqlx::query_as::<_, SchoolSetup>(&format!(
            r#"INSERT INTO school_setups (user_id, terms, periods, categories, school_days)
               VALUES ($1, $2, $3, $4, $5)
               ON CONFLICT (user_id) DO UPDATE SET
                   terms = EXCLUDED.terms,
                   periods = EXCLUDED.periods,
                   categories = EXCLUDED.categories,
                   school_days = EXCLUDED.school_days,
                   updated_at = NOW()
               RETURNING {}"#,
            SCHOOL_SETUP_COLUMNS
        ))
        .bind(user_id)
        .bind(Json(&dto.terms))
        .bind(Json(&dto.periods))
        .bind(&categories)
        .bind(&school_days)
        .fetch_one(db)
        .await?;

        info!(%user_id, "School setup saved");
        Ok(setup)
    }

    /// Removes the setup, returning the user to onboarding. Reminders are kept;
    /// their period references become dangling.
    #[instrument(skip(db))]
    pub async fn delete_school_setup(db: &PgPool, user_id: UserId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM school_setups WHERE user_id = $1")
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("School setup not found")));
        }

        Ok(())
    }
}
