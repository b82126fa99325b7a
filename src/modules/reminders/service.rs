use chrono::NaiveDate;
use sqlx::PgPool;
use std::collections::HashSet;
use tracing::{info, instrument, warn};

use classcue_core::AppError;
use classcue_models::{ReminderId, UserId};
use classcue_schedule::{DueState, FilterSet, PeriodIndex, ReminderRow, school_day_code};

use crate::metrics;
use crate::modules::school_setup::service::SchoolSetupService;

use super::model::{
    BulkCompleteResponse, REMINDER_COLUMNS, Reminder, ReminderFilterParams, SaveReminderDto,
};

pub struct ReminderService;

impl ReminderService {
    /// Every reminder the user owns, oldest first.
    #[instrument(skip(db))]
    pub async fn get_all_reminders(db: &PgPool, user_id: UserId) -> Result<Vec<Reminder>, AppError> {
        let reminders = sqlx::query_as::<_, Reminder>(&format!(
            "SELECT {} FROM reminders WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
            REMINDER_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(reminders)
    }

    #[instrument(skip(db))]
    pub async fn get_reminders(
        db: &PgPool,
        user_id: UserId,
        filters: ReminderFilterParams,
    ) -> Result<Vec<Reminder>, AppError> {
        let filter_set = FilterSet::from(&filters);
        let reminders = Self::get_all_reminders(db, user_id).await?;

        if filter_set.is_empty() {
            return Ok(reminders);
        }

        Ok(reminders
            .into_iter()
            .filter(|reminder| filter_set.matches(reminder))
            .collect())
    }

    #[instrument(skip(db))]
    pub async fn get_reminder(
        db: &PgPool,
        user_id: UserId,
        id: ReminderId,
    ) -> Result<Reminder, AppError> {
        sqlx::query_as::<_, Reminder>(&format!(
            "SELECT {} FROM reminders WHERE id = $1 AND user_id = $2",
            REMINDER_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Reminder not found")))
    }

    #[instrument(skip(db, dto), fields(title = %dto.title))]
    pub async fn create_reminder(
        db: &PgPool,
        user_id: UserId,
        dto: SaveReminderDto,
    ) -> Result<Reminder, AppError> {
        let days = dto.normalized_days();
        let reminder = sqlx::query_as::<_, Reminder>(&format!(
            r#"INSERT INTO reminders
                   (user_id, title, period_id, days, timing, reminder_type, priority, category,
                    recurrence, due_date, completed, term_id, notes)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
               RETURNING {}"#,
            REMINDER_COLUMNS
        ))
        .bind(user_id)
        .bind(dto.title.trim())
        .bind(dto.period_id)
        .bind(&days)
        .bind(dto.timing.trim())
        .bind(dto.reminder_type.trim())
        .bind(dto.priority)
        .bind(dto.category.as_deref().map(str::trim))
        .bind(dto.recurrence)
        .bind(dto.due_date)
        .bind(dto.completed)
        .bind(dto.term_id)
        .bind(&dto.notes)
        .fetch_one(db)
        .await?;

        metrics::track_reminder_created(reminder.priority);
        info!(reminder_id = %reminder.id, "Reminder created");
        Ok(reminder)
    }

    /// Replaces every field of an existing reminder.
    #[instrument(skip(db, dto))]
    pub async fn update_reminder(
        db: &PgPool,
        user_id: UserId,
        id: ReminderId,
        dto: SaveReminderDto,
    ) -> Result<Reminder, AppError> {
        let days = dto.normalized_days();
        let reminder = sqlx::query_as::<_, Reminder>(&format!(
            r#"UPDATE reminders SET
                   title = $3, period_id = $4, days = $5, timing = $6, reminder_type = $7,
                   priority = $8, category = $9, recurrence = $10, due_date = $11,
                   completed = $12, term_id = $13, notes = $14, updated_at = NOW()
               WHERE id = $1 AND user_id = $2
               RETURNING {}"#,
            REMINDER_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .bind(dto.title.trim())
        .bind(dto.period_id)
        .bind(&days)
        .bind(dto.timing.trim())
        .bind(dto.reminder_type.trim())
        .bind(dto.priority)
        .bind(dto.category.as_deref().map(str::trim))
        .bind(dto.recurrence)
        .bind(dto.due_date)
        .bind(dto.completed)
        .bind(dto.term_id)
        .bind(&dto.notes)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Reminder not found")))?;

        Ok(reminder)
    }

    #[instrument(skip(db))]
    pub async fn toggle_complete(
        db: &PgPool,
        user_id: UserId,
        id: ReminderId,
    ) -> Result<Reminder, AppError> {
        let reminder = sqlx::query_as::<_, Reminder>(&format!(
            r#"UPDATE reminders SET completed = NOT completed, updated_at = NOW()
               WHERE id = $1 AND user_id = $2
               RETURNING {}"#,
            REMINDER_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Reminder not found")))?;

        if reminder.completed {
            metrics::track_reminder_completed("toggle");
        }
        Ok(reminder)
    }

    #[instrument(skip(db))]
    pub async fn delete_reminder(
        db: &PgPool,
        user_id: UserId,
        id: ReminderId,
    ) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Reminder not found")));
        }

        Ok(())
    }

    /// Marks every listed reminder the user owns as completed in a single
    /// statement. Ids that are unknown or owned by someone else come back in
    /// `failed`.
    #[instrument(skip(db, ids), fields(requested = ids.len()))]
    pub async fn bulk_complete(
        db: &PgPool,
        user_id: UserId,
        ids: Vec<ReminderId>,
    ) -> Result<BulkCompleteResponse, AppError> {
        let requested = ids.len();

        let mut seen = HashSet::new();
        let unique: Vec<ReminderId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();

        let updated: HashSet<ReminderId> = sqlx::query_scalar::<_, ReminderId>(
            r#"UPDATE reminders SET completed = TRUE, updated_at = NOW()
               WHERE user_id = $1 AND id = ANY($2)
               RETURNING id"#,
        )
        .bind(user_id)
        .bind(&unique)
        .fetch_all(db)
        .await?
        .into_iter()
        .collect();

        let (completed, failed): (Vec<ReminderId>, Vec<ReminderId>) =
            unique.into_iter().partition(|id| updated.contains(id));

        if !failed.is_empty() {
            warn!(failed = failed.len(), "Bulk completion skipped unknown reminders");
        }
        metrics::track_bulk_complete(completed.len(), failed.len());

        Ok(BulkCompleteResponse {
            requested,
            completed,
            failed,
        })
    }

    /// Incomplete reminders that are past due on `date`, oldest due date first.
    #[instrument(skip(db))]
    pub async fn get_past_due(
        db: &PgPool,
        user_id: UserId,
        date: NaiveDate,
    ) -> Result<Vec<ReminderRow>, AppError> {
        let setup = SchoolSetupService::get_school_setup(db, user_id).await?;
        let candidates = sqlx::query_as::<_, Reminder>(&format!(
            r#"SELECT {} FROM reminders
               WHERE user_id = $1 AND completed = FALSE AND recurrence = 'once' AND due_date < $2
               ORDER BY due_date ASC, created_at ASC"#,
            REMINDER_COLUMNS
        ))
        .bind(user_id)
        .bind(date)
        .fetch_all(db)
        .await?;

        let periods = setup.as_ref().map(|s| s.periods.as_slice()).unwrap_or_default();
        let index = PeriodIndex::new(periods);
        let school_day = school_day_code(setup.as_ref(), date);

        Ok(candidates
            .iter()
            .filter(|reminder| {
                classcue_schedule::due_state(reminder, date, school_day, Some(&index))
                    == DueState::PastDue
            })
            .map(|reminder| ReminderRow::new(reminder, &index, DueState::PastDue))
            .collect())
    }
}
