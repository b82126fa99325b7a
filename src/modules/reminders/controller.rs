use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use classcue_core::AppError;
use classcue_models::ReminderId;
use classcue_schedule::ReminderRow;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::ErrorResponse;
use crate::modules::schedule::model::DateQuery;
use crate::state::AppState;
use crate::validator::{QueryParams, ValidatedJson};

use super::model::{
    BulkCompleteRequest, BulkCompleteResponse, Reminder, ReminderFilterParams, SaveReminderDto,
};
use super::service::ReminderService;

/// List the current user's reminders
#[utoipa::path(
    get,
    path = "/api/reminders",
    params(ReminderFilterParams),
    responses(
        (status = 200, description = "Reminders matching every given filter", body = Vec<Reminder>),
        (status = 400, description = "Invalid filter value", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Reminders",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_reminders(
    State(state): State<AppState>,
    auth_user: AuthUser,
    QueryParams(filters): QueryParams<ReminderFilterParams>,
) -> Result<Json<Vec<Reminder>>, AppError> {
    let reminders = ReminderService::get_reminders(&state.db, auth_user.user_id()?, filters).await?;
    Ok(Json(reminders))
}

/// Create a reminder
#[utoipa::path(
    post,
    path = "/api/reminders",
    request_body = SaveReminderDto,
    responses(
        (status = 201, description = "Reminder created", body = Reminder),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Reminders",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_reminder(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<SaveReminderDto>,
) -> Result<(StatusCode, Json<Reminder>), AppError> {
    let reminder = ReminderService::create_reminder(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(reminder)))
}

/// Get a reminder by ID
#[utoipa::path(
    get,
    path = "/api/reminders/{id}",
    params(("id" = ReminderId, Path, description = "Reminder ID")),
    responses(
        (status = 200, description = "Reminder", body = Reminder),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    ),
    tag = "Reminders",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_reminder(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<ReminderId>,
) -> Result<Json<Reminder>, AppError> {
    let reminder = ReminderService::get_reminder(&state.db, auth_user.user_id()?, id).await?;
    Ok(Json(reminder))
}

/// Replace a reminder
#[utoipa::path(
    put,
    path = "/api/reminders/{id}",
    params(("id" = ReminderId, Path, description = "Reminder ID")),
    request_body = SaveReminderDto,
    responses(
        (status = 200, description = "Reminder updated", body = Reminder),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Reminder not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Reminders",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_reminder(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<ReminderId>,
    ValidatedJson(dto): ValidatedJson<SaveReminderDto>,
) -> Result<Json<Reminder>, AppError> {
    let reminder =
        ReminderService::update_reminder(&state.db, auth_user.user_id()?, id, dto).await?;
    Ok(Json(reminder))
}

/// Delete a reminder
#[utoipa::path(
    delete,
    path = "/api/reminders/{id}",
    params(("id" = ReminderId, Path, description = "Reminder ID")),
    responses(
        (status = 204, description = "Reminder deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    ),
    tag = "Reminders",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_reminder(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<ReminderId>,
) -> Result<StatusCode, AppError> {
    ReminderService::delete_reminder(&state.db, auth_user.user_id()?, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flip a reminder between open and completed
#[utoipa::path(
    post,
    path = "/api/reminders/{id}/toggle-complete",
    params(("id" = ReminderId, Path, description = "Reminder ID")),
    responses(
        (status = 200, description = "Reminder with its new completion state", body = Reminder),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    ),
    tag = "Reminders",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn toggle_complete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<ReminderId>,
) -> Result<Json<Reminder>, AppError> {
    let reminder = ReminderService::toggle_complete(&state.db, auth_user.user_id()?, id).await?;
    Ok(Json(reminder))
}

/// Mark several reminders completed at once
///
/// Ids that are unknown or belong to another user are reported in `failed`;
/// the rest are still completed.
#[utoipa::path(
    post,
    path = "/api/reminders/bulk-complete",
    request_body = BulkCompleteRequest,
    responses(
        (status = 200, description = "Per-id outcome", body = BulkCompleteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Reminders",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn bulk_complete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<BulkCompleteRequest>,
) -> Result<Json<BulkCompleteResponse>, AppError> {
    let response = ReminderService::bulk_complete(&state.db, auth_user.user_id()?, dto.ids).await?;
    Ok(Json(response))
}

/// List past-due reminders for review
#[utoipa::path(
    get,
    path = "/api/reminders/past-due",
    params(DateQuery),
    responses(
        (status = 200, description = "Past-due reminders, oldest due date first", body = Vec<ReminderRow>),
        (status = 400, description = "Invalid date", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Reminders",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_past_due(
    State(state): State<AppState>,
    auth_user: AuthUser,
    QueryParams(query): QueryParams<DateQuery>,
) -> Result<Json<Vec<ReminderRow>>, AppError> {
    let rows =
        ReminderService::get_past_due(&state.db, auth_user.user_id()?, query.resolve()).await?;
    Ok(Json(rows))
}
