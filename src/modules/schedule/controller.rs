use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use classcue_core::AppError;
use classcue_models::DayCode;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::ErrorResponse;
use crate::state::AppState;
use crate::validator::QueryParams;

use super::model::{DashboardStats, DateQuery, DaySchedule, TodayView, WeekView};
use super::service::ScheduleService;

/// Today's schedule, reminder buckets and counts
#[utoipa::path(
    get,
    path = "/api/schedule/today",
    params(DateQuery),
    responses(
        (status = 200, description = "Today view", body = TodayView),
        (status = 400, description = "Invalid date", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Schedule",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_today(
    State(state): State<AppState>,
    auth_user: AuthUser,
    QueryParams(query): QueryParams<DateQuery>,
) -> Result<Json<TodayView>, AppError> {
    let view = ScheduleService::get_today(&state.db, auth_user.user_id()?, query.resolve()).await?;
    Ok(Json(view))
}

/// Monday to Friday of the week containing the date
#[utoipa::path(
    get,
    path = "/api/schedule/week",
    params(DateQuery),
    responses(
        (status = 200, description = "Week view", body = WeekView),
        (status = 400, description = "Invalid date", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Schedule",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_week(
    State(state): State<AppState>,
    auth_user: AuthUser,
    QueryParams(query): QueryParams<DateQuery>,
) -> Result<Json<WeekView>, AppError> {
    let view = ScheduleService::get_week(&state.db, auth_user.user_id()?, query.resolve()).await?;
    Ok(Json(view))
}

/// Periods and reminders for one day code
#[utoipa::path(
    get,
    path = "/api/schedule/day/{code}",
    params(("code" = String, Path, description = "Day code: M, T, W, Th, F, Sa or Su")),
    responses(
        (status = 200, description = "Day schedule", body = DaySchedule),
        (status = 400, description = "Unknown day code", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Schedule",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_day(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(code): Path<String>,
) -> Result<Json<DaySchedule>, AppError> {
    let day = code.parse::<DayCode>().map_err(AppError::bad_request)?;
    let schedule = ScheduleService::get_day(&state.db, auth_user.user_id()?, day).await?;
    Ok(Json(schedule))
}

/// Reminder counts for the dashboard
#[utoipa::path(
    get,
    path = "/api/schedule/dashboard",
    params(DateQuery),
    responses(
        (status = 200, description = "Dashboard counts", body = DashboardStats),
        (status = 400, description = "Invalid date", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Schedule",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
    QueryParams(query): QueryParams<DateQuery>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats =
        ScheduleService::get_dashboard(&state.db, auth_user.user_id()?, query.resolve()).await?;
    Ok(Json(stats))
}
