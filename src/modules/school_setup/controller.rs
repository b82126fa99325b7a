use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use classcue_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{SaveSchoolSetupDto, SchoolSetup};
use super::service::SchoolSetupService;

/// Get the current user's school setup
///
/// Responds with `null` when onboarding has not been completed.
#[utoipa::path(
    get,
    path = "/api/school-setup",
    responses(
        (status = 200, description = "School setup, or null before onboarding", body = Option<SchoolSetup>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "School Setup",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_school_setup(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Option<SchoolSetup>>, AppError> {
    let setup = SchoolSetupService::get_school_setup(&state.db, auth_user.user_id()?).await?;
    Ok(Json(setup))
}

/// Replace the current user's school setup
#[utoipa::path(
    put,
    path = "/api/school-setup",
    request_body = SaveSchoolSetupDto,
    responses(
        (status = 200, description = "Saved school setup", body = SchoolSetup),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "School Setup",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn save_school_setup(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<SaveSchoolSetupDto>,
) -> Result<Json<SchoolSetup>, AppError> {
    let setup = SchoolSetupService::save_school_setup(&state.db, auth_user.user_id()?, dto).await?;
    Ok(Json(setup))
}

/// Delete the current user's school setup
#[utoipa::path(
    delete,
    path = "/api/school-setup",
    responses(
        (status = 204, description = "School setup deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No school setup", body = ErrorResponse)
    ),
    tag = "School Setup",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_school_setup(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<StatusCode, AppError> {
    SchoolSetupService::delete_school_setup(&state.db, auth_user.user_id()?).await?;
    Ok(StatusCode::NO_CONTENT)
}
