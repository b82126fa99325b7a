use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    bulk_complete, create_reminder, delete_reminder, get_past_due, get_reminder, get_reminders,
    toggle_complete, update_reminder,
};

/// Routes: GET /, POST /, GET /past-due, POST /bulk-complete,
/// GET /{id}, PUT /{id}, DELETE /{id}, POST /{id}/toggle-complete
pub fn init_reminders_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_reminders).post(create_reminder))
        .route("/past-due", get(get_past_due))
        .route("/bulk-complete", post(bulk_complete))
        .route(
            "/{id}",
            get(get_reminder).put(update_reminder).delete(delete_reminder),
        )
        .route("/{id}/toggle-complete", post(toggle_complete))
}
