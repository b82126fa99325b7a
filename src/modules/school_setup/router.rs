use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{delete_school_setup, get_school_setup, save_school_setup};

/// Routes: GET /, PUT /, DELETE /
pub fn init_school_setup_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_school_setup)
            .put(save_school_setup)
            .delete(delete_school_setup),
    )
}
