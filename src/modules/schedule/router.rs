use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_dashboard, get_day, get_today, get_week};

/// Routes: GET /today, GET /week, GET /day/{code}, GET /dashboard
pub fn init_schedule_router() -> Router<AppState> {
    Router::new()
        .route("/today", get(get_today))
        .route("/week", get(get_week))
        .route("/day/{code}", get(get_day))
        .route("/dashboard", get(get_dashboard))
}
