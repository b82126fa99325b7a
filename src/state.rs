use sqlx::PgPool;

use classcue_config::{CorsConfig, JwtConfig};
use classcue_db::init_db_pool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            db,
            jwt_config,
            cors_config,
        }
    }
}

/// Builds the shared state from the environment, opening the database pool.
pub async fn init_app_state() -> Result<AppState, sqlx::Error> {
    Ok(AppState::new(
        init_db_pool().await?,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
