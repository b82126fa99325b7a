use chrono::{Duration, Utc};
use sqlx::{PgExecutor, PgPool};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use classcue_auth::{create_access_token, create_refresh_token, verify_refresh_token};
use classcue_config::JwtConfig;
use classcue_core::{AppError, hash_password, verify_password};
use classcue_models::{LoginRequest, LoginResponse, RegisterRequest, User, UserId};

use crate::metrics;

use super::model::{UserWithPassword, normalize_email};

const USER_COLUMNS: &str = "id, email, display_name, created_at, updated_at";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        let email = normalize_email(&dto.email);
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, display_name, password) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&email)
        .bind(dto.display_name.trim())
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow::anyhow!("Email already exists"));
            }
            AppError::from(e)
        })?;

        metrics::track_user_registered();
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, display_name, password, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(normalize_email(&dto.email))
        .fetch_optional(db)
        .await?;

        let Some(row) = row else {
            metrics::track_login(false);
            return Err(AppError::unauthorized("Invalid email or password"));
        };

        if !verify_password(&dto.password, &row.password)? {
            metrics::track_login(false);
            warn!(user_id = %row.id, "Failed login attempt");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let response = Self::issue_tokens(db, row.into(), jwt_config).await?;
        metrics::track_login(true);
        info!(user_id = %response.user.id, "User logged in");
        Ok(response)
    }

    /// Exchanges a live refresh token for a new token pair. The old refresh
    /// token is revoked in the same transaction.
    #[instrument(skip_all)]
    pub async fn refresh_tokens(
        db: &PgPool,
        refresh_token: &str,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let claims = verify_refresh_token(refresh_token, jwt_config)?;
        let (user_id, jti) = Self::parse_refresh_claims(&claims.sub, &claims.jti)?;

        let mut tx = db.begin().await?;

        let revoked = sqlx::query_scalar::<_, Uuid>(
            "UPDATE refresh_tokens SET revoked_at = NOW()
             WHERE jti = $1 AND user_id = $2 AND revoked_at IS NULL AND expires_at > NOW()
             RETURNING jti",
        )
        .bind(jti)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        if revoked.is_none() {
            return Err(AppError::unauthorized("Refresh token has been revoked or expired"));
        }

        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

        let response = Self::issue_tokens(&mut *tx, user, jwt_config).await?;
        tx.commit().await?;

        Ok(response)
    }

    /// Revokes the caller's refresh token. Revoking an already revoked token
    /// succeeds.
    #[instrument(skip(db, refresh_token, jwt_config))]
    pub async fn logout(
        db: &PgPool,
        user_id: UserId,
        refresh_token: &str,
        jwt_config: &JwtConfig,
    ) -> Result<(), AppError> {
        let claims = verify_refresh_token(refresh_token, jwt_config)?;
        let (token_user, jti) = Self::parse_refresh_claims(&claims.sub, &claims.jti)?;

        if token_user != user_id {
            return Err(AppError::forbidden("Refresh token belongs to another user"));
        }

        sqlx::query(
            "UPDATE refresh_tokens SET revoked_at = COALESCE(revoked_at, NOW())
             WHERE jti = $1 AND user_id = $2",
        )
        .bind(jti)
        .bind(user_id)
        .execute(db)
        .await?;

        info!(%user_id, "User logged out");
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, user_id: UserId) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }

    fn parse_refresh_claims(sub: &str, jti: &str) -> Result<(UserId, Uuid), AppError> {
        let user_id = sub
            .parse::<UserId>()
            .map_err(|_| AppError::unauthorized("Invalid refresh token"))?;
        let jti = jti
            .parse::<Uuid>()
            .map_err(|_| AppError::unauthorized("Invalid refresh token"))?;
        Ok((user_id, jti))
    }

    async fn issue_tokens<'e, E>(
        executor: E,
        user: User,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError>
    where
        E: PgExecutor<'e>,
    {
        let jti = Uuid::new_v4();
        let access_token = create_access_token(user.id.into_inner(), &user.email, jwt_config)?;
        let refresh_token =
            create_refresh_token(user.id.into_inner(), &user.email, jti, jwt_config)?;

        sqlx::query("INSERT INTO refresh_tokens (jti, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(jti)
            .bind(user.id)
            .bind(Utc::now() + Duration::seconds(jwt_config.refresh_token_expiry))
            .execute(executor)
            .await?;

        Ok(LoginResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_config.access_token_expiry,
            user,
        })
    }
}
