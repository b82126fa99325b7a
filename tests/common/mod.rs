use axum::body::Body;
use axum::http::{Request, Response};
use classcue::classcue_auth::create_access_token;
use classcue::classcue_config::{CorsConfig, JwtConfig};
use classcue::classcue_core::hash_password;
use classcue::router::init_router;
use classcue::state::AppState;
use http_body_util::BodyExt;
use serde_json::Value;
#[allow(unused_imports)]
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

pub fn test_jwt_config() -> JwtConfig {
    dotenvy::dotenv().ok();
    JwtConfig::from_env()
}

pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState::new(pool, test_jwt_config(), CorsConfig::from_env());
    init_router(state)
}

/// Inserts a teacher account and mints an access token for it.
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO users (email, display_name, password)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind("Test Teacher")
    .bind(&hashed)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    let token = create_access_token(id, email, &test_jwt_config()).unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Builds a request with an optional bearer token and JSON body.
#[allow(dead_code)]
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn read_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// A setup with two periods on Monday (deliberately stored out of order,
/// with "10:00 AM" before "9:00 AM") and one on Wednesday.
#[allow(dead_code)]
pub fn sample_setup(period_a: Uuid, period_b: Uuid, period_c: Uuid) -> Value {
    serde_json::json!({
        "terms": [{
            "name": "Fall Semester",
            "start_date": "2025-08-15",
            "end_date": "2025-12-20"
        }],
        "periods": [
            {
                "id": period_b,
                "name": "Period 2",
                "start_time": "10:00 AM",
                "end_time": "10:50 AM",
                "schedules": [{ "day_of_week": "M", "start_time": "10:00 AM", "end_time": "10:50 AM" }]
            },
            {
                "id": period_a,
                "name": "Period 1",
                "start_time": "9:00 AM",
                "end_time": "9:50 AM",
                "subject": "Biology",
                "schedules": [{ "day_of_week": "M", "start_time": "9:00 AM", "end_time": "9:50 AM" }]
            },
            {
                "id": period_c,
                "name": "Homeroom",
                "start_time": "8:00 AM",
                "end_time": "8:20 AM",
                "schedules": [{ "day_of_week": "W", "start_time": "8:00 AM", "end_time": "8:20 AM" }]
            }
        ],
        "categories": ["Grading", "Copies"],
        "school_days": ["M", "T", "W", "Th", "F"]
    })
}
