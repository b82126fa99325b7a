use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use classcue_core::AppError;

/// Flattens nested validation errors into "path: message" strings.
fn collect_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", path));
                    out.push(message);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_errors(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_errors("", errors, &mut messages);
    messages.join(", ")
}

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// Malformed JSON is a 400; a well-formed body that breaks a rule is a 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::bad_request(anyhow!("{} is required", field));
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                if matches!(rejection, JsonRejection::JsonDataError(_)) {
                    return AppError::bad_request(anyhow!("Invalid field value: {}", error_msg));
                }

                AppError::bad_request(anyhow!("Invalid request body"))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

/// Query string extractor whose rejection is a JSON `AppError` (400).
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(anyhow!("{}", rejection.body_text())))?;

        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::StatusCode,
        routing::{get, post},
    };
    use chrono::NaiveDate;
    use classcue_models::SaveSchoolSetupDto;
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 3, message = "name is too short"))]
        name: String,
    }

    async fn echo(ValidatedJson(p): ValidatedJson<Payload>) -> String {
        p.name
    }

    async fn setup(ValidatedJson(dto): ValidatedJson<SaveSchoolSetupDto>) -> String {
        dto.periods.len().to_string()
    }

    #[derive(Debug, Deserialize)]
    struct DateParams {
        date: NaiveDate,
    }

    async fn on_date(QueryParams(params): QueryParams<DateParams>) -> String {
        params.date.to_string()
    }

    async fn get_query(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route("/on", get(on_date));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn send(uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, String) {
        let app = Router::new()
            .route("/echo", post(echo))
            .route("/setup", post(setup));
        let mut request = Request::builder().method("POST").uri(uri);
        if let Some(ct) = content_type {
            request = request.header("content-type", ct);
        }
        let response = app
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let (status, body) = send("/echo", Some("application/json"), r#"{"name":"Rivera"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Rivera");
    }

    #[tokio::test]
    async fn test_rule_violation_is_unprocessable() {
        let (status, body) = send("/echo", Some("application/json"), r#"{"name":"Al"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("name is too short"));
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let (status, body) = send("/echo", Some("application/json"), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("name is required"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let (status, _) = send("/echo", None, r#"{"name":"Rivera"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nested_errors_are_reported() {
        let body = r#"{"periods":[{"name":"P1","start_time":"nine","end_time":"9:50 AM"}]}"#;
        let (status, body) = send("/setup", Some("application/json"), body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("nine"), "{}", body);
    }

    #[tokio::test]
    async fn test_query_params_pass_through() {
        let (status, body) = get_query("/on?date=2025-09-08").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "2025-09-08");
    }

    #[tokio::test]
    async fn test_bad_query_is_a_json_error() {
        let (status, body) = get_query("/on?date=09/08/2025").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("query string"), "{}", body);
    }
}
