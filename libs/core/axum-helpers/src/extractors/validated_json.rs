//! JSON extractor with an explicit validation step at the boundary.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that runs the `validator` derive before the handler sees
/// the payload.
///
/// Deserialization failures keep axum's JSON rejection status; validation
/// failures become a 400 problem-detail body carrying a structured list of
/// field-level violations. Handlers therefore only ever receive payloads
/// that already passed validation.
///
/// # Example
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<ProductRequest>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| crate::errors::AppError::JsonExtractorRejection(e).into_response())?;

        data.validate().map_err(|e| {
            let violations: Vec<serde_json::Value> = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    let field = field.to_string();
                    errors.iter().map(move |err| {
                        serde_json::json!({
                            "field": field,
                            "code": err.code,
                            "message": err.message,
                        })
                    })
                })
                .collect();

            let body = ErrorResponse::new(
                ErrorCode::ValidationError,
                ErrorCode::ValidationError.default_message(),
            )
            .with_details(serde_json::Value::Array(violations));

            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
