//! Query string extractor with problem-detail rejections.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Extractor for query parameters.
///
/// A query string that fails to deserialize never reaches the handler: it
/// is rejected with a 400 problem-detail body instead of axum's plain-text
/// default.
///
/// # Example
/// ```ignore
/// async fn search(QueryParams(filter): QueryParams<ProductFilter>) { /* ... */ }
/// ```
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::QueryExtractorRejection(e).into_response())?;

        Ok(QueryParams(params))
    }
}
