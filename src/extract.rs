//! Request body extraction for the POST endpoints.

use crate::error::AppError;
use axum::{
    Json, async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use http::header;
use serde::de::DeserializeOwned;

/// JSON body that also accepts requests without a `Content-Type` header,
/// the way the browser front end and plain `curl -d` send them. A header
/// that names a non-JSON type is still rejected with 415.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(JsonBody(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidRequest {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(JsonBody(value))
    }
}
