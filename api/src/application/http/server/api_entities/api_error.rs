use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::{StatusCode, header::RETRY_AFTER},
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use gutcheck_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("rate limit exceeded")]
    TooManyRequests { retry_after_secs: u64 },

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(message) | ApiError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                Json(ApiErrorBody { error: message }),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ApiErrorBody { error: message }),
            )
                .into_response(),
            ApiError::TooManyRequests { retry_after_secs } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(RETRY_AFTER, retry_after_secs.to_string())],
                Json(ApiErrorBody {
                    error: format!("rate limit exceeded, retry after {}s", retry_after_secs),
                }),
            )
                .into_response(),
            ApiError::BadGateway(message) => (
                StatusCode::BAD_GATEWAY,
                Json(ApiErrorBody { error: message }),
            )
                .into_response(),
            ApiError::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorBody { error: message }),
            )
                .into_response(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::ExternalService(message) => ApiError::BadGateway(message),
            CoreError::RateLimited { retry_after_secs } => {
                ApiError::TooManyRequests { retry_after_secs }
            }
            CoreError::Internal => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

/// JSON extractor that runs `validator` rules after deserialization.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
