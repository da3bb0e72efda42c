use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use log::error;
use serde_json::json;

/// A [`ServiceError`] on its way out as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            err if err.is_conflict() => StatusCode::CONFLICT,
            ServiceError::InvalidDateRange { .. } | ServiceError::InvalidCapacity(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Don't leak database internals to the client
        let message = match self.0 {
            ServiceError::Database(err) => {
                error!("Database error: {err}");
                "Internal server error".to_string()
            }
            err => err.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
