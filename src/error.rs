use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Every failure a handler can surface. NotFound is not here: a read that
/// matches zero rows is a success-shaped 404 with a `message` body, built
/// directly in the handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database connection failed")]
    ConnectionFailed,
    #[error("{0} parameter is required")]
    MissingParam(&'static str),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::ConnectionFailed | ApiError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn connection_failure_maps_to_opaque_500() {
        let response = ApiError::ConnectionFailed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Database connection failed" })
        );
    }

    #[tokio::test]
    async fn missing_param_maps_to_400() {
        let response = ApiError::MissingParam("id").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "id parameter is required" })
        );
    }

    #[tokio::test]
    async fn storage_error_carries_raw_driver_message() {
        let response = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], sqlx::Error::RowNotFound.to_string());
    }
}
