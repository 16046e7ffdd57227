//! HTTP rendering of [`AppInfoError`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use appinfo_core::AppInfoError;

/// Wrapper so core errors can be returned straight from handlers.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub AppInfoError);

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let message = match &self.0 {
            AppInfoError::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                "An internal error occurred".to_string()
            }
            other => {
                tracing::warn!(error = %other, "request failed");
                other.to_string()
            }
        };

        // Every error this service can surface is a server-side condition.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: code.as_str(),
                message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_renders_as_500() {
        for err in [
            AppInfoError::SecretNotConfigured,
            AppInfoError::InvalidPort("x".into()),
            AppInfoError::Internal("disk on fire".into()),
        ] {
            let resp = ApiError(err).into_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
