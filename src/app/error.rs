use crate::app::dto::ErrorBody;
use crate::utils::error::ChartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// An HTTP failure with a fixed public message. Internal details are logged,
/// never sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    pub fn internal(message: &'static str, cause: &ChartError) -> Self {
        tracing::error!("❌ {}: {} (category: {:?})", message, cause, cause.category());
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }

    /// Client-category errors become 400 with `client_message`, everything
    /// else 500 with `server_message`.
    pub fn from_chart_error(
        err: &ChartError,
        client_message: &'static str,
        server_message: &'static str,
    ) -> Self {
        if err.is_client_error() {
            tracing::debug!("Rejected request: {}", err);
            Self::bad_request(client_message)
        } else {
            Self::internal(server_message, err)
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let err = ChartError::InvalidColor {
            input: "nope".to_string(),
        };
        let api = ApiError::from_chart_error(&err, "Invalid colors", "Failed");
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message(), "Invalid colors");
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = ChartError::IoError(std::io::Error::other("secret path /var/lib"));
        let api = ApiError::from_chart_error(&err, "Invalid colors array", "Failed to export");
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message(), "Failed to export");
    }
}
