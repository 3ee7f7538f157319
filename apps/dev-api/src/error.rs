use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::borrow::Cow;

/// Failures a handler reports to the client as `{ success: false, message }`.
#[seva_derive::seva_error]
pub enum DevApiError {
    #[error("Conflict{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Bad request{}: {message}", format_context(.context))]
    BadRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Malformed multipart body{}: {source}", format_context(.context))]
    Multipart { source: MultipartError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DevApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::BadRequest { .. } | Self::Multipart { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the client gets to read; never the context.
    #[must_use]
    pub fn public_message(&self) -> &str {
        match self {
            Self::Conflict { message, .. } | Self::BadRequest { message, .. } => message,
            Self::Multipart { .. } => "Malformed form data",
            Self::Internal { .. } => "Internal server error",
        }
    }
}

impl IntoResponse for DevApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(json!({ "success": false, "message": self.public_message() })))
            .into_response()
    }
}
