//! Handler error types.
//!
//! Maps contact-form failures onto the status codes and bodies the site's
//! frontend expects.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handlers::contact::ContactResponse;

/// Message returned for any form parsing failure.
const PARSE_FAILURE_MESSAGE: &str = "An error occurred while processing your request";

/// Message returned when a required field is absent or empty.
const MISSING_FIELDS_MESSAGE: &str = "All fields are required";

/// Contact handler error.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// Request used a method other than POST.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// One or more of the required fields is missing or empty.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Body is not form data.
    #[error("Unsupported content type: {0:?}")]
    UnsupportedContentType(String),

    /// Body could not be read.
    #[error("Failed to read request body: {0}")]
    Body(#[from] axum::Error),

    /// URL-encoded body could not be decoded.
    #[error("Invalid form body: {0}")]
    Urlencoded(#[from] serde_urlencoded::de::Error),

    /// Multipart request could not be opened.
    #[error("Invalid multipart request: {0}")]
    MultipartRejected(#[from] MultipartRejection),

    /// Multipart stream was malformed.
    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),
}

impl ContactError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingFields(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedContentType(_)
            | Self::Body(_)
            | Self::Urlencoded(_)
            | Self::MultipartRejected(_)
            | Self::Multipart(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Plain text, not JSON
            Self::MethodNotAllowed => (status, "Method not allowed").into_response(),
            Self::MissingFields(_) => {
                (status, Json(ContactResponse::rejected(MISSING_FIELDS_MESSAGE))).into_response()
            }
            _ => (status, Json(ContactResponse::rejected(PARSE_FAILURE_MESSAGE))).into_response(),
        }
    }
}
