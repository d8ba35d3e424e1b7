//! Contact form endpoint.
//!
//! Validates a contact-form submission and acknowledges it. Nothing is
//! stored or sent; the submission lives only for the duration of the
//! request.

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{Method, header};
use serde::Serialize;

use crate::error::ContactError;
use crate::state::AppState;

/// Upper bound for URL-encoded bodies; matches axum's default limit applied
/// to multipart bodies.
const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

/// Message returned for an accepted submission.
const ACCEPTED_MESSAGE: &str = "Thank you for your message. I'll get back to you soon!";

/// JSON body for every contact response except 405.
#[derive(Debug, Serialize)]
pub(crate) struct ContactResponse {
    success: bool,
    message: &'static str,
}

impl ContactResponse {
    fn accepted() -> Self {
        Self {
            success: true,
            message: ACCEPTED_MESSAGE,
        }
    }

    pub(crate) fn rejected(message: &'static str) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Raw form fields; the first occurrence of a key wins.
#[derive(Debug, Default)]
struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

/// A validated submission with every field present and non-empty.
#[derive(Debug)]
struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            form.set(&key, value);
        }
        form
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ContactError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(key) = field.name().map(str::to_owned) else {
                continue;
            };
            let value = field.text().await?;
            form.set(&key, value);
        }
        Ok(form)
    }

    fn set(&mut self, key: &str, value: String) {
        let slot = match key {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "message" => &mut self.message,
            _ => return,
        };
        slot.get_or_insert(value);
    }

    /// Require all three fields to be present and non-empty.
    fn validate(self) -> Result<ContactSubmission, ContactError> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        match (present(self.name), present(self.email), present(self.message)) {
            (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
                name,
                email,
                message,
            }),
            (name, email, message) => {
                let missing = [("name", name), ("email", email), ("message", message)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(field, _)| field)
                    .collect();
                Err(ContactError::MissingFields(missing))
            }
        }
    }
}

/// Handle /api/contact (all methods; only POST is accepted).
pub(crate) async fn submit(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<ContactResponse>, ContactError> {
    if request.method() != Method::POST {
        return Err(ContactError::MethodNotAllowed);
    }

    let form = parse_form(request)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to parse contact form"))?;

    let submission = form.validate().inspect_err(|e| {
        if state.verbose {
            tracing::warn!(error = %e, "Contact submission rejected");
        }
    })?;

    // Delivery is out of scope; the submission is dropped after logging
    tracing::info!(
        name_len = submission.name.len(),
        email_len = submission.email.len(),
        message_len = submission.message.len(),
        "Contact submission accepted"
    );

    Ok(Json(ContactResponse::accepted()))
}

/// Decode the request body as URL-encoded or multipart form data.
async fn parse_form(request: Request) -> Result<ContactForm, ContactError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let mime = content_type
        .split_once(';')
        .map_or(content_type.as_str(), |(mime, _)| mime)
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "application/x-www-form-urlencoded" => {
            let body = axum::body::to_bytes(request.into_body(), MAX_FORM_BYTES).await?;
            let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&body)?;
            Ok(ContactForm::from_pairs(pairs))
        }
        "multipart/form-data" => {
            let multipart = Multipart::from_request(request, &()).await?;
            ContactForm::from_multipart(multipart).await
        }
        _ => Err(ContactError::UnsupportedContentType(content_type)),
    }
}
