//! src/routes/intake.rs
//!
//! Steps shared by both form endpoints: read the raw body, parse it, validate
//! it into a domain request, and turn every failure into a JSON error reply.

use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::FormRejection;
use crate::utils::error_helpers::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum IntakeError {
    #[error("Request body is empty")]
    EmptyBody,

    #[error("Invalid JSON in request body")]
    InvalidJson(#[source] serde_json::Error),

    /// `received` is echoed back so the form author can see what arrived.
    #[error("{message}")]
    MissingFields {
        message: &'static str,
        received: Value,
    },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Failed to send email")]
    SendFailure(#[source] anyhow::Error),
}

impl std::fmt::Debug for IntakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for IntakeError {
    fn status_code(&self) -> StatusCode {
        match self {
            IntakeError::EmptyBody
            | IntakeError::InvalidJson(_)
            | IntakeError::MissingFields { .. }
            | IntakeError::InvalidEmail => StatusCode::BAD_REQUEST,
            IntakeError::SendFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            IntakeError::MissingFields { received, .. } => serde_json::json!({
                "error": self.to_string(),
                "received": received,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Parses a raw request body into a validated request.
///
/// Valid JSON that is not an object is treated as a form with no fields, so
/// it fails on the required-field check with the body echoed back. An object
/// whose fields have the wrong types fails the typed parse as `InvalidJson`.
pub fn parse_submission<Form, Request>(body: &[u8]) -> Result<Request, IntakeError>
where
    Form: DeserializeOwned + Default,
    Request: TryFrom<Form, Error = FormRejection>,
{
    if body.is_empty() {
        return Err(IntakeError::EmptyBody);
    }

    let received: Value = serde_json::from_slice(body).map_err(IntakeError::InvalidJson)?;

    let form = if received.is_object() {
        Form::deserialize(&received).map_err(IntakeError::InvalidJson)?
    } else {
        Form::default()
    };

    Request::try_from(form).map_err(|rejection| match rejection {
        FormRejection::MissingFields(message) => IntakeError::MissingFields { message, received },
        FormRejection::InvalidEmail(_) => IntakeError::InvalidEmail,
    })
}
