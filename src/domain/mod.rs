pub mod contact_request;
pub mod custom_tour_request;
pub mod customer_email;

pub use contact_request::{ContactForm, ContactRequest};
pub use custom_tour_request::{CustomTourForm, CustomTourRequest};
pub use customer_email::CustomerEmail;

/// Why a submitted form could not become a validated request.
#[derive(Debug, thiserror::Error)]
pub enum FormRejection {
    #[error("{0}")]
    MissingFields(&'static str),

    #[error("{0}")]
    InvalidEmail(String),
}

/// Empty strings count as absent, the same as a missing key.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Reads a required text field. `null`, `false` and `0` are treated like a missing
/// key, so they are reported as missing fields instead of a type error. Any other
/// non-string value is still a type error.
pub(crate) fn falsy_as_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde::Deserialize;
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(D::Error::custom(format!("expected a string, found {}", other))),
    }
}
