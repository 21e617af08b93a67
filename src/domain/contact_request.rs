//! src/domain/contact_request.rs

use crate::domain::customer_email::CustomerEmail;
use crate::domain::{non_empty, FormRejection};

const MISSING_FIELDS: &str = "Missing required fields";

/// Shape of the contact form body as the browser posts it.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ContactForm {
    #[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
    pub message: Option<String>,
    pub newsletter: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: CustomerEmail,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
}

impl TryFrom<ContactForm> for ContactRequest {
    type Error = FormRejection;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            non_empty(form.name),
            non_empty(form.email),
            non_empty(form.subject),
            non_empty(form.message),
        ) else {
            return Err(FormRejection::MissingFields(MISSING_FIELDS));
        };

        let email = CustomerEmail::parse(email).map_err(FormRejection::InvalidEmail)?;

        Ok(Self {
            name,
            email,
            phone: non_empty(form.phone),
            subject,
            message,
            newsletter: form.newsletter.unwrap_or_default(),
        })
    }
}
