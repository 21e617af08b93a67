//! src/domain/custom_tour_request.rs

use crate::domain::customer_email::CustomerEmail;
use crate::domain::{non_empty, FormRejection};

const MISSING_FIELDS: &str = "Name and email are required";

/// Shape of the "design your own tour" form body.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTourForm {
    #[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::falsy_as_absent")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub group_size: Option<String>,
    pub interests: Option<Vec<String>>,
    pub duration: Option<String>,
    pub additional_requests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTourRequest {
    pub name: String,
    pub email: CustomerEmail,
    pub phone: Option<String>,
    /// Preferred date, free-form. `None` means the customer is flexible.
    pub date: Option<String>,
    pub group_size: Option<String>,
    /// Tags picked on the form: wine, history, beach, food, photography, adventure.
    pub interests: Vec<String>,
    pub duration: Option<String>,
    pub additional_requests: Option<String>,
}

impl TryFrom<CustomTourForm> for CustomTourRequest {
    type Error = FormRejection;

    fn try_from(form: CustomTourForm) -> Result<Self, Self::Error> {
        let (Some(name), Some(email)) = (non_empty(form.name), non_empty(form.email)) else {
            return Err(FormRejection::MissingFields(MISSING_FIELDS));
        };

        let email = CustomerEmail::parse(email).map_err(FormRejection::InvalidEmail)?;

        Ok(Self {
            name,
            email,
            phone: non_empty(form.phone),
            date: non_empty(form.date),
            group_size: non_empty(form.group_size),
            interests: form.interests.unwrap_or_default(),
            duration: non_empty(form.duration),
            additional_requests: non_empty(form.additional_requests),
        })
    }
}
