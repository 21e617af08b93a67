use actix_web::{web, HttpResponse};

use crate::domain::{CustomTourForm, CustomTourRequest};
use crate::mail::Mailer;
use crate::routes::intake::{parse_submission, IntakeError};

#[tracing::instrument(
    name = "Forwarding a custom tour request",
    skip(body, mailer),
    fields(customer_email = tracing::field::Empty, customer_name = tracing::field::Empty)
)]
pub async fn custom_tour<M: Mailer>(
    body: web::Bytes,
    mailer: web::Data<M>,
) -> Result<HttpResponse, IntakeError> {
    let request: CustomTourRequest = parse_submission::<CustomTourForm, _>(&body)?;

    let span = tracing::Span::current();
    span.record("customer_email", &tracing::field::display(&request.email));
    span.record("customer_name", &tracing::field::display(&request.name));

    mailer
        .send_custom_tour_email(&request)
        .await
        .map_err(|e| {
            tracing::error!(error.cause_chain = ?e, "Failed to send custom tour email");
            IntakeError::SendFailure(e)
        })?;

    Ok(HttpResponse::Ok()
        .json(serde_json::json!({ "message": "Custom tour request sent successfully" })))
}
