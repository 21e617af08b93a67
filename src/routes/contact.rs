use actix_web::{web, HttpResponse};

use crate::domain::{ContactForm, ContactRequest};
use crate::mail::Mailer;
use crate::routes::intake::{parse_submission, IntakeError};

#[tracing::instrument(
    name = "Forwarding a contact form submission",
    skip(body, mailer),
    fields(customer_email = tracing::field::Empty, customer_name = tracing::field::Empty)
)]
pub async fn contact<M: Mailer>(
    body: web::Bytes,
    mailer: web::Data<M>,
) -> Result<HttpResponse, IntakeError> {
    let request: ContactRequest = parse_submission::<ContactForm, _>(&body)?;

    let span = tracing::Span::current();
    span.record("customer_email", &tracing::field::display(&request.email));
    span.record("customer_name", &tracing::field::display(&request.name));

    mailer.send_contact_email(&request).await.map_err(|e| {
        tracing::error!(error.cause_chain = ?e, "Failed to send contact email");
        IntakeError::SendFailure(e)
    })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Email sent successfully" })))
}
