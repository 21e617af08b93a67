//! src/mail/client.rs

use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::config::EmailClientSettings;
use crate::domain::{ContactRequest, CustomTourRequest, CustomerEmail};
use crate::mail::templates::{self, RenderedEmail};
use crate::mail::Mailer;

/// Sends inquiries through an authenticated SMTP relay, from the operator
/// account to itself, with the customer as `Reply-To`.
pub struct EmailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    operator: Mailbox,
}

impl EmailClient {
    pub fn new(settings: &EmailClientSettings) -> Result<Self, anyhow::Error> {
        let operator = settings.operator().with_context(|| {
            format!("{:?} is not a valid operator email", settings.operator_email)
        })?;

        // Credentials are only sent over TLS; plaintext relays are local mail catchers.
        let builder = if settings.require_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .with_context(|| format!("Failed to set up TLS relay {}", settings.host))?
                .credentials(Credentials::new(
                    settings.operator_email.clone(),
                    settings.app_password.expose_secret().clone(),
                ))
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        };

        let transport = builder
            .port(settings.port)
            .timeout(Some(settings.timeout()))
            .build();

        Ok(Self {
            transport,
            operator,
        })
    }

    #[tracing::instrument(
        name = "Sending inquiry email to the operator",
        skip(self, reply_to, email),
        fields(reply_to = %reply_to, subject = %email.subject)
    )]
    async fn deliver(&self, reply_to: &CustomerEmail, email: RenderedEmail) -> anyhow::Result<()> {
        let message = self.compose(reply_to, email)?;

        self.transport
            .send(message)
            .await
            .context("The SMTP relay did not accept the message")?;

        Ok(())
    }

    fn compose(&self, reply_to: &CustomerEmail, email: RenderedEmail) -> anyhow::Result<Message> {
        let reply_to = reply_to.as_ref().parse::<Address>().map_err(|e| {
            tracing::warn!(
                reply_to = %reply_to,
                error = %e,
                "Customer address passed the form check but is not a valid mailbox"
            );
            anyhow::Error::new(e)
                .context(format!("{} cannot be used as a Reply-To address", reply_to))
        })?;

        Message::builder()
            .from(self.operator.clone())
            .to(self.operator.clone())
            .reply_to(Mailbox::new(None, reply_to))
            .subject(email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html)
            .context("Failed to compose the inquiry email")
    }
}

impl Mailer for EmailClient {
    async fn send_contact_email(&self, request: &ContactRequest) -> anyhow::Result<()> {
        self.deliver(&request.email, templates::contact_email(request))
            .await
    }

    async fn send_custom_tour_email(&self, request: &CustomTourRequest) -> anyhow::Result<()> {
        self.deliver(&request.email, templates::custom_tour_email(request))
            .await
    }
}
