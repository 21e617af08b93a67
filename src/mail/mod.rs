use std::future::Future;

use crate::domain::{ContactRequest, CustomTourRequest};

pub mod client;
pub mod templates;

pub use client::EmailClient;

/// Forwards validated form submissions to the operator's mailbox.
///
/// A send either completes (the relay accepted the message) or fails. Nothing
/// is retried or queued; the caller decides what to tell the customer.
pub trait Mailer: Send + Sync + 'static {
    fn send_contact_email(
        &self,
        request: &ContactRequest,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn send_custom_tour_email(
        &self,
        request: &CustomTourRequest,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
