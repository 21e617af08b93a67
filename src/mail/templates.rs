//! src/mail/templates.rs
//!
//! HTML bodies for the inquiry emails the operator receives. Every value a
//! customer typed is escaped before it is interpolated.

use htmlescape::encode_minimal;

use crate::domain::{ContactRequest, CustomTourRequest};

const NOT_PROVIDED: &str = "Not provided";
const NOT_SPECIFIED: &str = "Not specified";
const FLEXIBLE: &str = "Flexible";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

pub fn contact_email(request: &ContactRequest) -> RenderedEmail {
    let rows = [
        detail_row("Name", &encode_minimal(&request.name)),
        detail_row("Email", &mailto_link(request.email.as_ref())),
        detail_row(
            "Phone",
            &encode_minimal(request.phone.as_deref().unwrap_or(NOT_PROVIDED)),
        ),
        detail_row("Subject", &encode_minimal(&request.subject)),
        detail_row(
            "Newsletter",
            if request.newsletter {
                "Yes, subscribed"
            } else {
                "No"
            },
        ),
    ];

    let html = layout(
        "New Contact Form Submission",
        &rows.concat(),
        &text_block("Message:", &request.message, "#f9fafb", "#dc2626"),
        "contact form",
    );

    RenderedEmail {
        subject: format!("[Contact Form] {} - from {}", request.subject, request.name),
        html,
    }
}

pub fn custom_tour_email(request: &CustomTourRequest) -> RenderedEmail {
    let interests = if request.interests.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        request.interests.join(", ")
    };

    let rows = [
        detail_row("Name", &encode_minimal(&request.name)),
        detail_row("Email", &mailto_link(request.email.as_ref())),
        detail_row(
            "Phone",
            &encode_minimal(request.phone.as_deref().unwrap_or(NOT_PROVIDED)),
        ),
        detail_row(
            "Preferred Date",
            &encode_minimal(request.date.as_deref().unwrap_or(FLEXIBLE)),
        ),
        detail_row(
            "Group Size",
            &encode_minimal(request.group_size.as_deref().unwrap_or(NOT_SPECIFIED)),
        ),
        detail_row(
            "Duration",
            &encode_minimal(request.duration.as_deref().unwrap_or(NOT_SPECIFIED)),
        ),
        detail_row("Interests", &encode_minimal(&interests)),
    ];

    let additional_requests = request
        .additional_requests
        .as_deref()
        .map(|text| text_block("Additional Requests:", text, "#fef3c7", "#f59e0b"))
        .unwrap_or_default();

    let html = layout(
        "🎯 New Custom Tour Request",
        &rows.concat(),
        &additional_requests,
        "custom tour form",
    );

    RenderedEmail {
        subject: format!("[Custom Tour Request] from {}", request.name),
        html,
    }
}

fn layout(heading: &str, rows: &str, trailer: &str, form_name: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #dc2626; border-bottom: 2px solid #dc2626; padding-bottom: 10px;">{heading}</h2>
  <table style="width: 100%; border-collapse: collapse; margin-top: 20px;">
{rows}  </table>
{trailer}  <p style="margin-top: 30px; font-size: 12px; color: #9ca3af;">This email was sent from the {form_name} on Dubrovnik Tours website.</p>
</div>
"#
    )
}

/// `value` must already be HTML.
fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"    <tr>
      <td style="padding: 10px; background: #f3f4f6; font-weight: bold; width: 30%;">{label}</td>
      <td style="padding: 10px; background: #f9fafb;">{value}</td>
    </tr>
"#
    )
}

fn mailto_link(address: &str) -> String {
    let address = encode_minimal(address);
    format!(r#"<a href="mailto:{address}">{address}</a>"#)
}

// `pre-wrap` keeps the customer's line breaks.
fn text_block(title: &str, text: &str, background: &str, accent: &str) -> String {
    format!(
        r#"  <div style="margin-top: 20px; padding: 15px; background: {background}; border-left: 4px solid {accent};">
    <h3 style="margin: 0 0 10px 0; color: #374151;">{title}</h3>
    <p style="margin: 0; white-space: pre-wrap; color: #4b5563;">{text}</p>
  </div>
"#,
        text = encode_minimal(text),
    )
}
