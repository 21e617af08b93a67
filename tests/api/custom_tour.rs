use crate::helpers::{response_json, spawn_app, spawn_app_with, Inquiry, RecordingMailer};

#[tokio::test]
async fn custom_tour_returns_a_200_and_lists_interests() {
    let app = spawn_app().await;
    let body = r#"{"name":"Ana","email":"ana@example.com","interests":["wine","beach"],"duration":"fullDay"}"#;

    let response = app.post_custom_tour(body).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "message": "Custom tour request sent successfully" })
    );

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].email.html.contains("wine, beach"));
    assert!(sent[0].email.html.contains("fullDay"));
    assert_eq!(sent[0].email.subject, "[Custom Tour Request] from Ana");
}

#[tokio::test]
async fn custom_tour_forwards_every_field() {
    let app = spawn_app().await;
    let body = serde_json::json!({
        "name": "Ana",
        "email": "ana@example.com",
        "phone": "+385 91 000 000",
        "date": "2026-06-14",
        "groupSize": "3-5",
        "interests": ["history", "food"],
        "duration": "multi-day",
        "additionalRequests": "A stop in Ston for oysters",
    });

    app.post_custom_tour(body.to_string()).await;

    let sent = app.mailer.sent();
    let Inquiry::CustomTour(request) = &sent[0].inquiry else {
        panic!("The mailer received a contact request instead of a custom tour request.");
    };
    assert_eq!(request.group_size.as_deref(), Some("3-5"));
    assert_eq!(request.interests, vec!["history", "food"]);
    assert_eq!(
        request.additional_requests.as_deref(),
        Some("A stop in Ston for oysters")
    );
    assert!(sent[0].email.html.contains("Additional Requests:"));
    assert!(sent[0].email.html.contains("2026-06-14"));
}

#[tokio::test]
async fn custom_tour_uses_fallbacks_for_absent_fields() {
    let app = spawn_app().await;

    app.post_custom_tour(r#"{"name":"Ana","email":"ana@example.com"}"#)
        .await;

    let html = &app.mailer.sent()[0].email.html;
    assert!(html.contains("Flexible"));
    assert!(html.contains("Not provided"));
    assert!(html.contains("Not specified"));
    assert!(!html.contains("Additional Requests:"));
}

#[tokio::test]
async fn custom_tour_returns_a_400_for_an_invalid_email() {
    let app = spawn_app().await;

    let response = app
        .post_custom_tour(r#"{"name":"Ana","email":"bad-email"}"#)
        .await;

    assert_eq!(400, response.status().as_u16());
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "error": "Invalid email format" })
    );
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn custom_tour_returns_a_400_when_name_or_email_is_missing() {
    let app = spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({"email": "ana@example.com"}), "missing the name"),
        (serde_json::json!({"name": "Ana", "interests": ["wine"]}), "missing the email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_custom_tour(body.to_string()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description,
        );
        assert_eq!(
            response_json(response).await,
            serde_json::json!({ "error": "Name and email are required", "received": body }),
        );
    }

    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn custom_tour_returns_a_400_for_empty_or_malformed_bodies() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("", "Request body is empty"),
        ("{not valid json", "Invalid JSON in request body"),
        (
            r#"{"name":"Ana","email":"ana@example.com","interests":"wine"}"#,
            "Invalid JSON in request body",
        ),
    ];

    for (body, error) in test_cases {
        let response = app.post_custom_tour(body).await;

        assert_eq!(400, response.status().as_u16());
        assert_eq!(
            response_json(response).await,
            serde_json::json!({ "error": error })
        );
    }
}

#[tokio::test]
async fn custom_tour_returns_a_500_when_the_email_cannot_be_sent() {
    let app = spawn_app_with(RecordingMailer::failing()).await;

    let response = app
        .post_custom_tour(r#"{"name":"Ana","email":"ana@example.com"}"#)
        .await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "error": "Failed to send email" })
    );
}
