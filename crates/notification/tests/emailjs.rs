use portfolio_contact::{
    ContactDraft, ContactForm, Credentials, DELIVERY_FALLBACK_MESSAGE, DeliveryError,
    DeliveryProvider, Payload, SubmissionState,
};
use portfolio_notification::EmailJs;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const SEND_PATH: &str = "/api/v1.0/email/send";

fn credentials() -> Credentials {
    Credentials {
        service_id: "service_portfolio".to_owned(),
        template_id: "template_contact".to_owned(),
        public_key: "pk_test".to_owned(),
    }
}

fn payload() -> Payload {
    Payload {
        name: "Aman".to_owned(),
        email: "a@b.c".to_owned(),
        message: "hi".to_owned(),
        time: "10/19/2026, 3:04:05 PM".to_owned(),
    }
}

fn provider(server: &MockServer) -> EmailJs {
    EmailJs::new(format!("{}{SEND_PATH}", server.uri()))
}

#[tokio::test]
async fn test_send_posts_emailjs_request() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "service_id": "service_portfolio",
            "template_id": "template_contact",
            "user_id": "pk_test",
            "template_params": {
                "name": "Aman",
                "email": "a@b.c",
                "message": "hi",
                "time": "10/19/2026, 3:04:05 PM"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    provider(&server).send(&credentials(), &payload()).await?;

    Ok(())
}

#[tokio::test]
async fn test_private_key_is_sent_as_access_token() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_json(json!({
            "service_id": "service_portfolio",
            "template_id": "template_contact",
            "user_id": "pk_test",
            "template_params": {
                "name": "Aman",
                "email": "a@b.c",
                "message": "hi",
                "time": "10/19/2026, 3:04:05 PM"
            },
            "accessToken": "sk_private"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    provider(&server)
        .with_private_key(Some("sk_private".to_owned()))
        .send(&credentials(), &payload())
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_rejection_body_becomes_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited\n"))
        .mount(&server)
        .await;

    let result = provider(&server).send(&credentials(), &payload()).await;

    assert_eq!(result, Err(DeliveryError::new("rate limited")));
}

#[tokio::test]
async fn test_empty_rejection_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = provider(&server).send(&credentials(), &payload()).await;

    assert_eq!(result, Err(DeliveryError::without_message()));
}

#[tokio::test]
async fn test_unreachable_provider_reports_transport_error() {
    let result = EmailJs::new(format!("http://127.0.0.1:1{SEND_PATH}"))
        .send(&credentials(), &payload())
        .await;

    let err = result.expect_err("request should fail");
    assert!(err.message().is_some_and(|message| !message.is_empty()));
}

#[tokio::test]
async fn test_contact_form_over_emailjs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("The Public Key is invalid"))
        .expect(1)
        .mount(&server)
        .await;

    let draft = ContactDraft::new("Aman", "a@b.c", "hi");
    let form = ContactForm::new(provider(&server), Credentials::default()).with_draft(draft.clone());

    let _ = form.submit().await;

    assert_eq!(
        form.state(),
        SubmissionState::Error("The Public Key is invalid".to_owned())
    );
    assert_ne!(form.state().error_message(), Some(DELIVERY_FALLBACK_MESSAGE));
    assert_eq!(form.draft(), draft);
}
