use anyhow::Result;
use mockito::Matcher;
use serde_json::json;

use super::EmailJs;
use super::EmailJsCredentials;
use crate::domain::models::ContactForm;
use crate::domain::models::EmailRelay;
use crate::domain::models::RelayError;

fn credentials() -> EmailJsCredentials {
    EmailJsCredentials {
        service_id: "service_1".to_string(),
        template_id: "template_1".to_string(),
        public_key: "public_1".to_string(),
    }
}

fn form() -> ContactForm {
    ContactForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Let's build something.".to_string(),
    }
}

#[tokio::test]
async fn it_posts_the_template_params() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1.0/email/send")
        .match_body(Matcher::Json(json!({
            "service_id": "service_1",
            "template_id": "template_1",
            "user_id": "public_1",
            "template_params": {
                "from_name": "Ada",
                "reply_to": "ada@example.com",
                "subject": "Hello",
                "message": "Let's build something.",
            },
        })))
        .with_status(200)
        .with_body("OK")
        .create_async()
        .await;

    let relay = EmailJs::new(&server.url(), credentials())?;
    relay.send(&form()).await?;
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn it_reports_rejections_with_the_body() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/v1.0/email/send")
        .with_status(400)
        .with_body("The template ID is invalid")
        .create_async()
        .await;

    let relay = EmailJs::new(&server.url(), credentials())?;
    match relay.send(&form()).await {
        Err(RelayError::Rejected { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, "The template ID is invalid");
        }
        other => panic!("unexpected result {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn it_refuses_to_send_without_credentials() -> Result<()> {
    let relay = EmailJs::new("http://127.0.0.1:9", EmailJsCredentials::default())?;

    match relay.send(&form()).await {
        Err(RelayError::NotConfigured(key)) => assert_eq!(key, "email-service-id"),
        other => panic!("unexpected result {other:?}"),
    }

    Ok(())
}
