#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::domain::models::ContactForm;
use crate::domain::models::EmailRelay;
use crate::domain::models::RelayError;

const SEND_PATH: &str = "/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Default)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// EmailJS REST relay. Forwards the contact form to the configured template.
pub struct EmailJs {
    base_url: String,
    client: reqwest::Client,
    credentials: EmailJsCredentials,
}

impl EmailJs {
    pub fn new(base_url: &str, credentials: EmailJsCredentials) -> Result<EmailJs> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        return Ok(EmailJs {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
        });
    }

    fn check_credentials(&self) -> Result<(), RelayError> {
        if self.credentials.service_id.is_empty() {
            return Err(RelayError::NotConfigured("email-service-id"));
        }
        if self.credentials.template_id.is_empty() {
            return Err(RelayError::NotConfigured("email-template-id"));
        }
        if self.credentials.public_key.is_empty() {
            return Err(RelayError::NotConfigured("email-public-key"));
        }

        return Ok(());
    }
}

#[async_trait]
impl EmailRelay for EmailJs {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        self.check_credentials()?;

        let payload = SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: TemplateParams {
                from_name: &form.name,
                reply_to: &form.email,
                subject: &form.subject,
                message: &form.message,
            },
        };

        let res = self
            .client
            .post(format!("{}{SEND_PATH}", self.base_url))
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(reply_to = %form.email, "contact message relayed");
        return Ok(());
    }
}
