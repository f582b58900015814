//! EmailJS REST delivery

use async_trait::async_trait;
use portfolio_contact::{Credentials, DeliveryError, DeliveryProvider, Payload};
use serde::Serialize;

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Payload,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Sends contact messages through the EmailJS `email/send` endpoint.
///
/// The public key travels as `user_id`. Accounts with "strict mode" enabled
/// also need the private key, sent as `accessToken`.
#[derive(Clone, Debug)]
pub struct EmailJs {
    client: reqwest::Client,
    url: String,
    private_key: Option<String>,
}

impl Default for EmailJs {
    fn default() -> Self {
        Self::new(EMAILJS_API_URL)
    }
}

impl EmailJs {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            private_key: None,
        }
    }

    pub fn with_private_key(mut self, private_key: Option<String>) -> Self {
        self.private_key = private_key.filter(|key| !key.is_empty());

        self
    }
}

#[async_trait]
impl DeliveryProvider for EmailJs {
    async fn send(&self, credentials: &Credentials, payload: &Payload) -> Result<(), DeliveryError> {
        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: payload,
            access_token: self.private_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(err = %err, "EmailJS request failed");
                DeliveryError::new(err.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // EmailJS explains rejections in a plain text body.
        let body = response.text().await.unwrap_or_default();
        let body = body.trim();

        tracing::error!(status = %status, body, "EmailJS rejected the message");

        if body.is_empty() {
            return Err(DeliveryError::without_message());
        }

        Err(DeliveryError::new(body))
    }
}
