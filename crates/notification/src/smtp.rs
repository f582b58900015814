//! SMTP delivery using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials as SmtpCredentials,
};
use portfolio_contact::{Credentials, DeliveryError, DeliveryProvider, Payload};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SmtpConfig {
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub from_address: String,
    /// Inbox receiving the contact messages.
    #[serde(default)]
    pub contact_address: String,
}

fn default_port() -> u16 {
    587
}

#[derive(askama::Template)]
#[template(path = "contact-message.txt")]
struct ContactMessageTemplate<'a> {
    name: &'a str,
    email: &'a str,
    time: &'a str,
    message: &'a str,
}

/// Forwards contact messages to a fixed inbox over SMTP.
#[derive(Clone)]
pub struct Smtp {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl Smtp {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mailer = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                from = %config.from_address,
                "SMTP delivery initialized with authentication and TLS"
            );

            let creds = SmtpCredentials::new(config.username.clone(), config.password.clone());

            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.parse()?,
            to: config.contact_address.parse()?,
        })
    }

    fn build_message(&self, payload: &Payload) -> anyhow::Result<Message> {
        let body = askama::Template::render(&ContactMessageTemplate {
            name: &payload.name,
            email: &payload.email,
            time: &payload.time,
            message: &payload.message,
        })?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(format!("New message from {}", payload.name))
            .header(ContentType::TEXT_PLAIN);

        // The form accepts loose addresses that are not valid mailboxes.
        match payload.email.parse::<Mailbox>() {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(err) => tracing::warn!(err = %err, "Visitor email is not a mailbox, no Reply-To"),
        }

        Ok(builder.body(body)?)
    }
}

#[async_trait]
impl DeliveryProvider for Smtp {
    async fn send(&self, _credentials: &Credentials, payload: &Payload) -> Result<(), DeliveryError> {
        let message = self.build_message(payload).map_err(|err| {
            tracing::error!(err = %err, "Failed to build contact email");
            DeliveryError::without_message()
        })?;

        let mailer = self.mailer.clone();
        let sent = tokio::task::spawn_blocking(move || mailer.send(&message)).await;

        match sent {
            Ok(Ok(_)) => {
                tracing::info!(to = %self.to, "Contact email sent");
                Ok(())
            }
            Ok(Err(err)) => {
                tracing::error!(err = %err, to = %self.to, "Failed to send contact email via SMTP");
                Err(DeliveryError::without_message())
            }
            Err(err) => {
                tracing::error!(err = %err, "SMTP send task failed");
                Err(DeliveryError::without_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "localhost".to_owned(),
            port: 1025,
            username: String::new(),
            password: String::new(),
            from_address: "Portfolio <noreply@portfolio.localhost>".to_owned(),
            contact_address: "owner@portfolio.localhost".to_owned(),
        }
    }

    fn payload(email: &str) -> Payload {
        Payload {
            name: "Aman".to_owned(),
            email: email.to_owned(),
            message: "Hello there".to_owned(),
            time: "10/19/2026, 3:04:05 PM".to_owned(),
        }
    }

    #[test]
    fn test_build_message_sets_reply_to_and_body() -> anyhow::Result<()> {
        let smtp = Smtp::new(&config())?;
        let message = smtp.build_message(&payload("visitor@example.com"))?;
        let formatted = String::from_utf8(message.formatted())?;

        assert!(formatted.contains("Subject: New message from Aman"));
        assert!(formatted.contains("Reply-To: visitor@example.com"));
        assert!(formatted.contains("Name: Aman"));
        assert!(formatted.contains("Hello there"));

        Ok(())
    }

    #[test]
    fn test_loose_email_still_builds_message() -> anyhow::Result<()> {
        let smtp = Smtp::new(&config())?;
        let message = smtp.build_message(&payload("a@b@c.d"))?;
        let formatted = String::from_utf8(message.formatted())?;

        assert!(!formatted.contains("Reply-To"));
        assert!(formatted.contains("Email: a@b@c.d"));

        Ok(())
    }

    #[test]
    fn test_invalid_inbox_is_rejected() {
        let mut config = config();
        config.contact_address = "not an address".to_owned();

        assert!(Smtp::new(&config).is_err());
    }
}
