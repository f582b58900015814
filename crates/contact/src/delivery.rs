use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::ContactDraft;

pub const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

pub const DELIVERY_FALLBACK_MESSAGE: &str = "Failed to send your message. Please try again later.";

/// `10/19/2026, 3:04:05 PM`
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
);

/// Identifiers the email provider needs to route a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            service_id: PLACEHOLDER_SERVICE_ID.to_owned(),
            template_id: PLACEHOLDER_TEMPLATE_ID.to_owned(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_owned(),
        }
    }
}

impl Credentials {
    /// Builds credentials from optional values, keeping the placeholder for
    /// anything unset or blank.
    pub fn from_optional(
        service_id: Option<String>,
        template_id: Option<String>,
        public_key: Option<String>,
    ) -> Self {
        fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| placeholder.to_owned())
        }

        Self {
            service_id: or_placeholder(service_id, PLACEHOLDER_SERVICE_ID),
            template_id: or_placeholder(template_id, PLACEHOLDER_TEMPLATE_ID),
            public_key: or_placeholder(public_key, PLACEHOLDER_PUBLIC_KEY),
        }
    }

    pub fn has_placeholders(&self) -> bool {
        self.service_id == PLACEHOLDER_SERVICE_ID
            || self.template_id == PLACEHOLDER_TEMPLATE_ID
            || self.public_key == PLACEHOLDER_PUBLIC_KEY
    }
}

/// Template parameters sent to the provider.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub time: String,
}

impl Payload {
    pub fn new(draft: ContactDraft, time: impl Into<String>) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
            message: draft.message,
            time: time.into(),
        }
    }
}

pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Current time in the host's offset, UTC when the offset can't be read.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// The provider rejected or never received the message.
#[derive(thiserror::Error, Clone, Debug, Default, PartialEq, Eq)]
#[error("{}", self.reason())]
pub struct DeliveryError {
    message: Option<String>,
}

impl DeliveryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Text shown to the visitor.
    pub fn reason(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => DELIVERY_FALLBACK_MESSAGE,
        }
    }
}

#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    async fn send(&self, credentials: &Credentials, payload: &Payload) -> Result<(), DeliveryError>;
}

#[async_trait]
impl<P: DeliveryProvider + ?Sized> DeliveryProvider for Arc<P> {
    async fn send(&self, credentials: &Credentials, payload: &Payload) -> Result<(), DeliveryError> {
        (**self).send(credentials, payload).await
    }
}
