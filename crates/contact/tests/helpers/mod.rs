use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_contact::{Credentials, DeliveryError, DeliveryProvider, Payload};
use tokio::sync::Notify;

/// Provider that records every call and answers with a canned outcome.
#[derive(Clone, Default)]
pub struct RecordingProvider {
    calls: Arc<Mutex<Vec<(Credentials, Payload)>>>,
    outcome: Option<DeliveryError>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl RecordingProvider {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing(err: DeliveryError) -> Self {
        Self {
            outcome: Some(err),
            ..Default::default()
        }
    }

    /// Every send waits until `gate` is notified.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(Credentials, Payload)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<Payload> {
        self.calls().into_iter().map(|(_, payload)| payload).collect()
    }
}

#[async_trait]
impl DeliveryProvider for RecordingProvider {
    async fn send(&self, credentials: &Credentials, payload: &Payload) -> Result<(), DeliveryError> {
        self.calls
            .lock()
            .unwrap()
            .push((credentials.clone(), payload.clone()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[allow(dead_code)]
pub fn credentials() -> Credentials {
    Credentials {
        service_id: "service_portfolio".to_owned(),
        template_id: "template_contact".to_owned(),
        public_key: "pk_test".to_owned(),
    }
}
