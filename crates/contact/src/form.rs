use std::sync::{Mutex, MutexGuard, PoisonError};

use time::OffsetDateTime;

use crate::{
    ContactDraft, Credentials, DeliveryProvider, Error, Payload, Result, SubmissionState,
    format_timestamp, local_now, validate,
};

#[derive(Default)]
struct Inner {
    draft: ContactDraft,
    state: SubmissionState,
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Contact form session: the visitor's draft, the outcome of the last
/// submission, and the provider used to deliver it.
///
/// At most one submission is outstanding at a time; a second [`submit`]
/// while the first awaits the provider is rejected with [`Error::InFlight`].
///
/// [`submit`]: ContactForm::submit
pub struct ContactForm<P> {
    provider: P,
    credentials: Credentials,
    clock: fn() -> OffsetDateTime,
    inner: Mutex<Inner>,
}

impl<P: DeliveryProvider> ContactForm<P> {
    pub fn new(provider: P, credentials: Credentials) -> Self {
        Self {
            provider,
            credentials,
            clock: local_now,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn with_draft(mut self, draft: ContactDraft) -> Self {
        self.inner
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .draft = draft;

        self
    }

    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;

        self
    }

    pub fn draft(&self) -> ContactDraft {
        lock(&self.inner).draft.clone()
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.inner).state.clone()
    }

    pub fn is_sending(&self) -> bool {
        lock(&self.inner).state.is_sending()
    }

    // Edits leave the submission state untouched.

    pub fn set_name(&self, value: impl Into<String>) {
        lock(&self.inner).draft.name = value.into();
    }

    pub fn set_email(&self, value: impl Into<String>) {
        lock(&self.inner).draft.email = value.into();
    }

    pub fn set_message(&self, value: impl Into<String>) {
        lock(&self.inner).draft.message = value.into();
    }

    /// Validates the draft and hands it to the provider.
    ///
    /// Validation failures set [`SubmissionState::Error`] without calling the
    /// provider. Success clears the draft; any failure keeps it for another
    /// attempt.
    pub async fn submit(&self) -> Result<()> {
        let (payload, sending) = {
            let mut inner = lock(&self.inner);

            if inner.state.is_sending() {
                tracing::warn!("Contact submission ignored, another one is in flight");

                return Err(Error::InFlight);
            }

            let draft = match validate(&inner.draft) {
                Ok(draft) => draft,
                Err(err) => {
                    tracing::debug!(code = err.code(), "Contact form rejected");
                    inner.state = SubmissionState::Error(err.to_string());

                    return Err(err.into());
                }
            };

            inner.state = SubmissionState::Sending;

            let payload = Payload::new(draft, format_timestamp((self.clock)()));

            (payload, InFlight::new(&self.inner))
        };

        tracing::info!(
            service_id = %self.credentials.service_id,
            template_id = %self.credentials.template_id,
            "Sending contact message"
        );

        let result = self.provider.send(&self.credentials, &payload).await;

        sending.settle(result)
    }
}

/// Marks the form as sending until settled. Dropping it unsettled (the
/// submit future was cancelled) puts the form back to idle.
struct InFlight<'a> {
    inner: &'a Mutex<Inner>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(inner: &'a Mutex<Inner>) -> Self {
        Self {
            inner,
            settled: false,
        }
    }

    fn settle(mut self, result: std::result::Result<(), crate::DeliveryError>) -> Result<()> {
        self.settled = true;

        let mut inner = lock(self.inner);

        match result {
            Ok(()) => {
                tracing::info!("Contact message delivered");
                inner.state = SubmissionState::Success;
                inner.draft.clear();

                Ok(())
            }
            Err(err) => {
                tracing::warn!(reason = err.reason(), "Contact message delivery failed");
                inner.state = SubmissionState::Error(err.reason().to_owned());

                Err(err.into())
            }
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        let mut inner = lock(self.inner);
        if inner.state.is_sending() {
            inner.state = SubmissionState::Idle;
        }
    }
}
