use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use portfolio_contact::{ContactDraft, ContactForm, Error, SubmissionState};

use crate::{routes::AppState, routes::index::IndexTemplate, template::Template};

/// What the contact form partial needs to render itself.
#[derive(Default, Clone, Debug)]
pub struct ContactFormView {
    pub draft: ContactDraft,
    pub state: SubmissionState,
}

impl ContactFormView {
    pub fn button_label(&self) -> &'static str {
        if self.state.is_sending() {
            "Sending…"
        } else {
            "Send Message"
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: ContactFormView,
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(draft): Form<ContactDraft>,
) -> impl IntoResponse {
    let form = ContactForm::new(app_state.delivery.clone(), app_state.credentials.clone())
        .with_draft(draft);

    // The form only lives for this request, so its busy check never trips
    // here; concurrent posts are independent attempts.
    match form.submit().await {
        Ok(()) => tracing::info!("Contact form submitted"),
        Err(Error::Validation(err)) => tracing::debug!(code = err.code(), "Contact form invalid"),
        Err(err) => tracing::error!(err = %err, "Contact form delivery failed"),
    }

    let view = ContactFormView {
        draft: form.draft(),
        state: form.state(),
    };

    if template.is_partial() {
        return template.render(ContactFormTemplate { form: view });
    }

    template.render(IndexTemplate::new(view))
}
