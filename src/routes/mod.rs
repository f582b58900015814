use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use portfolio_contact::{Credentials, DeliveryProvider};

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;
mod resume;

pub use contact::ContactFormView;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub credentials: Credentials,
    pub delivery: Arc<dyn DeliveryProvider>,
}

impl AppState {
    pub fn new(config: crate::config::Config, delivery: Arc<dyn DeliveryProvider>) -> Self {
        let credentials = config.contact.emailjs.credentials();

        Self {
            config,
            credentials,
            delivery,
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", axum::routing::post(contact::action))
        .route("/resume", get(resume::redirect))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
