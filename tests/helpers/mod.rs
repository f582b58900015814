#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use portfolio::config::{
    Config, ContactConfig, ObservabilityConfig, ServerConfig, SiteConfig,
};
use portfolio_contact::{Credentials, DeliveryError, DeliveryProvider, Payload};
use tower::ServiceExt;

pub const RESUME_URL: &str = "https://resume.portfolio.localhost/aman.pdf";

/// Provider double keeping every payload it was asked to deliver.
#[derive(Clone, Default)]
pub struct StubProvider {
    payloads: Arc<Mutex<Vec<Payload>>>,
    failure: Option<DeliveryError>,
}

impl StubProvider {
    pub fn failing(err: DeliveryError) -> Self {
        Self {
            failure: Some(err),
            ..Default::default()
        }
    }

    pub fn payloads(&self) -> Vec<Payload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryProvider for StubProvider {
    async fn send(&self, _credentials: &Credentials, payload: &Payload) -> Result<(), DeliveryError> {
        self.payloads.lock().unwrap().push(payload.clone());

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig {
            resume_url: RESUME_URL.to_owned(),
        },
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app(provider: StubProvider) -> Router {
    portfolio::server::app(portfolio::AppState::new(config(), Arc::new(provider)))
}

pub async fn get(app: Router, uri: &str) -> anyhow::Result<Response<Body>> {
    let req = Request::builder().uri(uri).body(Body::empty())?;

    Ok(app.oneshot(req).await?)
}

pub async fn post_contact(
    app: Router,
    fields: &[(&str, &str)],
    partial: bool,
) -> anyhow::Result<Response<Body>> {
    let mut req = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if partial {
        req = req.header(portfolio::template::PARTIAL_REQUEST_HEADER, "true");
    }

    let req = req.body(Body::from(serde_urlencoded::to_string(fields)?))?;

    Ok(app.oneshot(req).await?)
}

pub async fn body_text(res: Response<Body>) -> anyhow::Result<String> {
    let bytes = res.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}
