use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

/// Header twinspark adds to the requests it issues.
pub const PARTIAL_REQUEST_HEADER: &str = "ts-request";

/// Renders askama templates for a request.
pub struct Template {
    partial: bool,
}

impl Template {
    /// Whether the request only wants a fragment of the page.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "Failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template {
            partial: parts.headers.contains_key(PARTIAL_REQUEST_HEADER),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
