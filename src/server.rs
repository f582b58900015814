use std::sync::Arc;

use anyhow::Result;
use portfolio_contact::DeliveryProvider;
use portfolio_notification::{EmailJs, Smtp};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::{Config, ProviderKind};
use crate::routes::AppState;

/// Builds the provider selected by `contact.provider`.
pub fn delivery_provider(config: &Config) -> Result<Arc<dyn DeliveryProvider>> {
    let provider: Arc<dyn DeliveryProvider> = match config.contact.provider {
        ProviderKind::EmailJs => {
            let emailjs = &config.contact.emailjs;

            if emailjs.credentials().has_placeholders() {
                tracing::warn!(
                    "EmailJS credentials are not configured, contact messages will be rejected by the provider"
                );
            }

            Arc::new(EmailJs::new(&emailjs.url).with_private_key(emailjs.private_key.clone()))
        }
        ProviderKind::Smtp => Arc::new(Smtp::new(&config.contact.smtp)?),
    };

    Ok(provider)
}

/// The full application router with its middleware stack.
pub fn app(state: AppState) -> axum::Router {
    crate::routes::router(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}

/// Applies the command line overrides, then validates the result.
pub fn with_overrides(
    mut config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<Config> {
    if let Some(host) = host_override {
        config.server.host = host;
    }

    if let Some(port) = port_override {
        config.server.port = port;
    }

    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    Ok(config)
}

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting portfolio server...");

    let config = with_overrides(config, host_override, port_override)?;
    let host = config.server.host.to_owned();
    let port = config.server.port;

    let delivery = delivery_provider(&config)?;
    tracing::info!(provider = ?config.contact.provider, "Contact delivery ready");

    let app = app(AppState::new(config, delivery));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(err = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(err = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
