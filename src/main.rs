//! Event Market web application
//!
//! The server build serves the Dioxus app together with the auth proxy;
//! the web build hydrates the app in the browser.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::Router;
    use dioxus::server::{DioxusRouterExt, FullstackState, ServeConfig};
    use event_market::api::{self, AppState};
    use event_market::app::App;
    use event_market::backend::AuthClient;
    use event_market::config;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;
    use tower::ServiceBuilder;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "event_market=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Event Market");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    let backend_url = config.backend_url()?;
    let auth = AuthClient::new(&backend_url, Duration::from_secs(config.backend.timeout_secs))?;
    tracing::info!(backend = %backend_url, "Auth backend client ready");

    // API routes first, then the Dioxus application for everything else
    let app: Router = api::router::<FullstackState>(AppState::new(auth))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        );

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
        }
        tracing::info!("Shutdown signal received");
        signal_token.cancel();
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(event_market::app::App);
}
