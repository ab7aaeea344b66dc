pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::OpenAiClient,
    parser::TransactionParser,
};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router. Only `path` is served; other methods on it
/// get `405` and other paths `404`.
pub fn router(parser: Arc<TransactionParser>, path: &str) -> Router {
    let app_state = handlers::AppState { parser };

    Router::new()
        .route(
            path,
            post(handlers::parse_transaction).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = OpenAiClient::new(config.llm.clone());
    info!("Using model {} at {}", client.model(), client.endpoint());

    let parser = Arc::new(TransactionParser::new(Arc::new(client)));
    let app = router(parser, &config.server.path);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}{}", addr, config.server.path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
