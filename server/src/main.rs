mod config;
mod manifests;
mod routes;
mod state;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env().expect("invalid configuration");
    let registry = config.load_registry().expect("board registry load failed");

    // Non-fatal: the page still renders, the install button just 404s.
    let missing = manifests::warn_missing(&config.flasher_dir, &registry);
    tracing::info!(
        boards = registry.len(),
        missing_manifests = missing,
        flasher_dir = %config.flasher_dir.display(),
        "board registry loaded"
    );

    let mut state = state::AppState::new(registry, config.flasher_dir.clone());
    if config.boards_file.is_some() {
        // The page only sees boards that are inlined into it.
        state = state.embedding_registry();
        tracing::info!("board registry embedded into index.html");
    }
    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "flasher listening");
    axum::serve(listener, app).await.expect("server failed");
}
