use anyhow::Context;
use clap::Parser;
use config::Config;
use game_manager::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod game_manager;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    let corpus = config.load_corpus().context("failed to load word corpus")?;
    let state = Arc::new(
        AppState::from_config(Arc::new(corpus), &config)
            .context("cannot pick secret words from the configured score range")?,
    );

    if let Some(ttl) = config.session_ttl() {
        Arc::clone(&state).spawn_cleanup_task(ttl, config.sweep_interval());
    }

    let app = routes::router(state, config.static_dir.as_deref());

    let addr = config.socket_addr();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    axum::serve(listener, app)
        .await
        .context("server stopped unexpectedly")?;
    Ok(())
}
