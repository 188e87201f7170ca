//! Word Level Analyzer - Binary Entry Point
//!
//! Loads the level table and lexicon once, then serves the analysis API.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use wordlevel::api::http::create_router;
use wordlevel::api::state::AppState;
use wordlevel::{
    Analyzer, AnalyzeError, Config, FileLexicon, LevelTable, Result, SynonymProvider,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    if let Err(e) = run(config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let levels = LevelTable::load_from_dir(&config.level_data_dir)?;
    if levels.is_empty() {
        return Err(AnalyzeError::config(format!(
            "no word levels loaded from {}",
            config.level_data_dir.display()
        )));
    }
    tracing::info!("loaded {} word levels", levels.len());

    let lexicon = FileLexicon::load(&config.lexicon_path).map_err(|e| {
        AnalyzeError::config(format!(
            "failed to load lexicon {}: {e}",
            config.lexicon_path.display()
        ))
    })?;
    tracing::info!(
        "loaded lexicon with {} entries ('{}' provider)",
        lexicon.len(),
        lexicon.name()
    );

    let analyzer = Analyzer::new(Arc::new(levels), Arc::new(lexicon))?;
    let state = Arc::new(AppState::new(analyzer));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AnalyzeError::config(format!("failed to bind port {}: {e}", config.port)))?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl+c: {e}");
        return;
    }
    tracing::info!("shutdown requested");
}
