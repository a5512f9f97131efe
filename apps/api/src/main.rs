use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use edupath_api::catalog::Catalog;
use edupath_api::config::Config;
use edupath_api::routes::build_router;
use edupath_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EduPath API v{}", env!("CARGO_PKG_VERSION"));

    // Load the reference catalog once; handlers share it read-only
    let catalog = Catalog::load(config.catalog_dir.as_deref()).with_context(|| {
        match &config.catalog_dir {
            Some(dir) => format!("Failed to load catalog from {}", dir.display()),
            None => "Failed to load embedded catalog".to_string(),
        }
    })?;
    info!(
        "Pathway settings: top {} careers, {} courses per skill, {} total",
        config.pathway.top_careers,
        config.pathway.course_limits.per_skill,
        config.pathway.course_limits.total
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
