mod config;
mod db;
mod errors;
mod history;
mod mail_client;
mod models;
mod outreach;
mod routes;
mod sourcing;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::history::PgContactHistory;
use crate::mail_client::HttpMailer;
use crate::routes::build_router;
use crate::sourcing::default_sources;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Outreach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the contact-history view over it
    let db = create_pool(&config.database_url).await?;
    let history = Arc::new(PgContactHistory::new(db.clone()));

    // Initialize the mail client
    let mailer = Arc::new(HttpMailer::new(
        config.mail_api_url.clone(),
        config.mail_api_key.clone(),
        config.sender_name.clone(),
        config.sender_email.clone(),
    ));
    info!("Mail client initialized (sender: {})", config.sender_email);

    // Register the address sources
    let sources = Arc::new(default_sources());
    info!("Registered {} address sources", sources.len());

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        history,
        mailer,
        sources,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
