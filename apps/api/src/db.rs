use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const MAX_CONNECTIONS: u32 = 10;

/// Creates the PostgreSQL pool backing the contact log.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to the contact-log database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?;

    info!("Contact-log database pool established");
    Ok(pool)
}
