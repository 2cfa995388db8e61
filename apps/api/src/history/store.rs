//! Contact-history store access.
//!
//! The deduplication core only ever reads, through the narrow
//! `ContactHistory` trait: the full contacted set, the per-job-title subset,
//! or a recency window. Writes happen in exactly one place; the delivery
//! step records each attempt via `record_contact` after this core has
//! returned its novel set.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::contact::ContactLogRow;

/// Read contract over the contact log. Swappable with an in-memory stub in
/// tests; carried in `AppState` as `Arc<dyn ContactHistory>`.
#[async_trait]
pub trait ContactHistory: Send + Sync {
    /// Every address ever attempted, regardless of delivery status.
    async fn all_contacted(&self) -> Result<HashSet<String>>;

    /// Addresses already attempted for a specific job title.
    async fn contacted_for_job(&self, job_title: &str) -> Result<HashSet<String>>;

    /// Addresses attempted within the last `days` days.
    async fn contacted_within_days(&self, days: u32) -> Result<HashSet<String>>;
}

/// PostgreSQL-backed history over the `contact_log` table. Addresses are
/// normalized in SQL with the same trim+lowercase policy the sources use.
pub struct PgContactHistory {
    pool: PgPool,
}

impl PgContactHistory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactHistory for PgContactHistory {
    async fn all_contacted(&self) -> Result<HashSet<String>> {
        let addresses: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT LOWER(TRIM(recipient_email)) FROM contact_log",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(addresses.into_iter().collect())
    }

    async fn contacted_for_job(&self, job_title: &str) -> Result<HashSet<String>> {
        let addresses: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT LOWER(TRIM(recipient_email)) FROM contact_log WHERE job_title = $1",
        )
        .bind(job_title)
        .fetch_all(&self.pool)
        .await?;
        Ok(addresses.into_iter().collect())
    }

    async fn contacted_within_days(&self, days: u32) -> Result<HashSet<String>> {
        let addresses: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT LOWER(TRIM(recipient_email))
            FROM contact_log
            WHERE sent_at >= NOW() - make_interval(days => $1)
            "#,
        )
        .bind(days as i32)
        .fetch_all(&self.pool)
        .await?;
        Ok(addresses.into_iter().collect())
    }
}

/// Records one delivery attempt. Called by the delivery step for successes
/// and failures alike; `status` is "sent" or "failed".
pub async fn record_contact(
    pool: &PgPool,
    job_title: &str,
    recipient_email: &str,
    status: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO contact_log (id, job_title, recipient_email, status) VALUES ($1, $2, $3, $4)",
    )
    .bind(Uuid::new_v4())
    .bind(job_title)
    .bind(recipient_email)
    .bind(status)
    .execute(pool)
    .await?;

    info!("Logged {status} attempt to {recipient_email} for '{job_title}'");
    Ok(())
}

/// Full contact log, newest first.
pub async fn list_contacts(pool: &PgPool) -> Result<Vec<ContactLogRow>> {
    Ok(sqlx::query_as::<_, ContactLogRow>(
        "SELECT * FROM contact_log ORDER BY sent_at DESC",
    )
    .fetch_all(pool)
    .await?)
}
