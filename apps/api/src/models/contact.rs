use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One delivery attempt. A row exists for every address the system has ever
/// tried to contact, whether or not the send succeeded — `status` records the
/// outcome ("sent" | "failed").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactLogRow {
    pub id: Uuid,
    pub job_title: String,
    pub recipient_email: String,
    pub status: String,
    pub sent_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
