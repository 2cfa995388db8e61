use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::history::ContactHistory;
use crate::mail_client::Mailer;
use crate::sourcing::AddressSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Read-only view of the contact log. Trait object so tests swap in a stub.
    pub history: Arc<dyn ContactHistory>,
    /// Outbound delivery. Trait object so tests never hit a mail provider.
    pub mailer: Arc<dyn Mailer>,
    /// The active address sources, in registry order.
    pub sources: Arc<Vec<Box<dyn AddressSource>>>,
}
