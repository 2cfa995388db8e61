//! Axum route handlers for the outreach pipeline.
//!
//! `discover` runs aggregation + deduplication with no side effects;
//! `send` runs the same pipeline and then delivers to each novel address,
//! logging every attempt.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::history::store::record_contact;
use crate::mail_client::OutboundEmail;
use crate::models::profile::SearchProfile;
use crate::outreach::composer::{compose_body, compose_subject};
use crate::outreach::dedup::{filter_novel, DedupOutcome, DedupScope};
use crate::sourcing::aggregate;
use crate::state::AppState;

/// Spacing between consecutive sends, to stay under provider rate limits.
const SEND_SPACING_MS: u64 = 1000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OutreachRequest {
    #[serde(flatten)]
    pub profile: SearchProfile,
    /// Which history slice suppresses candidates. Defaults to global.
    #[serde(default)]
    pub dedup_scope: DedupScope,
}

#[derive(Debug, Serialize)]
pub struct DiscoverResponse {
    pub job_title: String,
    pub total_found: usize,
    pub duplicates_skipped: usize,
    pub new_count: usize,
    /// Novel addresses, bounded by the requested ceiling.
    pub addresses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub message: String,
    pub job_title: String,
    pub total_found: usize,
    pub duplicates_skipped: usize,
    pub new_count: usize,
    pub sent: usize,
    pub failed: usize,
    /// Addresses that were actually delivered to.
    pub addresses: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/outreach/discover
///
/// Dry run: aggregates all sources and filters against the contact history,
/// without sending anything or writing any state.
pub async fn handle_discover(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<DiscoverResponse>, AppError> {
    let outcome = run_pipeline(&state, &request).await?;

    Ok(Json(DiscoverResponse {
        job_title: request.profile.job_title,
        total_found: outcome.total_found,
        duplicates_skipped: outcome.duplicates_skipped,
        new_count: outcome.new_count,
        addresses: outcome.novel,
    }))
}

/// POST /api/v1/outreach/send
///
/// Full pipeline: discover novel addresses, then compose, deliver, and log
/// one application email per address. Per-recipient delivery failures are
/// recorded and skipped, never fatal.
pub async fn handle_send(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<SendResponse>, AppError> {
    let profile = &request.profile;
    let outcome = run_pipeline(&state, &request).await?;

    if outcome.total_found == 0 {
        return Err(AppError::NotFound(
            "No recruiter addresses found for this search profile".to_string(),
        ));
    }

    if outcome.novel.is_empty() {
        return Ok(Json(SendResponse {
            message: "No new addresses: every candidate has been contacted before".to_string(),
            job_title: profile.job_title.clone(),
            total_found: outcome.total_found,
            duplicates_skipped: outcome.duplicates_skipped,
            new_count: 0,
            sent: 0,
            failed: 0,
            addresses: vec![],
        }));
    }

    let subject = compose_subject(profile);
    let body = compose_body(profile, &state.config.sender_identity());

    let mut sent_addresses = Vec::new();
    let mut failed = 0usize;

    for (i, address) in outcome.novel.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(SEND_SPACING_MS)).await;
        }

        let email = OutboundEmail {
            to: address,
            subject: &subject,
            body: &body,
        };
        let status = match state.mailer.send(&email).await {
            Ok(()) => {
                info!("sent application to {address}");
                "sent"
            }
            Err(e) => {
                warn!("failed to send to {address}: {e}");
                failed += 1;
                "failed"
            }
        };

        // Every attempt is logged; failed attempts also suppress future runs.
        record_contact(&state.db, &profile.job_title, address, status).await?;

        if status == "sent" {
            sent_addresses.push(address.clone());
        }
    }

    Ok(Json(SendResponse {
        message: "Outreach completed".to_string(),
        job_title: profile.job_title.clone(),
        total_found: outcome.total_found,
        duplicates_skipped: outcome.duplicates_skipped,
        new_count: outcome.new_count,
        sent: sent_addresses.len(),
        failed,
        addresses: sent_addresses,
    }))
}

/// Shared discover stage: validate, aggregate, dedup.
async fn run_pipeline(
    state: &AppState,
    request: &OutreachRequest,
) -> Result<DedupOutcome, AppError> {
    request.profile.validate().map_err(AppError::Validation)?;

    info!(
        job_title = %request.profile.job_title,
        max_emails = request.profile.max_emails,
        "processing outreach request"
    );

    let candidates = aggregate(&state.sources, &request.profile);

    filter_novel(
        state.history.as_ref(),
        &request.dedup_scope,
        &request.profile.job_title,
        candidates,
        request.profile.max_emails as usize,
        state.config.history_error_policy,
    )
    .await
}
