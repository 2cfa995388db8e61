//! Axum route handlers for contact-log queries.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::history::store::list_contacts;
use crate::models::contact::ContactLogRow;
use crate::state::AppState;

const MAX_RECENCY_DAYS: u32 = 365;

#[derive(Debug, Serialize)]
pub struct AddressListResponse {
    pub total: usize,
    pub addresses: Vec<String>,
}

fn sorted(addresses: std::collections::HashSet<String>) -> AddressListResponse {
    let mut addresses: Vec<String> = addresses.into_iter().collect();
    addresses.sort();
    AddressListResponse {
        total: addresses.len(),
        addresses,
    }
}

/// GET /api/v1/contacts
///
/// The full contact log, newest first.
pub async fn handle_list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactLogRow>>, AppError> {
    let rows = list_contacts(&state.db).await.map_err(AppError::Internal)?;
    Ok(Json(rows))
}

/// GET /api/v1/contacts/addresses
///
/// Every distinct address ever attempted, sorted.
pub async fn handle_contacted_addresses(
    State(state): State<AppState>,
) -> Result<Json<AddressListResponse>, AppError> {
    let addresses = state
        .history
        .all_contacted()
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(sorted(addresses)))
}

/// GET /api/v1/contacts/addresses/:job_title
pub async fn handle_contacted_addresses_for_job(
    State(state): State<AppState>,
    Path(job_title): Path<String>,
) -> Result<Json<AddressListResponse>, AppError> {
    let addresses = state
        .history
        .contacted_for_job(&job_title)
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(sorted(addresses)))
}

/// GET /api/v1/contacts/recent/:days
pub async fn handle_recent_contacts(
    State(state): State<AppState>,
    Path(days): Path<u32>,
) -> Result<Json<AddressListResponse>, AppError> {
    if days == 0 || days > MAX_RECENCY_DAYS {
        return Err(AppError::Validation(format!(
            "days must be between 1 and {MAX_RECENCY_DAYS}"
        )));
    }
    let addresses = state
        .history
        .contacted_within_days(days)
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(sorted(addresses)))
}
