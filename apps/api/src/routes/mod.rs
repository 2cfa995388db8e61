pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::history::handlers as history_handlers;
use crate::outreach::handlers as outreach_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Outreach pipeline
        .route(
            "/api/v1/outreach/discover",
            post(outreach_handlers::handle_discover),
        )
        .route("/api/v1/outreach/send", post(outreach_handlers::handle_send))
        // Contact log
        .route(
            "/api/v1/contacts",
            get(history_handlers::handle_list_contacts),
        )
        .route(
            "/api/v1/contacts/addresses",
            get(history_handlers::handle_contacted_addresses),
        )
        .route(
            "/api/v1/contacts/addresses/:job_title",
            get(history_handlers::handle_contacted_addresses_for_job),
        )
        .route(
            "/api/v1/contacts/recent/:days",
            get(history_handlers::handle_recent_contacts),
        )
        .with_state(state)
}
