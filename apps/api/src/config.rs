use anyhow::{Context, Result};

use crate::outreach::composer::SenderIdentity;
use crate::outreach::dedup::HistoryErrorPolicy;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub sender_name: String,
    pub sender_email: String,
    pub resume_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    /// What happens when the contact history cannot be read:
    /// propagate (default) or assume_empty.
    pub history_error_policy: HistoryErrorPolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let history_error_policy = match std::env::var("ON_HISTORY_ERROR") {
            Ok(value) => HistoryErrorPolicy::parse(&value).with_context(|| {
                format!("ON_HISTORY_ERROR must be 'propagate' or 'assume_empty', got '{value}'")
            })?,
            Err(_) => HistoryErrorPolicy::Propagate,
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            mail_api_url: require_env("MAIL_API_URL")?,
            mail_api_key: require_env("MAIL_API_KEY")?,
            sender_name: require_env("SENDER_NAME")?,
            sender_email: require_env("SENDER_EMAIL")?,
            resume_url: std::env::var("RESUME_URL").ok(),
            github_url: std::env::var("GITHUB_URL").ok(),
            linkedin_url: std::env::var("LINKEDIN_URL").ok(),
            history_error_policy,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The applicant identity stamped into every outgoing email.
    pub fn sender_identity(&self) -> SenderIdentity {
        SenderIdentity {
            name: self.sender_name.clone(),
            email: self.sender_email.clone(),
            resume_url: self.resume_url.clone(),
            github_url: self.github_url.clone(),
            linkedin_url: self.linkedin_url.clone(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
