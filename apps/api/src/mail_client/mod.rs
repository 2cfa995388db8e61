/// Mail client — the single point of entry for outbound email.
///
/// ARCHITECTURAL RULE: no other module may talk to the mail provider
/// directly. Delivery goes through the `Mailer` trait, carried in
/// `AppState` as `Arc<dyn Mailer>`, so tests swap in a recording stub.
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 3;
const SEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mail API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Mail API rejected the request after {retries} retries")]
    Exhausted { retries: u32 },
}

/// One outbound message, ready to deliver.
#[derive(Debug, Clone)]
pub struct OutboundEmail<'a> {
    pub to: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
}

/// The delivery capability. Implementations must not panic on a failed
/// send; the send loop records failures and keeps going.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail<'_>) -> Result<(), MailError>;
}

#[derive(Debug, Serialize)]
struct MailApiRequest<'a> {
    from_name: &'a str,
    from_email: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Default mailer: posts JSON to a configured HTTP mail API.
/// Retries 429 and 5xx responses with exponential backoff.
pub struct HttpMailer {
    client: Client,
    endpoint: String,
    api_key: String,
    sender_name: String,
    sender_email: String,
}

impl HttpMailer {
    pub fn new(endpoint: String, api_key: String, sender_name: String, sender_email: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(SEND_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
            api_key,
            sender_name,
            sender_email,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutboundEmail<'_>) -> Result<(), MailError> {
        let request_body = MailApiRequest {
            from_name: &self.sender_name,
            from_email: &self.sender_email,
            to: email.to,
            subject: email.subject,
            text: email.body,
        };

        let mut last_error: Option<MailError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "mail send attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(MailError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("mail API returned {}: {}", status, body);
                last_error = Some(MailError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(MailError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            debug!("delivered mail to {}", email.to);
            return Ok(());
        }

        Err(last_error.unwrap_or(MailError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = MailApiRequest {
            from_name: "Jordan Patel",
            from_email: "jordan@example.com",
            to: "recruiter@bigcorp.com",
            subject: "Application",
            text: "Hello",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["from_email"], "jordan@example.com");
        assert_eq!(json["to"], "recruiter@bigcorp.com");
        assert_eq!(json["text"], "Hello");
    }

    #[test]
    fn test_api_error_display_includes_status() {
        let err = MailError::Api {
            status: 422,
            message: "bad recipient".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("422"));
        assert!(rendered.contains("bad recipient"));
    }
}
