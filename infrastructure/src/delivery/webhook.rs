//! Webhook delivery of completed briefs.
//!
//! Generic HTTP POST with an event header and an optional HMAC-SHA256
//! signature header, so receivers can verify the payload came from us.
//!
//! Headers included:
//! - `Content-Type: application/json`
//! - `X-Briefdesk-Event: brief.submitted`
//! - `X-Briefdesk-Signature: sha256=<HMAC of body using secret>` (when a
//!   secret is configured)

use std::time::Duration;

use async_trait::async_trait;
use brief_application::ports::brief_sink::{BriefSink, SinkError};
use brief_domain::BriefSubmission;
use tracing::debug;

/// Event type header attached to every delivery.
pub const EVENT_HEADER: &str = "X-Briefdesk-Event";
/// Signature header attached when a signing secret is configured.
pub const SIGNATURE_HEADER: &str = "X-Briefdesk-Signature";
/// The single event type this sink emits.
pub const EVENT_BRIEF_SUBMITTED: &str = "brief.submitted";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP POST sink for completed briefs.
pub struct WebhookBriefSink {
    client: reqwest::Client,
    url: String,
    secret: Option<String>,
    timeout: Duration,
}

impl WebhookBriefSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            secret: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sign request bodies with this secret. Empty secrets are ignored.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if !secret.is_empty() {
            self.secret = Some(secret);
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Compute HMAC-SHA256 of the body using the secret, hex-encoded.
    pub fn signature(secret: &str, body: &str) -> Option<String> {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).ok()?;
        mac.update(body.as_bytes());
        let digest = mac.finalize().into_bytes();
        Some(digest.iter().map(|b| format!("{b:02x}")).collect())
    }
}

#[async_trait]
impl BriefSink for WebhookBriefSink {
    async fn deliver(&self, submission: &BriefSubmission) -> Result<(), SinkError> {
        let body = serde_json::to_string(submission)
            .map_err(|e| SinkError::Transport(format!("payload serialization: {e}")))?;

        let mut request = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .header(EVENT_HEADER, EVENT_BRIEF_SUBMITTED);

        if let Some(secret) = &self.secret
            && let Some(signature) = Self::signature(secret, &body)
        {
            request = request.header(SIGNATURE_HEADER, format!("sha256={signature}"));
        }

        debug!(url = %self.url, bytes = body.len(), "Posting brief");
        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected(format!("HTTP {status}: {body}")));
        }

        Ok(())
    }
}
