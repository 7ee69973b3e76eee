//! HTTP client for the Mautic form endpoint.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client builds the
//! multipart form body Mautic expects and dispatches it fire-and-forget.

mod async_wrapper;
pub use async_wrapper::{AsyncMauticClient, AsyncMauticClientImpl};

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::Metrics;
use crate::models::ValidatedLead;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Multipart boundary for the form body. The payload is a handful of short
/// text fields under our control, so a fixed boundary is safe.
const FORM_BOUNDARY: &str = "----MauticLeadCaptureBoundary7MA4YWxk";

/// Path of the form SDK script on the Mautic instance.
const FORM_SCRIPT_PATH: &str = "/media/js/mautic-form.js";

/// The key/value payload posted to the Mautic form endpoint.
///
/// Field keys are fixed by the Mautic form definition. The tax id and phone
/// carry the canonical digit-only projections; the mask exists for display
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pub form_id: u32,
    pub form_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
}

impl FormPayload {
    /// Build the payload for a validated lead against a configured form.
    pub fn new(lead: &ValidatedLead, form_id: u32, form_name: &str) -> Self {
        Self {
            form_id,
            form_name: form_name.to_string(),
            full_name: lead.full_name.clone(),
            email: lead.email.as_str().to_string(),
            phone: lead.phone.digits(),
            tax_id: lead.tax_id.digits().to_string(),
        }
    }

    /// The fixed key/value pairs, in the order the landing page sent them.
    pub fn fields(&self) -> Vec<(String, String)> {
        vec![
            ("mauticform[nome]".to_string(), self.full_name.clone()),
            ("mauticform[email]".to_string(), self.email.clone()),
            ("mauticform[telefone]".to_string(), self.phone.clone()),
            ("mauticform[cpf]".to_string(), self.tax_id.clone()),
            ("mauticform[formId]".to_string(), self.form_id.to_string()),
            ("mauticform[return]".to_string(), String::new()),
            ("mauticform[formName]".to_string(), self.form_name.clone()),
            ("mauticform[submit]".to_string(), "1".to_string()),
        ]
    }

    /// Encode the payload as a multipart/form-data body.
    pub fn to_multipart_body(&self) -> String {
        let mut body = String::new();
        for (key, value) in self.fields() {
            body.push_str("--");
            body.push_str(FORM_BOUNDARY);
            body.push_str("\r\n");
            body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                key
            ));
            body.push_str(&value);
            body.push_str("\r\n");
        }
        body.push_str("--");
        body.push_str(FORM_BOUNDARY);
        body.push_str("--\r\n");
        body
    }

    /// The Content-Type header value for the multipart body.
    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={}", FORM_BOUNDARY)
    }
}

/// HTTP client for the Mautic marketing-automation instance.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct MauticClient {
    /// Base URL of the Mautic instance
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl MauticClient {
    /// Create a new MauticClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.mautic_base_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a MauticClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Dispatch one lead to the Mautic form endpoint.
    ///
    /// This is fire-and-forget: the landing page issued this request in
    /// `no-cors` mode, so the response status and body are deliberately not
    /// inspected. Any HTTP status the server answers with, including 4xx and
    /// 5xx, counts as a dispatched submission. Only a transport-level
    /// failure (DNS, refused connection, TLS, local timeout) is an error.
    /// "Accepted by the network" and "accepted by the server" cannot be told
    /// apart here; that asymmetry is an integration constraint of the
    /// endpoint, not something to fix in this client.
    pub fn submit_form(&self, payload: &FormPayload) -> SubmitResult<()> {
        let start = Instant::now();
        let url = self.build_url(&format!("form/submit?formId={}", payload.form_id));

        tracing::debug!("POST {} (form {})", url, payload.form_name);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", &FormPayload::content_type())
            .send_string(&payload.to_multipart_body());

        let duration = start.elapsed();
        self.metrics.record_http_request(duration);

        match result {
            Ok(_) => {
                tracing::debug!("POST {} - dispatched", url);
                self.metrics.record_lead_submitted();
                Ok(())
            }
            // The server answered; its verdict is unobservable by design.
            Err(ureq::Error::Status(code, _)) => {
                tracing::debug!("POST {} - dispatched (status {} ignored)", url, code);
                self.metrics.record_lead_submitted();
                Ok(())
            }
            Err(err) => {
                tracing::error!("POST {} - transport error: {}", url, err);
                self.metrics.record_http_error();
                Err(Self::map_transport_error(err))
            }
        }
    }

    /// Fetch the Mautic form SDK script.
    ///
    /// Used by the SDK loader for its once-only bootstrap. Unlike
    /// `submit_form`, an HTTP error status here IS a failure: a missing
    /// script means the instance is not serving forms.
    pub fn fetch_form_script(&self) -> SubmitResult<()> {
        let start = Instant::now();
        let url = self.build_url(FORM_SCRIPT_PATH);

        tracing::debug!("GET {}", url);

        let result = self.agent.get(&url).call();

        let duration = start.elapsed();
        self.metrics.record_http_request(duration);

        match result {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(code, _)) => {
                tracing::error!("GET {} - status {}", url, code);
                self.metrics.record_http_error();
                Err(SubmitError::Transport(format!(
                    "form script fetch returned status {}",
                    code
                )))
            }
            Err(err) => {
                tracing::error!("GET {} - transport error: {}", url, err);
                self.metrics.record_http_error();
                Err(Self::map_transport_error(err))
            }
        }
    }

    /// Map a ureq transport error to a SubmitError.
    fn map_transport_error(error: ureq::Error) -> SubmitError {
        match error {
            ureq::Error::Status(code, _) => {
                // Callers handle Status before reaching here.
                SubmitError::Transport(format!("unexpected status {}", code))
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SubmitError::ConnectionFailed
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SubmitError::Timeout
                } else {
                    SubmitError::Transport(transport.to_string())
                }
            }
        }
    }
}
