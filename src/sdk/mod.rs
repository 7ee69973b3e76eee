//! Once-only bootstrap of the Mautic form SDK.
//!
//! The landing page loaded the form script behind a process-wide boolean
//! flag. Here that guard is an explicit state object owned by the
//! composition layer and injected where needed, instead of ambient global
//! state.

use crate::client::AsyncMauticClient;
use crate::error::SubmitResult;
use std::sync::Arc;

/// Bootstrap state of the form SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkState {
    /// The script has not been fetched.
    NotLoaded,

    /// A fetch is in progress.
    Loading,

    /// The script was fetched; Ready is sticky for this loader's lifetime.
    Ready,
}

/// Once-only loader for the Mautic form SDK.
///
/// Holds the two configuration values the script is handed on load: the
/// instance domain and the localized submitting message.
pub struct SdkLoader {
    client: Arc<dyn AsyncMauticClient>,
    state: SdkState,
    domain: String,
    submitting_message: String,
}

impl SdkLoader {
    pub fn new(
        client: Arc<dyn AsyncMauticClient>,
        domain: impl Into<String>,
        submitting_message: impl Into<String>,
    ) -> Self {
        Self {
            client,
            state: SdkState::NotLoaded,
            domain: domain.into(),
            submitting_message: submitting_message.into(),
        }
    }

    /// Current bootstrap state.
    pub fn state(&self) -> SdkState {
        self.state
    }

    /// The Mautic instance domain handed to the script.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The localized in-flight message handed to the script.
    pub fn submitting_message(&self) -> &str {
        &self.submitting_message
    }

    /// Load the SDK if it has not been loaded yet.
    ///
    /// Idempotent: at most one script fetch per Ready transition. Once
    /// Ready, later calls return immediately. A failed fetch drops back to
    /// NotLoaded so a later call can retry.
    pub async fn ensure_loaded(&mut self) -> SubmitResult<SdkState> {
        if self.state == SdkState::Ready {
            return Ok(SdkState::Ready);
        }

        self.state = SdkState::Loading;
        tracing::debug!("loading form SDK from {}", self.domain);

        match self.client.fetch_form_script().await {
            Ok(()) => {
                self.state = SdkState::Ready;
                tracing::info!("form SDK ready");
                Ok(SdkState::Ready)
            }
            Err(err) => {
                self.state = SdkState::NotLoaded;
                tracing::error!("form SDK load failed: {}", err);
                Err(err)
            }
        }
    }
}
