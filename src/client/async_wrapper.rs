//! Async wrapper around the synchronous MauticClient.
//!
//! This module provides an async interface to the synchronous client by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread
//! pool, preventing blocking of the async runtime.

use crate::client::{FormPayload, MauticClient};
use crate::error::{SubmitError, SubmitResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the Mautic form endpoint.
///
/// The session layer depends on this trait so tests can substitute a double
/// that never touches the network.
#[async_trait]
pub trait AsyncMauticClient: Send + Sync {
    /// Dispatch one lead, fire-and-forget.
    async fn submit_form(&self, payload: FormPayload) -> SubmitResult<()>;

    /// Fetch the form SDK script (used by the once-only bootstrap).
    async fn fetch_form_script(&self) -> SubmitResult<()>;
}

/// Async wrapper around the synchronous MauticClient.
#[derive(Clone)]
pub struct AsyncMauticClientImpl {
    client: Arc<MauticClient>,
}

impl AsyncMauticClientImpl {
    pub fn new(client: MauticClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncMauticClient for AsyncMauticClientImpl {
    async fn submit_form(&self, payload: FormPayload) -> SubmitResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.submit_form(&payload))
            .await
            .map_err(|e| SubmitError::Transport(format!("Task join error: {}", e)))?
    }

    async fn fetch_form_script(&self) -> SubmitResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.fetch_form_script())
            .await
            .map_err(|e| SubmitError::Transport(format!("Task join error: {}", e)))?
    }
}
