//! One lead-capture form session.
//!
//! The session owns the field state for the lifetime of one form, applies
//! the display masks on every edit, and runs the submit handler: validate,
//! dispatch once, map the result, reset on the optimistic-success path.

use crate::client::{AsyncMauticClient, FormPayload};
use crate::domain::{format_phone, format_tax_id, ValidationError};
use crate::error::SubmitError;
use crate::models::LeadSubmission;
use std::sync::Arc;

/// Session lifecycle state.
///
/// `Submitting` acts as an in-flight guard: a second submit while one
/// request is pending is refused instead of producing a duplicate lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting edits.
    Editing,

    /// A request is in flight; resubmission is disabled.
    Submitting,
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request was dispatched without a local transport failure.
    ///
    /// This is optimistic: the endpoint's response is unobservable, so a
    /// server-side rejection still lands here. Field state has been reset.
    Submitted,

    /// Validation failed; no request was issued and field state is intact.
    Rejected(ValidationError),

    /// The request failed locally (DNS, connection, timeout); field state
    /// is intact so the user can retry.
    Failed(String),

    /// A previous submission is still in flight; nothing was dispatched.
    InFlight,
}

/// A single form session: field state plus the submit handler.
pub struct LeadCaptureSession {
    client: Arc<dyn AsyncMauticClient>,
    form_id: u32,
    form_name: String,
    submission: LeadSubmission,
    state: SessionState,
}

impl LeadCaptureSession {
    /// Create a fresh session with empty fields.
    pub fn new(client: Arc<dyn AsyncMauticClient>, form_id: u32, form_name: &str) -> Self {
        Self {
            client,
            form_id,
            form_name: form_name.to_string(),
            submission: LeadSubmission::empty(),
            state: SessionState::Editing,
        }
    }

    /// Current field state snapshot.
    pub fn submission(&self) -> &LeadSubmission {
        &self.submission
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Store the full name as typed.
    pub fn set_full_name(&mut self, raw: &str) {
        self.submission.full_name = raw.to_string();
    }

    /// Store the tax id, applying the CPF mask to the raw input.
    pub fn set_tax_id(&mut self, raw: &str) {
        self.submission.tax_id = format_tax_id(raw);
    }

    /// Store the email as typed.
    pub fn set_email(&mut self, raw: &str) {
        self.submission.email = raw.to_string();
    }

    /// Store the phone, applying the phone mask to the raw input.
    pub fn set_phone(&mut self, raw: &str) {
        self.submission.phone = format_phone(raw);
    }

    /// Run the submit handler.
    ///
    /// Validates the current field state, dispatches exactly one request on
    /// success, and maps the result. On `Submitted` all fields are reset to
    /// empty; on `Rejected` and `Failed` the input is preserved so the user
    /// can correct and resubmit. The session always returns to `Editing`.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state == SessionState::Submitting {
            tracing::warn!("submit refused: a submission is already in flight");
            return SubmitOutcome::InFlight;
        }

        let lead = match self.submission.validate() {
            Ok(lead) => lead,
            Err(err) => {
                tracing::debug!("submission rejected: {}", err);
                return SubmitOutcome::Rejected(err);
            }
        };

        let payload = FormPayload::new(&lead, self.form_id, &self.form_name);

        self.state = SessionState::Submitting;
        let result = self.client.submit_form(payload).await;
        self.state = SessionState::Editing;

        match result {
            Ok(()) => {
                self.submission.reset();
                SubmitOutcome::Submitted
            }
            Err(err) => SubmitOutcome::Failed(self.describe_failure(&err)),
        }
    }

    fn describe_failure(&self, err: &SubmitError) -> String {
        tracing::error!("lead submission failed: {}", err);
        err.to_string()
    }
}
