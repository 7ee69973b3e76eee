//! Lead-capture flow for the sweepstakes landing page.
//!
//! This library implements the page's one piece of real behavior: collect a
//! lead (name, CPF, email, phone), apply display masks while the user types,
//! validate two fields, and post the lead once to a Mautic form endpoint,
//! mapping the outcome to a user-facing notification.
//!
//! The submission is fire-and-forget: the endpoint's response is
//! unobservable (the browser original posted in `no-cors` mode), so success
//! means "dispatched without a local transport failure", nothing stronger.
//!
//! # Architecture
//!
//! - **domain**: value objects (CPF, email, phone) and the display masks
//! - **models**: the `LeadSubmission` field state and its validation
//! - **client**: HTTP client for the Mautic form endpoint
//! - **flow**: one form session, its state machine, and the submit handler
//! - **sdk**: once-only bootstrap of the Mautic form script
//! - **notify**: outcome-to-notification mapping
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod flow;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod sdk;

pub use client::{AsyncMauticClient, AsyncMauticClientImpl, FormPayload, MauticClient};
pub use config::Config;
pub use domain::{format_phone, format_tax_id, EmailAddress, PhoneNumber, TaxId, ValidationError};
pub use error::{ConfigError, SubmitError};
pub use flow::{LeadCaptureSession, SessionState, SubmitOutcome};
pub use metrics::Metrics;
pub use models::{LeadSubmission, ValidatedLead};
pub use notify::{Notification, Notifier, Severity, TerminalNotifier};
pub use sdk::{SdkLoader, SdkState};
