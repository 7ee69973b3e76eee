//! The lead-capture flow: one form session and its submit handler.

pub mod session;

pub use session::{LeadCaptureSession, SessionState, SubmitOutcome};
