//! Data models for the lead-capture flow.

pub mod lead;

pub use lead::{LeadSubmission, ValidatedLead};
