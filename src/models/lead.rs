//! Lead submission model.

use crate::domain::{EmailAddress, PhoneNumber, TaxId, ValidationError};
use serde::{Deserialize, Serialize};

/// Raw form field state for one lead, as typed by the user.
///
/// Tax id and phone hold the masked display value produced by the field
/// formatters; the canonical digit projections live on the value objects
/// obtained through [`LeadSubmission::validate`]. A snapshot of this struct
/// exists only for the lifetime of one form session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    /// Full name, free text.
    #[serde(default)]
    pub full_name: String,

    /// CPF tax id in masked display form (`NNN.NNN.NNN-NN`).
    #[serde(default)]
    pub tax_id: String,

    /// Email address as typed.
    #[serde(default)]
    pub email: String,

    /// Phone in masked display form (`(NN) NNNNN-NNNN` or `(NN) NNNN-NNNN`).
    #[serde(default)]
    pub phone: String,
}

/// A lead that has passed validation, carrying the typed value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLead {
    pub full_name: String,
    pub tax_id: TaxId,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl LeadSubmission {
    /// An empty submission, the state a fresh form session starts in.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
            && self.tax_id.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
    }

    /// Validate the submission, short-circuiting on the first failure.
    ///
    /// Check order is fixed: the required-field contract first (the form
    /// marks all four fields required), then the tax-id digit count, then
    /// the structural email check. Name and phone get no validation beyond
    /// being present.
    pub fn validate(&self) -> Result<ValidatedLead, ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("nome"));
        }
        if self.tax_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("cpf"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyField("email"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::EmptyField("telefone"));
        }

        let tax_id = TaxId::new(self.tax_id.clone())?;
        let email = EmailAddress::new(self.email.clone())?;
        let phone = PhoneNumber::new(self.phone.clone())?;

        Ok(ValidatedLead {
            full_name: self.full_name.clone(),
            tax_id,
            email,
            phone,
        })
    }

    /// Reset all fields to empty, the optimistic-success path.
    pub fn reset(&mut self) {
        *self = Self::empty();
    }
}
