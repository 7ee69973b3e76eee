//! Domain validation errors.

use std::fmt;

/// Errors that can occur during lead field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    EmptyField(&'static str),

    /// The provided CPF does not strip down to exactly 11 digits.
    InvalidTaxId(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Required field is empty: {}", field),
            Self::InvalidTaxId(cpf) => write!(f, "Invalid CPF: {}", cpf),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
