//! TaxId (CPF) value object and display mask.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Strip all non-digit characters from raw input.
pub(crate) fn strip_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply the CPF display mask to raw input.
///
/// Strips everything that is not a digit. A complete CPF (exactly 11 digits)
/// is rendered as `DDD.DDD.DDD-DD`; any other digit count is returned as the
/// bare digit string so that partial input stays unpunctuated while the user
/// is still typing.
///
/// # Example
///
/// ```
/// use mautic_lead_capture::domain::format_tax_id;
///
/// assert_eq!(format_tax_id("12345678901"), "123.456.789-01");
/// assert_eq!(format_tax_id("123456"), "123456");
/// ```
pub fn format_tax_id(raw: &str) -> String {
    let digits = strip_digits(raw);
    if digits.len() != 11 {
        return digits;
    }

    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// A type-safe wrapper for a Brazilian CPF tax id.
///
/// Constructible only from input whose digit projection has exactly 11
/// digits; mask punctuation in the input is ignored. The digit-only
/// projection is the canonical value; the masked rendering is derived from
/// it for display.
///
/// # Example
///
/// ```
/// use mautic_lead_capture::domain::TaxId;
///
/// let cpf = TaxId::new("123.456.789-01").unwrap();
/// assert_eq!(cpf.digits(), "12345678901");
/// assert_eq!(cpf.masked(), "123.456.789-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl TaxId {
    /// Create a new TaxId, validating the digit count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTaxId` if the input does not contain
    /// exactly 11 digits once mask characters are stripped.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let digits = strip_digits(&raw);

        if digits.len() != 11 {
            return Err(ValidationError::InvalidTaxId(raw));
        }

        Ok(Self(digits))
    }

    /// The canonical digit-only value.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The masked display rendering `DDD.DDD.DDD-DD`.
    pub fn masked(&self) -> String {
        format_tax_id(&self.0)
    }

    /// Convert into the underlying digit string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as the canonical digit string
impl Serialize for TaxId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for TaxId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TaxId::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - masked form, matching what the form shows
impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}
