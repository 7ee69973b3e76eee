//! PhoneNumber value object and display mask.

use super::errors::ValidationError;
use super::tax_id::strip_digits;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Apply the Brazilian phone display mask to raw input.
///
/// Strips everything that is not a digit. Exactly 11 digits (mobile with
/// area code) renders as `(DD) DDDDD-DDDD`; everything else falls through to
/// the landline shape `(DD) DDDD-DDDD`.
///
/// The fallback branch assumes a two-digit area code plus an eight-digit
/// local number. Partial input shorter than ten digits does not fill that
/// pattern, so mid-typing values come back as bare digits until enough are
/// present. This mirrors the shipped form behavior; do not tighten it
/// without confirming the intended mid-typing rendering.
///
/// # Example
///
/// ```
/// use mautic_lead_capture::domain::format_phone;
///
/// assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
/// assert_eq!(format_phone("1199998888"), "(11) 9999-8888");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits = strip_digits(raw);

    if digits.len() == 11 {
        return format!(
            "({}) {}-{}",
            &digits[0..2],
            &digits[2..7],
            &digits[7..11]
        );
    }

    // 10-digit shape for every other count; digits beyond the tenth are
    // carried after the local number, matching the shipped form.
    if digits.len() >= 10 {
        return format!(
            "({}) {}-{}{}",
            &digits[0..2],
            &digits[2..6],
            &digits[6..10],
            &digits[10..]
        );
    }

    digits
}

/// A type-safe wrapper for phone numbers.
///
/// Validation is loose by contract: the form marks the field required but
/// imposes no digit-count minimum beyond what the mask produces. The
/// wrapper only demands at least one digit and phone punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain at least one digit
    /// - Can contain: digits, spaces, hyphens, parentheses, plus sign, periods
    /// - Must not be empty
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        if phone.is_empty() {
            return false;
        }

        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }

        phone.chars().all(|c| {
            c.is_ascii_digit()
                || c == ' '
                || c == '-'
                || c == '('
                || c == ')'
                || c == '+'
                || c == '.'
        })
    }

    /// Get the phone number as stored (masked display form).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical digit-only projection.
    pub fn digits(&self) -> String {
        strip_digits(&self.0)
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mobile_eleven_digits() {
        assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
    }

    #[test]
    fn test_format_landline_ten_digits() {
        assert_eq!(format_phone("1199998888"), "(11) 9999-8888");
    }

    #[test]
    fn test_format_strips_punctuation() {
        assert_eq!(format_phone("(11) 99999-8888"), "(11) 99999-8888");
        assert_eq!(format_phone("+55 11 9999-8888"), "(55) 1199-998888");
    }

    #[test]
    fn test_format_short_input_stays_bare() {
        // The fallback shape needs ten digits; fewer pass through unmasked.
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("119"), "119");
        assert_eq!(format_phone("119999988"), "119999988");
    }

    #[test]
    fn test_format_overlong_carries_extra_digits() {
        assert_eq!(format_phone("119999988887"), "(11) 9999-988887");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("no digits").is_err());
        assert!(PhoneNumber::new("(11) 99999-8888").is_ok());
        assert!(PhoneNumber::new("+55 11 99999-8888").is_ok());
        assert!(PhoneNumber::new("invalid@phone").is_err());
    }

    #[test]
    fn test_phone_digits() {
        let phone = PhoneNumber::new("(11) 99999-8888").unwrap();
        assert_eq!(phone.digits(), "11999998888");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("(11) 99999-8888").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"(11) 99999-8888\"");
    }
}
