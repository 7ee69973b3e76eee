//! Domain value objects and display masks.
//!
//! This module contains type-safe wrappers for the lead fields (CPF tax id,
//! email address, phone number) plus the pure mask functions the form applies
//! on every edit. Value objects validate at construction time; the masks
//! accept partial input because they run while the user is still typing.

pub mod email;
pub mod errors;
pub mod phone;
pub mod tax_id;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::{format_phone, PhoneNumber};
pub use tax_id::{format_tax_id, TaxId};
