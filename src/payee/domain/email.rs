//! Validated email address type.

use super::{PayeeDomainError, patterns::EMAIL_SHAPE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed email address in `local@domain` form.
///
/// Only lower-case letters, digits and `+_.-` are accepted on either side
/// of the `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a validated email address.
    ///
    /// Surrounding whitespace is removed before matching.
    ///
    /// # Errors
    ///
    /// Returns [`PayeeDomainError::InvalidEmail`] when the trimmed value does
    /// not match the address shape.
    pub fn new(raw: &str) -> Result<Self, PayeeDomainError> {
        let trimmed = raw.trim();

        if !EMAIL_SHAPE.is_match(trimmed) {
            return Err(PayeeDomainError::InvalidEmail);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a persisted address without re-validating it.
    pub(crate) const fn from_trusted(value: String) -> Self {
        Self(value)
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = PayeeDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
