//! Validated person or legal name type.

use super::{InvalidNameError, PayeeDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_WORDS: usize = 2;
const MIN_FIRST_NAME_LENGTH: usize = 2;

/// Whitespace-normalized person or company name.
///
/// A name has at least two words and its first word has at least two
/// characters. Runs of whitespace collapse to a single space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Creates a validated name.
    ///
    /// # Errors
    ///
    /// Returns [`PayeeDomainError::InvalidName`] with
    /// [`InvalidNameError::Empty`] when no words remain,
    /// [`InvalidNameError::LessThanTwoWords`] for a single word, or
    /// [`InvalidNameError::FirstNameTooShort`] when the first word has fewer
    /// than two characters.
    pub fn new(raw: &str) -> Result<Self, PayeeDomainError> {
        let words: Vec<&str> = raw.split_whitespace().collect();

        let Some(first) = words.first() else {
            return Err(InvalidNameError::Empty.into());
        };

        if words.len() < MIN_WORDS {
            return Err(InvalidNameError::LessThanTwoWords.into());
        }

        if first.chars().count() < MIN_FIRST_NAME_LENGTH {
            return Err(InvalidNameError::FirstNameTooShort.into());
        }

        Ok(Self(words.join(" ")))
    }

    /// Wraps a persisted name without re-validating it.
    pub(crate) const fn from_trusted(value: String) -> Self {
        Self(value)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = PayeeDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}
