//! Payee lifecycle status.

use super::ParsePayeeStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a payee.
///
/// Payees are created as [`PayeeStatus::Draft`]. The move to
/// [`PayeeStatus::Valid`] is driven by an external validation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayeeStatus {
    /// Every detail may still be edited.
    Draft,
    /// Only the email may be edited.
    Valid,
}

impl PayeeStatus {
    /// Returns the canonical storage code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Valid => "VALID",
        }
    }

    /// Returns the user-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Rascunho",
            Self::Valid => "Validado",
        }
    }
}

impl fmt::Display for PayeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PayeeStatus {
    type Error = ParsePayeeStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "DRAFT" => Ok(Self::Draft),
            "VALID" => Ok(Self::Valid),
            _ => Err(ParsePayeeStatusError(value.to_owned())),
        }
    }
}
