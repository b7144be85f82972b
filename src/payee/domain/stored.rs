//! Payee fields as held by the aggregate.
//!
//! A field built on the write path is always `Validated`. A field reloaded
//! from storage is `Validated` when the persisted value still satisfies the
//! current rules and `Passthrough` otherwise, in which case the raw value is
//! reported unchanged by the same accessors.

use super::{Document, PayeeStatus, PixKey};
use std::fmt;

/// Tax identifier of a payee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredDocument {
    /// Document that passed validation.
    Validated(Document),
    /// Persisted value that failed validation, kept verbatim.
    Passthrough(String),
}

impl StoredDocument {
    /// Returns the unformatted value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Validated(document) => document.value(),
            Self::Passthrough(raw) => raw,
        }
    }

    /// Returns the validated document, if any.
    #[must_use]
    pub const fn document(&self) -> Option<&Document> {
        match self {
            Self::Validated(document) => Some(document),
            Self::Passthrough(_) => None,
        }
    }

    /// Returns `true` when the persisted value failed validation.
    #[must_use]
    pub const fn is_tempered(&self) -> bool {
        matches!(self, Self::Passthrough(_))
    }
}

impl fmt::Display for StoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validated(document) => fmt::Display::fmt(document, f),
            Self::Passthrough(raw) => f.write_str(raw),
        }
    }
}

impl From<Document> for StoredDocument {
    fn from(document: Document) -> Self {
        Self::Validated(document)
    }
}

/// PIX key of a payee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredPixKey {
    /// Key that passed validation.
    Validated(PixKey),
    /// Persisted type tag and value that failed validation, kept verbatim.
    Passthrough {
        /// Raw type tag.
        key_type: String,
        /// Raw key value.
        value: String,
    },
}

impl StoredPixKey {
    /// Returns the type tag.
    #[must_use]
    pub fn key_type(&self) -> &str {
        match self {
            Self::Validated(key) => key.key_type().as_str(),
            Self::Passthrough { key_type, .. } => key_type,
        }
    }

    /// Returns the canonical raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Validated(key) => key.value(),
            Self::Passthrough { value, .. } => value,
        }
    }

    /// Returns the validated key, if any.
    #[must_use]
    pub const fn pix_key(&self) -> Option<&PixKey> {
        match self {
            Self::Validated(key) => Some(key),
            Self::Passthrough { .. } => None,
        }
    }

    /// Returns `true` when the persisted value failed validation.
    #[must_use]
    pub const fn is_tempered(&self) -> bool {
        matches!(self, Self::Passthrough { .. })
    }
}

impl fmt::Display for StoredPixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validated(key) => fmt::Display::fmt(key, f),
            Self::Passthrough { value, .. } => f.write_str(value),
        }
    }
}

impl From<PixKey> for StoredPixKey {
    fn from(key: PixKey) -> Self {
        Self::Validated(key)
    }
}

/// Lifecycle status of a payee.
///
/// An unknown persisted code is kept as both the code and the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredStatus {
    /// One of the known statuses.
    Known(PayeeStatus),
    /// Persisted code that matches no known status.
    Passthrough(String),
}

impl StoredStatus {
    /// Returns the storage code.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Passthrough(raw) => raw,
        }
    }

    /// Returns the user-facing label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Known(status) => status.label(),
            Self::Passthrough(raw) => raw,
        }
    }

    /// Returns the known status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<PayeeStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Passthrough(_) => None,
        }
    }

    /// Returns `true` only for a known [`PayeeStatus::Draft`].
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        matches!(self, Self::Known(PayeeStatus::Draft))
    }

    /// Returns `true` when the persisted code is unknown.
    #[must_use]
    pub const fn is_tempered(&self) -> bool {
        matches!(self, Self::Passthrough(_))
    }
}

impl fmt::Display for StoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl From<PayeeStatus> for StoredStatus {
    fn from(status: PayeeStatus) -> Self {
        Self::Known(status)
    }
}

impl PartialEq<PayeeStatus> for StoredStatus {
    fn eq(&self, other: &PayeeStatus) -> bool {
        self.status() == Some(*other)
    }
}
