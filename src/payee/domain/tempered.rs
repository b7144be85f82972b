//! Events describing persisted values that failed validation on reload.

use super::{ParsePayeeStatusError, PayeeDomainError, PayeeId};
use std::fmt;
use thiserror::Error;

/// Payee field that can be restored from a tempered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperedField {
    /// Lifecycle status code.
    Status,
    /// Tax identifier.
    Document,
    /// PIX key type and value.
    PixKey,
}

impl TemperedField {
    /// Returns the field name used in log events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Document => "document",
            Self::PixKey => "pix_key",
        }
    }
}

impl fmt::Display for TemperedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a persisted value was considered tempered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemperedValueError {
    /// The status code is not a known status.
    #[error(transparent)]
    UnknownStatus(#[from] ParsePayeeStatusError),

    /// The value fails current validation rules.
    #[error(transparent)]
    Invalid(#[from] PayeeDomainError),
}

/// A persisted payee field that was passed through without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperedValue {
    payee_id: PayeeId,
    field: TemperedField,
    error: TemperedValueError,
}

impl TemperedValue {
    /// Creates a tempered-value event.
    #[must_use]
    pub fn new(
        payee_id: PayeeId,
        field: TemperedField,
        error: impl Into<TemperedValueError>,
    ) -> Self {
        Self {
            payee_id,
            field,
            error: error.into(),
        }
    }

    /// Returns the identifier of the affected payee.
    #[must_use]
    pub const fn payee_id(&self) -> &PayeeId {
        &self.payee_id
    }

    /// Returns the affected field.
    #[must_use]
    pub const fn field(&self) -> TemperedField {
        self.field
    }

    /// Returns the validation failure.
    #[must_use]
    pub const fn error(&self) -> &TemperedValueError {
        &self.error
    }
}
