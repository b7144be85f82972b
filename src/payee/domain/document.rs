//! Brazilian tax identifiers: CPF for individuals and CNPJ for companies.

use super::{
    PayeeDomainError, checksum,
    digits::{apply_mask, keep_only_digits, to_digits},
    patterns::{CNPJ_SHAPE, CPF_SHAPE},
};
use serde::{Deserialize, Serialize};
use std::fmt;

const CPF_MASK: &str = "###.###.###-##";
const CNPJ_MASK: &str = "##.###.###/####-##";

/// Validated CPF number holding its 11 raw digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Creates a validated CPF.
    ///
    /// The input must look like `ddd.ddd.ddd-dd`, with any of the
    /// separators omitted. Punctuation is stripped before the check digits
    /// are verified.
    ///
    /// # Errors
    ///
    /// Returns [`PayeeDomainError::InvalidCpf`] when the shape, length or
    /// check digits are wrong, or when all eleven digits are identical.
    pub fn new(raw: &str) -> Result<Self, PayeeDomainError> {
        if !CPF_SHAPE.is_match(raw) {
            return Err(PayeeDomainError::InvalidCpf);
        }

        let value = keep_only_digits(raw);
        if !checksum::is_valid_cpf(&to_digits(&value)) {
            return Err(PayeeDomainError::InvalidCpf);
        }

        Ok(Self(value))
    }

    /// Returns the unformatted digits.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&apply_mask(&self.0, CPF_MASK))
    }
}

impl TryFrom<String> for Cpf {
    type Error = PayeeDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

/// Validated CNPJ number holding its 14 raw digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Creates a validated CNPJ.
    ///
    /// The input must look like `dd.ddd.ddd/dddd-dd`, with any of the
    /// separators omitted.
    ///
    /// # Errors
    ///
    /// Returns [`PayeeDomainError::InvalidCnpj`] when the shape, length or
    /// check digits are wrong.
    pub fn new(raw: &str) -> Result<Self, PayeeDomainError> {
        if !CNPJ_SHAPE.is_match(raw) {
            return Err(PayeeDomainError::InvalidCnpj);
        }

        let value = keep_only_digits(raw);
        if !checksum::is_valid_cnpj(&to_digits(&value)) {
            return Err(PayeeDomainError::InvalidCnpj);
        }

        Ok(Self(value))
    }

    /// Returns the unformatted digits.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&apply_mask(&self.0, CNPJ_MASK))
    }
}

impl TryFrom<String> for Cnpj {
    type Error = PayeeDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

/// Government tax identifier of a payee.
///
/// `Display` renders the canonical punctuation mask, while
/// [`Document::value`] returns the raw digits that are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Document {
    /// Individual taxpayer number.
    Cpf(Cpf),
    /// Company taxpayer number.
    Cnpj(Cnpj),
}

impl Document {
    /// Parses a document, trying CPF first and then CNPJ.
    ///
    /// # Errors
    ///
    /// Returns [`PayeeDomainError::InvalidDocument`] carrying the raw input
    /// when neither kind accepts it.
    pub fn new(raw: &str) -> Result<Self, PayeeDomainError> {
        if let Ok(cpf) = Cpf::new(raw) {
            return Ok(Self::Cpf(cpf));
        }
        if let Ok(cnpj) = Cnpj::new(raw) {
            return Ok(Self::Cnpj(cnpj));
        }
        Err(PayeeDomainError::InvalidDocument(raw.to_owned()))
    }

    /// Returns the unformatted digits.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.value(),
            Self::Cnpj(cnpj) => cnpj.value(),
        }
    }

    /// Returns the document kind as an upper-case label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cpf(_) => "CPF",
            Self::Cnpj(_) => "CNPJ",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf(cpf) => fmt::Display::fmt(cpf, f),
            Self::Cnpj(cnpj) => fmt::Display::fmt(cnpj, f),
        }
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}
