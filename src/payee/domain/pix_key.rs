//! PIX instant-payment routing keys.

use super::{
    Cnpj, Cpf, Email, PayeeDomainError,
    digits::keep_only_digits,
    patterns::{CHAVE_ALEATORIA_SHAPE, TELEFONE_SHAPE},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Country code prepended to national mobile numbers.
const BRAZIL_COUNTRY_CODE: &str = "55";

/// Digit count of a mobile number without country code (`DD9XXXXXXXX`).
const NATIONAL_NUMBER_LENGTH: usize = 11;

/// Kind of PIX key, persisted as its upper-case tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PixKeyType {
    /// Individual taxpayer number.
    Cpf,
    /// Company taxpayer number.
    Cnpj,
    /// Mobile phone number.
    Telefone,
    /// Email address.
    Email,
    /// Random UUID-shaped key.
    ChaveAleatoria,
}

impl PixKeyType {
    /// Returns the canonical storage tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Telefone => "TELEFONE",
            Self::Email => "EMAIL",
            Self::ChaveAleatoria => "CHAVE_ALEATORIA",
        }
    }
}

impl fmt::Display for PixKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PixKeyType {
    type Error = PayeeDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "CPF" => Ok(Self::Cpf),
            "CNPJ" => Ok(Self::Cnpj),
            "TELEFONE" => Ok(Self::Telefone),
            "EMAIL" => Ok(Self::Email),
            "CHAVE_ALEATORIA" => Ok(Self::ChaveAleatoria),
            _ => Err(PayeeDomainError::InvalidPixKeyType(value.to_owned())),
        }
    }
}

/// Mobile phone number including the `55` country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Telefone(String);

impl Telefone {
    /// Creates a validated phone key.
    ///
    /// Accepts `DD9XXXXXXXX` optionally prefixed by `55` or `+55`. Numbers
    /// given without a country code are stored with `55` prepended.
    ///
    /// # Errors
    ///
    /// Returns [`PayeeDomainError::InvalidTelefone`] when the value is not
    /// shaped like a Brazilian mobile number.
    pub fn new(raw: &str) -> Result<Self, PayeeDomainError> {
        if !TELEFONE_SHAPE.is_match(raw) {
            return Err(PayeeDomainError::InvalidTelefone);
        }

        let digits = keep_only_digits(raw);
        if digits.len() == NATIONAL_NUMBER_LENGTH {
            return Ok(Self(format!("{BRAZIL_COUNTRY_CODE}{digits}")));
        }

        Ok(Self(digits))
    }

    /// Returns the digits, country code included.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Telefone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

/// Random key in lower-case 8-4-4-4-12 hexadecimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChaveAleatoria(String);

impl ChaveAleatoria {
    /// Creates a validated random key, normalizing it to lower case.
    ///
    /// # Errors
    ///
    /// Returns [`PayeeDomainError::InvalidChaveAleatoria`] when the value is
    /// not shaped like a UUID.
    pub fn new(raw: &str) -> Result<Self, PayeeDomainError> {
        if !CHAVE_ALEATORIA_SHAPE.is_match(raw) {
            return Err(PayeeDomainError::InvalidChaveAleatoria);
        }

        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Returns the lower-case key.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChaveAleatoria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Routing key addressing a payee's instant-payment account.
///
/// [`PixKey::value`] is the canonical raw form that gets persisted.
/// `Display` adds the leading `+` for phone keys and the punctuation mask for
/// CPF and CNPJ keys; email and random keys display as their value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PixKey {
    /// Key addressed by an individual taxpayer number.
    Cpf(Cpf),
    /// Key addressed by a company taxpayer number.
    Cnpj(Cnpj),
    /// Key addressed by a mobile phone number.
    Telefone(Telefone),
    /// Key addressed by an email address.
    Email(Email),
    /// Random key.
    ChaveAleatoria(ChaveAleatoria),
}

impl PixKey {
    /// Creates a key from its persisted type tag and raw value.
    ///
    /// # Errors
    ///
    /// Returns [`PayeeDomainError::InvalidPixKeyType`] for an unknown tag,
    /// otherwise the error of the validator selected by the tag.
    pub fn new(key_type: &str, raw: &str) -> Result<Self, PayeeDomainError> {
        Self::parse(PixKeyType::try_from(key_type)?, raw)
    }

    /// Creates a key of the given type.
    ///
    /// # Errors
    ///
    /// Returns the error of the validator for `key_type`:
    /// [`PayeeDomainError::InvalidCpf`], [`PayeeDomainError::InvalidCnpj`],
    /// [`PayeeDomainError::InvalidTelefone`],
    /// [`PayeeDomainError::InvalidEmail`] or
    /// [`PayeeDomainError::InvalidChaveAleatoria`].
    pub fn parse(key_type: PixKeyType, raw: &str) -> Result<Self, PayeeDomainError> {
        match key_type {
            PixKeyType::Cpf => Cpf::new(raw).map(Self::Cpf),
            PixKeyType::Cnpj => Cnpj::new(raw).map(Self::Cnpj),
            PixKeyType::Telefone => Telefone::new(raw).map(Self::Telefone),
            PixKeyType::Email => Email::new(raw).map(Self::Email),
            PixKeyType::ChaveAleatoria => ChaveAleatoria::new(raw).map(Self::ChaveAleatoria),
        }
    }

    /// Returns the key type.
    #[must_use]
    pub const fn key_type(&self) -> PixKeyType {
        match self {
            Self::Cpf(_) => PixKeyType::Cpf,
            Self::Cnpj(_) => PixKeyType::Cnpj,
            Self::Telefone(_) => PixKeyType::Telefone,
            Self::Email(_) => PixKeyType::Email,
            Self::ChaveAleatoria(_) => PixKeyType::ChaveAleatoria,
        }
    }

    /// Returns the canonical raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.value(),
            Self::Cnpj(cnpj) => cnpj.value(),
            Self::Telefone(telefone) => telefone.value(),
            Self::Email(email) => email.as_str(),
            Self::ChaveAleatoria(key) => key.value(),
        }
    }
}

impl fmt::Display for PixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf(cpf) => fmt::Display::fmt(cpf, f),
            Self::Cnpj(cnpj) => fmt::Display::fmt(cnpj, f),
            Self::Telefone(telefone) => fmt::Display::fmt(telefone, f),
            Self::Email(email) => fmt::Display::fmt(email, f),
            Self::ChaveAleatoria(key) => fmt::Display::fmt(key, f),
        }
    }
}
