//! Error types for payee domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing payee domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayeeDomainError {
    /// The value is neither a valid CPF nor a valid CNPJ.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// The value fails the CPF shape or checksum rules.
    #[error("invalid cpf number")]
    InvalidCpf,

    /// The value fails the CNPJ shape or checksum rules.
    #[error("invalid cnpj number")]
    InvalidCnpj,

    /// The value is not a `local@domain` email address.
    #[error("invalid email address format")]
    InvalidEmail,

    /// The person or legal name is rejected.
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),

    /// The PIX key type tag is not one of the known kinds.
    #[error("invalid pix key type: {0}")]
    InvalidPixKeyType(String),

    /// The value is not a Brazilian mobile number.
    #[error("invalid telefone")]
    InvalidTelefone,

    /// The value is not shaped like a UUID.
    #[error("invalid chave aleatoria")]
    InvalidChaveAleatoria,
}

/// Reasons a person or legal name is rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidNameError {
    /// The name is empty after collapsing whitespace.
    #[error("name cannot be empty")]
    Empty,

    /// The name has a single word.
    #[error("name must contain at least two words")]
    LessThanTwoWords,

    /// The first word has fewer than two characters.
    #[error("first name must have at least two characters")]
    FirstNameTooShort,
}

/// Error returned while parsing a payee status code from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown payee status: {0}")]
pub struct ParsePayeeStatusError(pub String);
