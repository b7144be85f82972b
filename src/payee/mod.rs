//! Payee identity and payment-routing records.
//!
//! A payee is a person or company that can receive funds. This module
//! validates the identifiers attached to a payee (CPF/CNPJ tax numbers, PIX
//! routing keys, email and legal name) and models the payee aggregate whose
//! editability depends on its lifecycle status. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Restoration of persisted records in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
