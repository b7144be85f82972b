//! Payee accounts: identity and payment-routing records for payees.
//!
//! This crate validates the data needed to pay a person or company in
//! Brazil (CPF and CNPJ tax numbers, PIX routing keys, email and legal
//! name) and models the payee aggregate whose editability depends on its
//! lifecycle status.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Value objects and the payee aggregate, free of I/O
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (logging, in-memory)
//!
//! # Modules
//!
//! - [`payee`]: Payee validation, lifecycle and tolerant restoration

pub mod payee;
