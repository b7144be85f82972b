//! Port contracts for payee restoration.
//!
//! Ports define infrastructure-agnostic interfaces used by the restoration
//! service.

pub mod tempered_value;

pub use tempered_value::TemperedValueSink;
