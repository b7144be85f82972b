//! Adapter implementations for payee ports.
//!
//! Provides [`TracingTemperedValueSink`] for production logging and
//! [`RecordingTemperedValueSink`] for tests and callers that inspect
//! degraded fields.

pub mod memory;
pub mod tracing_sink;

pub use memory::RecordingTemperedValueSink;
pub use tracing_sink::TracingTemperedValueSink;
