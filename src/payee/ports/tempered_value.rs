//! Sink port for tempered values met while restoring payees.

use crate::payee::domain::TemperedValue;

/// Receives a structured warning each time a persisted field fails
/// validation and is passed through verbatim.
///
/// Recording is fire-and-forget: implementations must not fail or block
/// the restoration that reports the event.
pub trait TemperedValueSink: Send + Sync {
    /// Records a tempered value.
    fn record(&self, event: &TemperedValue);
}
