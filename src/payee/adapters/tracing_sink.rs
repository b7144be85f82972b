//! Tempered-value sink that emits `tracing` warnings.

use crate::payee::{domain::TemperedValue, ports::TemperedValueSink};

/// Emits one `WARN` event per tempered value.
///
/// Events carry the `payee_id`, `field` and `error` as structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTemperedValueSink;

impl TracingTemperedValueSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TemperedValueSink for TracingTemperedValueSink {
    fn record(&self, event: &TemperedValue) {
        tracing::warn!(
            payee_id = %event.payee_id(),
            field = %event.field(),
            error = %event.error(),
            "tempered {} with invalid value",
            event.field()
        );
    }
}
