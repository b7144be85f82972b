//! In-memory tempered-value sink.

use std::sync::{Arc, Mutex, PoisonError};

use crate::payee::{domain::TemperedValue, ports::TemperedValueSink};

/// Thread-safe sink that keeps every recorded event.
///
/// Clones share the same event list.
#[derive(Debug, Clone, Default)]
pub struct RecordingTemperedValueSink {
    events: Arc<Mutex<Vec<TemperedValue>>>,
}

impl RecordingTemperedValueSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<TemperedValue> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl TemperedValueSink for RecordingTemperedValueSink {
    fn record(&self, event: &TemperedValue) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
