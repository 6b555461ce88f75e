//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (ESP-IDF console in production). Sweep reversals fire twice
//! a second while sounding, so they go to `debug`.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(alarm) => {
                info!("START | alarm={:?}", alarm);
            }
            AppEvent::CommandReceived(cmd) => {
                info!("CMD   | {:?}", cmd);
            }
            AppEvent::AlarmChanged { from, to } => {
                info!("ALARM | {:?} -> {:?}", from, to);
            }
            AppEvent::SweepReversed { freq_hz, rising } => {
                debug!(
                    "SWEEP | reversed at {} Hz, now {}",
                    freq_hz,
                    if *rising { "rising" } else { "falling" }
                );
            }
        }
    }
}
