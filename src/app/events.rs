//! Outbound application events.
//!
//! The [`SirenService`](super::service::SirenService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, count them in tests, etc.

use super::alarm::AlarmState;
use super::commands::SirenCommand;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Boot outputs applied (carries the initial alarm state).
    Started(AlarmState),

    /// A line was received and decoded.
    CommandReceived(SirenCommand),

    /// The alarm state changed as a result of a command.
    AlarmChanged { from: AlarmState, to: AlarmState },

    /// The sweep hit a bound and reversed direction.
    SweepReversed { freq_hz: u32, rising: bool },
}
