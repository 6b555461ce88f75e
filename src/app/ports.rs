//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SirenService (domain)
//! ```
//!
//! Driven adapters (buzzer + LEDs, clock, event sinks) implement these
//! traits.  The [`SirenService`](super::service::SirenService) consumes them
//! via generics, so the domain core never touches hardware directly.
//!
//! Two more seams are not defined here:
//! - the serial link is [`SerialPort`](crate::serial::transport::SerialPort);
//! - the blocking acknowledgment delay is `embedded_hal::delay::DelayNs`.

// ───────────────────────────────────────────────────────────────
// Signal port (driven adapter: domain → buzzer + LEDs)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the siren outputs.
/// All outputs are write-only; there is no read-back.
pub trait SignalPort {
    /// Start (or retune) a continuous tone at `freq_hz`.
    fn tone(&mut self, freq_hz: u32);

    /// Silence the buzzer.
    fn no_tone(&mut self);

    /// Green status LED (alarm idle).
    fn set_green(&mut self, on: bool);

    /// Red status LED (alarm active).
    fn set_red(&mut self, on: bool);

    /// Amber acknowledgment LED.
    fn set_amber(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: monotonic clock → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source for the sweep scheduler.
pub trait TimePort {
    /// Milliseconds since boot. Never decreases.
    fn uptime_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
