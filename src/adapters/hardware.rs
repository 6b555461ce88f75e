//! Hardware adapter — bridges the buzzer and LED drivers to [`SignalPort`].
//!
//! Owns the output drivers and exposes them to the domain. On non-espidf
//! targets the underlying drivers use cfg-gated simulation stubs, so this
//! adapter is usable in host tests as-is.

use embedded_hal::digital::OutputPin;

use crate::app::ports::SignalPort;
use crate::drivers::buzzer::{BuzzerDriver, BuzzerState};
use crate::drivers::gpio::GpioOutput;
use crate::drivers::status_led::{LedLevels, StatusLeds};

/// Concrete adapter that combines all siren outputs behind the port trait.
pub struct HardwareAdapter<P: OutputPin = GpioOutput> {
    buzzer: BuzzerDriver,
    leds: StatusLeds<P>,
}

impl<P: OutputPin> HardwareAdapter<P> {
    pub fn new(buzzer: BuzzerDriver, leds: StatusLeds<P>) -> Self {
        Self { buzzer, leds }
    }

    pub fn buzzer_state(&self) -> BuzzerState {
        self.buzzer.state()
    }

    pub fn led_levels(&self) -> LedLevels {
        self.leds.levels()
    }
}

// ── SignalPort implementation ─────────────────────────────────

impl<P: OutputPin> SignalPort for HardwareAdapter<P> {
    fn tone(&mut self, freq_hz: u32) {
        self.buzzer.tone(freq_hz);
    }

    fn no_tone(&mut self) {
        self.buzzer.silence();
    }

    fn set_green(&mut self, on: bool) {
        self.leds.set_green(on);
    }

    fn set_red(&mut self, on: bool) {
        self.leds.set_red(on);
    }

    fn set_amber(&mut self, on: bool) {
        self.leds.set_amber(on);
    }
}
