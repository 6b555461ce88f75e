//! Discrete status LEDs: green (idle), red (active), amber (acknowledge).
//!
//! ## Dual-target design
//!
//! Generic over any `embedded-hal` [`OutputPin`]. On ESP-IDF the firmware
//! uses [`GpioOutput`]; on host/test the same pins track state in-memory.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

use crate::drivers::gpio::GpioOutput;
use crate::pins;

/// Snapshot of the last levels written to the three LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedLevels {
    pub green: bool,
    pub red: bool,
    pub amber: bool,
}

pub struct StatusLeds<P: OutputPin = GpioOutput> {
    green: P,
    red: P,
    amber: P,
    levels: LedLevels,
}

impl StatusLeds<GpioOutput> {
    /// LEDs on the board pins from [`pins`].
    pub fn on_board() -> Self {
        Self::new(
            GpioOutput::new(pins::LED_GREEN_GPIO),
            GpioOutput::new(pins::LED_RED_GPIO),
            GpioOutput::new(pins::LED_AMBER_GPIO),
        )
    }
}

impl<P: OutputPin> StatusLeds<P> {
    /// Pins are assumed LOW at construction (as left by `hw_init`).
    pub fn new(green: P, red: P, amber: P) -> Self {
        Self {
            green,
            red,
            amber,
            levels: LedLevels::default(),
        }
    }

    pub fn set_green(&mut self, on: bool) {
        drive(&mut self.green, on, "green");
        self.levels.green = on;
    }

    pub fn set_red(&mut self, on: bool) {
        drive(&mut self.red, on, "red");
        self.levels.red = on;
    }

    pub fn set_amber(&mut self, on: bool) {
        drive(&mut self.amber, on, "amber");
        self.levels.amber = on;
    }

    pub fn levels(&self) -> LedLevels {
        self.levels
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool, name: &str) {
    if let Err(e) = pin.set_state(PinState::from(on)) {
        warn!("status_led: {} write failed: {:?}", name, e);
    }
}
