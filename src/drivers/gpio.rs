//! Push-pull GPIO output exposed through the `embedded-hal` pin traits.
//!
//! Writes go through [`hw_init::gpio_write`]; the last written level is
//! mirrored in memory so `StatefulOutputPin` queries never read hardware.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::drivers::hw_init;

pub struct GpioOutput {
    gpio: i32,
    high: bool,
}

impl GpioOutput {
    /// Wrap an output pin configured by `hw_init` (which leaves it LOW).
    pub fn new(gpio: i32) -> Self {
        Self { gpio, high: false }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for GpioOutput {
    type Error = Infallible;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, false);
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, true);
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for GpioOutput {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}
