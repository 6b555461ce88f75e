//! Passive piezo buzzer driven by LEDC PWM.
//!
//! A tone is a 50 % duty square wave at the requested frequency; silence is
//! duty 0. Retuning an already-sounding buzzer only changes the timer
//! frequency, so the sweep does not click between steps.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives LEDC timer 0 / channel 0 via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerState {
    Silent,
    Tone { freq_hz: u32 },
}

pub struct BuzzerDriver {
    state: BuzzerState,
}

impl Default for BuzzerDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl BuzzerDriver {
    /// `hw_init` leaves the channel at duty 0, so the driver starts silent.
    pub fn new() -> Self {
        Self {
            state: BuzzerState::Silent,
        }
    }

    pub fn tone(&mut self, freq_hz: u32) {
        if freq_hz == 0 {
            self.silence();
            return;
        }
        match self.state {
            BuzzerState::Tone { freq_hz: current } if current == freq_hz => {}
            BuzzerState::Tone { .. } => hw_init::ledc_set_freq(freq_hz),
            BuzzerState::Silent => {
                hw_init::ledc_set_freq(freq_hz);
                hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, pins::BUZZER_TONE_DUTY);
            }
        }
        self.state = BuzzerState::Tone { freq_hz };
    }

    pub fn silence(&mut self) {
        if self.state == BuzzerState::Silent {
            return;
        }
        hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, 0);
        self.state = BuzzerState::Silent;
    }

    pub fn state(&self) -> BuzzerState {
        self.state
    }

    pub fn is_sounding(&self) -> bool {
        matches!(self.state, BuzzerState::Tone { .. })
    }
}
