//! Siren configuration parameters
//!
//! All tunable parameters for the siren controller. These are compile-time
//! defaults; nothing is persisted and every reset starts from them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core siren configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SirenConfig {
    // --- Tone sweep ---
    /// Lower bound of the sweep (Hz); also the boot frequency
    pub freq_min_hz: u32,
    /// Upper bound of the sweep (Hz)
    pub freq_max_hz: u32,
    /// Frequency change per sweep step (Hz)
    pub freq_step_hz: u32,
    /// Minimum time between sweep steps (milliseconds)
    pub step_interval_ms: u32,

    // --- Acknowledgment blink ---
    /// Amber LED on-time after a received line (milliseconds)
    pub ack_on_ms: u32,
    /// Amber LED off-time following the on-phase (milliseconds)
    pub ack_off_ms: u32,

    // --- Serial ---
    /// UART baud rate for the command link
    pub baud_rate: u32,

    // --- Main loop ---
    /// Yield between loop iterations so the RTOS idle task can run (milliseconds).
    ///
    /// FreeRTOS rounds this up to whole ticks; `sdkconfig.defaults` sets a
    /// 1 kHz tick so 1 ms stays 1 ms. Must be below `step_interval_ms`.
    pub loop_yield_ms: u32,
}

impl Default for SirenConfig {
    fn default() -> Self {
        Self {
            // Sweep: 800..=1800 Hz in 40 Hz steps, one step every 20 ms
            freq_min_hz: 800,
            freq_max_hz: 1800,
            freq_step_hz: 40,
            step_interval_ms: 20,

            // Ack: 1 s total
            ack_on_ms: 500,
            ack_off_ms: 500,

            // Serial
            baud_rate: 9600,

            // Loop
            loop_yield_ms: 1,
        }
    }
}

impl SirenConfig {
    /// Reject parameter sets the sweeper cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.freq_min_hz == 0 || self.freq_min_hz >= self.freq_max_hz {
            return Err(ConfigError::FrequencyRange {
                min_hz: self.freq_min_hz,
                max_hz: self.freq_max_hz,
            });
        }
        if self.freq_step_hz == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.freq_step_hz > self.freq_max_hz - self.freq_min_hz {
            return Err(ConfigError::StepTooLarge(self.freq_step_hz));
        }
        if self.step_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.loop_yield_ms >= self.step_interval_ms {
            return Err(ConfigError::YieldTooLong {
                yield_ms: self.loop_yield_ms,
                interval_ms: self.step_interval_ms,
            });
        }
        Ok(())
    }

    /// Number of discrete frequency levels visited per sweep direction.
    pub fn levels_per_direction(&self) -> u32 {
        (self.freq_max_hz - self.freq_min_hz) / self.freq_step_hz
    }

    /// Total blocking time of one acknowledgment blink.
    pub fn ack_total_ms(&self) -> u32 {
        self.ack_on_ms + self.ack_off_ms
    }
}
