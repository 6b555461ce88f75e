//! Triangle-wave tone sweep for the siren.
//!
//! The sweep walks the buzzer frequency between two bounds in fixed steps,
//! one step per elapsed interval, reflecting at either end:
//!
//! ```text
//!  1800 ┤        /\        /\
//!       │       /  \      /  \
//!   800 ┤──────/    \____/    \__
//!        20 ms ticks, 40 Hz per tick
//! ```
//!
//! [`ToneSweep::tick`] is pure: it never blocks and never touches hardware.
//! The caller emits [`SweepStep::freq_hz`] on the buzzer when a step is due.

use crate::config::SirenConfig;

/// One executed sweep step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStep {
    /// Frequency to emit now (the value *before* the advance).
    pub freq_hz: u32,
    /// The advance landed on or past a bound and the direction flipped.
    pub reversed: bool,
}

/// Sweep phase: current frequency, signed step and last-step timestamp.
///
/// Phase survives alarm on/off cycles; only a fresh [`ToneSweep::new`]
/// starts again from the lower bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneSweep {
    freq_hz: u32,
    step_hz: i32,
    last_step_ms: u64,
    min_hz: u32,
    max_hz: u32,
    interval_ms: u64,
}

impl ToneSweep {
    /// Start at the lower bound, rising, with the clock origin at 0.
    pub fn new(config: &SirenConfig) -> Self {
        Self {
            freq_hz: config.freq_min_hz,
            step_hz: config.freq_step_hz as i32,
            last_step_ms: 0,
            min_hz: config.freq_min_hz,
            max_hz: config.freq_max_hz,
            interval_ms: u64::from(config.step_interval_ms),
        }
    }

    /// Advance one step if at least one interval has elapsed since the last.
    pub fn tick(&mut self, now_ms: u64) -> Option<SweepStep> {
        if now_ms.wrapping_sub(self.last_step_ms) < self.interval_ms {
            return None;
        }

        let emitted = self.freq_hz;
        self.last_step_ms = now_ms;
        self.freq_hz = self.freq_hz.saturating_add_signed(self.step_hz);

        let reversed = self.freq_hz >= self.max_hz || self.freq_hz <= self.min_hz;
        if reversed {
            self.step_hz = -self.step_hz;
        }

        Some(SweepStep {
            freq_hz: emitted,
            reversed,
        })
    }

    /// Frequency the next step will emit.
    pub fn frequency_hz(&self) -> u32 {
        self.freq_hz
    }

    /// Signed step applied on the next advance.
    pub fn step_hz(&self) -> i32 {
        self.step_hz
    }

    pub fn is_rising(&self) -> bool {
        self.step_hz > 0
    }

    pub fn last_step_ms(&self) -> u64 {
        self.last_step_ms
    }
}
