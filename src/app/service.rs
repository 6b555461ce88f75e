//! Application service — the hexagonal core.
//!
//! [`SirenService`] owns the alarm state, the sweep phase and the serial
//! line accumulator. It exposes a hardware-agnostic API; all I/O flows
//! through port traits injected at call sites, so the whole service runs
//! against mock adapters on the host.
//!
//! ```text
//!  SerialPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      SirenService       │
//!  TimePort   ──▶ │ reader · alarm · sweep  │ ──▶ SignalPort
//!  DelayNs    ◀── └────────────────────────┘
//! ```
//!
//! One call to [`poll`](SirenService::poll) is one main-loop iteration:
//! read at most one line and dispatch it (acknowledging every line, known
//! or not), then advance the sweep if a step is due.

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::SirenConfig;
use crate::control::sweep::ToneSweep;
use crate::serial::line_reader::CommandLineReader;
use crate::serial::transport::SerialPort;

use super::alarm::AlarmState;
use super::commands::SirenCommand;
use super::events::AppEvent;
use super::ports::{EventSink, SignalPort, TimePort};

// ───────────────────────────────────────────────────────────────
// SirenService
// ───────────────────────────────────────────────────────────────

/// The application service: sole writer of alarm and sweep state.
pub struct SirenService {
    config: SirenConfig,
    alarm: AlarmState,
    sweep: ToneSweep,
    reader: CommandLineReader,
    lines_received: u32,
}

impl SirenService {
    /// Construct the service in the idle state with a fresh sweep.
    ///
    /// Does **not** touch outputs — call [`start`](Self::start) next.
    pub fn new(config: SirenConfig) -> Self {
        let sweep = ToneSweep::new(&config);
        Self {
            config,
            alarm: AlarmState::Idle,
            sweep,
            reader: CommandLineReader::new(),
            lines_received: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Apply boot outputs: buzzer silent, green on, red off, amber off.
    pub fn start(&mut self, hw: &mut impl SignalPort, sink: &mut impl EventSink) {
        hw.no_tone();
        hw.set_green(true);
        hw.set_red(false);
        hw.set_amber(false);
        sink.emit(&AppEvent::Started(self.alarm));
        info!(
            "SirenService started ({:?}, sweep {}..{} Hz)",
            self.alarm, self.config.freq_min_hz, self.config.freq_max_hz
        );
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one loop iteration: serial line → dispatch → ack, then sweep.
    pub fn poll(
        &mut self,
        serial: &mut impl SerialPort,
        hw: &mut impl SignalPort,
        clock: &impl TimePort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        let command = self.reader.poll(serial).map(|line| {
            debug!("serial: line {:?} (truncated={})", line.text(), line.is_truncated());
            SirenCommand::decode(&line)
        });

        if let Some(cmd) = command {
            self.lines_received = self.lines_received.wrapping_add(1);
            self.handle_command(cmd, hw, delay, sink);
        }

        self.update_sweep(hw, clock, sink);
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply a decoded command, then blink the acknowledgment.
    ///
    /// Unknown commands change nothing but are still acknowledged.
    pub fn handle_command(
        &mut self,
        cmd: SirenCommand,
        hw: &mut impl SignalPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        sink.emit(&AppEvent::CommandReceived(cmd));

        let prev = self.alarm;
        match cmd {
            SirenCommand::Activate => {
                self.alarm = AlarmState::Active;
                hw.set_red(true);
                hw.set_green(false);
            }
            SirenCommand::Deactivate => {
                self.alarm = AlarmState::Idle;
                hw.no_tone();
                hw.set_red(false);
                hw.set_green(true);
            }
            SirenCommand::Unknown => {}
        }

        if self.alarm != prev {
            sink.emit(&AppEvent::AlarmChanged {
                from: prev,
                to: self.alarm,
            });
        }

        self.acknowledge(hw, delay);
    }

    /// Blocking amber blink: on for `ack_on_ms`, off for `ack_off_ms`.
    ///
    /// Nothing else runs during the blink. The sweep timestamp is left
    /// as-is, so the first sweep check afterwards steps immediately.
    pub fn acknowledge(&self, hw: &mut impl SignalPort, delay: &mut impl DelayNs) {
        hw.set_amber(true);
        delay.delay_ms(self.config.ack_on_ms);
        hw.set_amber(false);
        delay.delay_ms(self.config.ack_off_ms);
    }

    // ── Tone sweep ────────────────────────────────────────────

    /// Silent while idle; one sweep step per elapsed interval while active.
    pub fn update_sweep(
        &mut self,
        hw: &mut impl SignalPort,
        clock: &impl TimePort,
        sink: &mut impl EventSink,
    ) {
        if !self.alarm.is_active() {
            hw.no_tone();
            return;
        }

        if let Some(step) = self.sweep.tick(clock.uptime_ms()) {
            hw.tone(step.freq_hz);
            if step.reversed {
                sink.emit(&AppEvent::SweepReversed {
                    freq_hz: self.sweep.frequency_hz(),
                    rising: self.sweep.is_rising(),
                });
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current alarm state.
    pub fn alarm(&self) -> AlarmState {
        self.alarm
    }

    /// Current sweep phase.
    pub fn sweep(&self) -> &ToneSweep {
        &self.sweep
    }

    /// Lines received since boot (recognized or not).
    pub fn lines_received(&self) -> u32 {
        self.lines_received
    }

    pub fn config(&self) -> &SirenConfig {
        &self.config
    }
}
