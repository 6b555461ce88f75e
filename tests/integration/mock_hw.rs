//! Mock adapters for integration tests.
//!
//! Every output write and every blocking delay lands on one shared
//! [`Timeline`], stamped with the mock clock, so tests can assert on the
//! exact order and timing of side effects. The mock delay advances the
//! same clock the sweep reads, like a real busy-wait would.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use siren::app::events::AppEvent;
use siren::app::ports::{EventSink, SignalPort, TimePort};
use siren::app::service::SirenService;
use siren::config::SirenConfig;
use siren::serial::transport::SerialPort;

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Tone(u32),
    NoTone,
    Green(bool),
    Red(bool),
    Amber(bool),
    DelayMs(u32),
}

/// Shared clock + ordered log of `(timestamp_ms, call)`.
#[derive(Default)]
pub struct Timeline {
    now_ms: Cell<u64>,
    calls: RefCell<Vec<(u64, Call)>>,
}

#[allow(dead_code)]
impl Timeline {
    pub fn now(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push((self.now(), call));
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Calls recorded after position `mark` (from an earlier [`len`]).
    pub fn since(&self, mark: usize) -> Vec<(u64, Call)> {
        self.calls.borrow()[mark..].to_vec()
    }

    /// Calls after `mark` without timestamps.
    pub fn calls_since(&self, mark: usize) -> Vec<Call> {
        self.since(mark).into_iter().map(|(_, c)| c).collect()
    }

    fn last_matching<T>(&self, f: impl Fn(Call) -> Option<T>) -> Option<T> {
        self.calls.borrow().iter().rev().find_map(|&(_, c)| f(c))
    }

    /// Current buzzer output: `Some(freq)` while a tone is sounding.
    pub fn tone(&self) -> Option<u32> {
        self.last_matching(|c| match c {
            Call::Tone(f) => Some(Some(f)),
            Call::NoTone => Some(None),
            _ => None,
        })
        .flatten()
    }

    pub fn green(&self) -> bool {
        self.last_matching(|c| match c {
            Call::Green(on) => Some(on),
            _ => None,
        })
        .unwrap_or(false)
    }

    pub fn red(&self) -> bool {
        self.last_matching(|c| match c {
            Call::Red(on) => Some(on),
            _ => None,
        })
        .unwrap_or(false)
    }

    pub fn amber(&self) -> bool {
        self.last_matching(|c| match c {
            Call::Amber(on) => Some(on),
            _ => None,
        })
        .unwrap_or(false)
    }
}

// ── Port implementations ──────────────────────────────────────

pub struct MockHw(pub Rc<Timeline>);

impl SignalPort for MockHw {
    fn tone(&mut self, freq_hz: u32) {
        self.0.record(Call::Tone(freq_hz));
    }
    fn no_tone(&mut self) {
        self.0.record(Call::NoTone);
    }
    fn set_green(&mut self, on: bool) {
        self.0.record(Call::Green(on));
    }
    fn set_red(&mut self, on: bool) {
        self.0.record(Call::Red(on));
    }
    fn set_amber(&mut self, on: bool) {
        self.0.record(Call::Amber(on));
    }
}

pub struct MockClock(pub Rc<Timeline>);

impl TimePort for MockClock {
    fn uptime_ms(&self) -> u64 {
        self.0.now()
    }
}

pub struct MockDelay(pub Rc<Timeline>);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.advance(u64::from(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.record(Call::DelayMs(ms));
        self.0.advance(u64::from(ms));
    }
}

#[derive(Default)]
pub struct MockSerial {
    rx: VecDeque<u8>,
}

impl MockSerial {
    pub fn push(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }
}

impl SerialPort for MockSerial {
    type Error = ();

    fn available(&self) -> bool {
        !self.rx.is_empty()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        let mut n = 0;
        while n < buf.len() {
            match self.rx.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── Test rig ──────────────────────────────────────────────────

/// A booted siren wired to mocks. Boot time is t = 0 ms.
pub struct Rig {
    pub app: SirenService,
    pub t: Rc<Timeline>,
    pub hw: MockHw,
    pub clock: MockClock,
    pub delay: MockDelay,
    pub serial: MockSerial,
    pub sink: RecordingSink,
}

#[allow(dead_code)]
impl Rig {
    pub fn boot() -> Self {
        Self::boot_with(SirenConfig::default())
    }

    pub fn boot_with(config: SirenConfig) -> Self {
        let t = Rc::new(Timeline::default());
        let mut rig = Self {
            app: SirenService::new(config),
            hw: MockHw(t.clone()),
            clock: MockClock(t.clone()),
            delay: MockDelay(t.clone()),
            serial: MockSerial::default(),
            sink: RecordingSink::default(),
            t,
        };
        rig.app.start(&mut rig.hw, &mut rig.sink);
        rig
    }

    /// One main-loop iteration.
    pub fn step(&mut self) {
        self.app.poll(
            &mut self.serial,
            &mut self.hw,
            &self.clock,
            &mut self.delay,
            &mut self.sink,
        );
    }

    /// Queue `line` + `\n` and run one iteration.
    pub fn send(&mut self, line: &str) {
        self.serial.push(line.as_bytes());
        self.serial.push(b"\n");
        self.step();
    }

    /// Advance the clock by `ms`, then run one iteration.
    pub fn step_after(&mut self, ms: u64) {
        self.t.advance(ms);
        self.step();
    }

    /// Tones emitted after `mark`, in order.
    pub fn tones_since(&self, mark: usize) -> Vec<u32> {
        self.t
            .calls_since(mark)
            .into_iter()
            .filter_map(|c| match c {
                Call::Tone(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    /// Number of amber on-pulses after `mark`.
    pub fn blinks_since(&self, mark: usize) -> usize {
        self.t
            .calls_since(mark)
            .iter()
            .filter(|c| matches!(c, Call::Amber(true)))
            .count()
    }
}
