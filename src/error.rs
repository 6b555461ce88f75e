//! Unified error types for the siren firmware.
//!
//! The command path itself never fails: unknown input is a no-op. Errors
//! only come from bring-up (peripheral init, UART driver install) and from
//! configuration validation, and all of them funnel into [`Error`] so that
//! `main` can handle them uniformly.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible bring-up operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// The serial command link could not be brought up.
    Serial(SerialError),
    /// Configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Serial(e) => write!(f, "serial: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Peripheral initialisation errors
// ---------------------------------------------------------------------------

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcInitFailed(i32),
}

impl fmt::Display for HwInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed(rc) => write!(f, "LEDC timer/channel config failed (rc={})", rc),
        }
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Serial link errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// `uart_param_config` rejected the line settings.
    ParamConfigFailed(i32),
    /// `uart_set_pin` failed.
    PinConfigFailed(i32),
    /// `uart_driver_install` failed.
    DriverInstallFailed(i32),
    /// A read from the installed driver returned an error code.
    ReadFailed(i32),
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParamConfigFailed(rc) => write!(f, "UART param config failed (rc={})", rc),
            Self::PinConfigFailed(rc) => write!(f, "UART pin config failed (rc={})", rc),
            Self::DriverInstallFailed(rc) => write!(f, "UART driver install failed (rc={})", rc),
            Self::ReadFailed(rc) => write!(f, "UART read failed (rc={})", rc),
        }
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Reasons [`SirenConfig::validate`](crate::config::SirenConfig::validate)
/// rejects a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Lower bound is zero or not strictly below the upper bound.
    FrequencyRange { min_hz: u32, max_hz: u32 },
    /// A zero step would freeze the sweep.
    ZeroStep,
    /// Step is wider than the whole sweep range.
    StepTooLarge(u32),
    /// A zero interval would step on every loop iteration.
    ZeroInterval,
    /// The loop yield alone would stretch every sweep step.
    YieldTooLong { yield_ms: u32, interval_ms: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrequencyRange { min_hz, max_hz } => {
                write!(f, "invalid sweep range {}..{} Hz", min_hz, max_hz)
            }
            Self::ZeroStep => write!(f, "sweep step must be non-zero"),
            Self::StepTooLarge(step) => write!(f, "sweep step {} Hz exceeds range", step),
            Self::ZeroInterval => write!(f, "sweep interval must be non-zero"),
            Self::YieldTooLong {
                yield_ms,
                interval_ms,
            } => write!(
                f,
                "loop yield {} ms must be below sweep interval {} ms",
                yield_ms, interval_ms
            ),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
