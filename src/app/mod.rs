//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules of the siren: command decoding, alarm
//! state, acknowledgment and the tone sweep orchestration. All interaction
//! with hardware happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod alarm;
pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
