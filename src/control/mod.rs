//! Time-sliced output control.

pub mod sweep;
