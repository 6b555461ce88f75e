//! Serial command link — byte transport plus newline framing.
//!
//! ```text
//!   UART ──▶ SerialPort ──▶ LineReader ──▶ "ON" / "OFF" / …
//! ```

pub mod line_reader;
pub mod transport;
