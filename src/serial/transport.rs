//! Transport abstraction — any byte-oriented receive channel.
//!
//! Concrete implementations:
//! - UART (ESP-IDF driver on target, in-memory queue on host)
//! - [`NullSerial`] when no link is attached
//!
//! The line reader is generic over `SerialPort`, so swapping the link
//! (USB CDC, BLE UART) requires zero changes to the framing logic.

/// Byte-oriented receive channel.
pub trait SerialPort {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Check if data is available for reading. Never blocks.
    fn available(&self) -> bool;

    /// Read up to `buf.len()` bytes into `buf`.
    /// Returns the number of bytes actually read, 0 if none are pending.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// A null transport that never has data.
pub struct NullSerial;

impl SerialPort for NullSerial {
    type Error = core::convert::Infallible;

    fn available(&self) -> bool {
        false
    }

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(0)
    }
}
