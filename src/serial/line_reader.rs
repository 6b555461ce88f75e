//! Newline-terminated line reader.
//!
//! Wire format: ASCII text terminated by `\n`. Surrounding whitespace
//! (including a `\r` from CRLF senders) is stripped from the yielded text.
//!
//! The reader accumulates bytes across calls, so a line split over several
//! loop iterations completes on whichever call sees its terminator. At most
//! one line is yielded per call; bytes after the terminator stay in the
//! transport for the next call.
//!
//! The accumulator is fixed-capacity. Leading whitespace is never stored,
//! and whitespace past capacity is dropped silently, since trimming would
//! remove it anyway. Any other byte past capacity is dropped and flags the
//! line as truncated so it can never alias a short command.

use log::{debug, warn};

use super::transport::SerialPort;

/// Accumulator size for the command link. Commands are a few bytes long.
pub const COMMAND_LINE_CAPACITY: usize = 64;

/// Line reader sized for the siren command link.
pub type CommandLineReader = LineReader<COMMAND_LINE_CAPACITY>;

/// A completed, trimmed line.
///
/// Borrows the reader's accumulator and is valid until the next call to
/// [`LineReader::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceivedLine<'a> {
    text: &'a str,
    truncated: bool,
}

impl<'a> ReceivedLine<'a> {
    /// Line content with leading/trailing whitespace removed.
    /// Empty if the raw bytes were not valid UTF-8.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// `true` if bytes were dropped because the line exceeded capacity.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Streaming line accumulator.
pub struct LineReader<const N: usize> {
    buf: heapless::Vec<u8, N>,
    truncated: bool,
    /// Set once a line has been handed out; the accumulator is cleared on
    /// the next poll so the returned slice stays valid until then.
    line_ready: bool,
}

impl<const N: usize> Default for LineReader<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineReader<N> {
    pub const fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
            truncated: false,
            line_ready: false,
        }
    }

    /// Drain the transport until a terminator or until it runs dry.
    ///
    /// Returns `None` without blocking when nothing is pending, and `None`
    /// when bytes arrived but the line is still incomplete. Transport
    /// errors are logged and treated as "no data"; the partial line is kept.
    pub fn poll<P: SerialPort>(&mut self, port: &mut P) -> Option<ReceivedLine<'_>> {
        if self.line_ready {
            self.reset();
        }
        if !port.available() {
            return None;
        }

        let mut byte = [0u8; 1];
        while port.available() {
            match port.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("serial: read failed ({:?}), keeping {} buffered bytes", e, self.buf.len());
                    return None;
                }
            }

            if byte[0] == b'\n' {
                self.line_ready = true;
                return Some(self.current_line());
            }

            let b = byte[0];
            if self.buf.is_empty() && b.is_ascii_whitespace() {
                continue;
            }
            if self.buf.push(b).is_err() && !b.is_ascii_whitespace() && !self.truncated {
                warn!("serial: line exceeds {} bytes, dropping overflow", N);
                self.truncated = true;
            }
        }

        debug!("serial: partial line ({} bytes) awaiting terminator", self.buf.len());
        None
    }

    /// Bytes accumulated for the line in progress.
    pub fn pending(&self) -> usize {
        if self.line_ready { 0 } else { self.buf.len() }
    }

    /// Discard any partially received line.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.truncated = false;
        self.line_ready = false;
    }

    fn current_line(&self) -> ReceivedLine<'_> {
        let text = match core::str::from_utf8(&self.buf) {
            Ok(s) => s.trim(),
            Err(_) => {
                warn!("serial: received invalid UTF-8, ignoring line content");
                ""
            }
        };
        ReceivedLine {
            text,
            truncated: self.truncated,
        }
    }
}
