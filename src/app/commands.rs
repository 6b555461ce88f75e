//! Inbound commands to the application service.
//!
//! Lines received on the serial link are decoded into a [`SirenCommand`]
//! before dispatch. Matching is exact and case-sensitive on the trimmed
//! text; anything that is not a known command decodes to
//! [`SirenCommand::Unknown`] rather than an error.

use crate::serial::line_reader::ReceivedLine;

/// Wire text of the activate command.
pub const CMD_ON: &str = "ON";
/// Wire text of the deactivate command.
pub const CMD_OFF: &str = "OFF";

/// Commands the serial link can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SirenCommand {
    /// `ON` — sound the siren.
    Activate,
    /// `OFF` — silence the siren.
    Deactivate,
    /// Anything else, including an empty line. Acknowledged, otherwise ignored.
    Unknown,
}

impl SirenCommand {
    /// Decode already-trimmed line text.
    pub fn from_line(text: &str) -> Self {
        match text {
            CMD_ON => Self::Activate,
            CMD_OFF => Self::Deactivate,
            _ => Self::Unknown,
        }
    }

    /// Decode a line from the reader. Truncated lines are never commands.
    pub fn decode(line: &ReceivedLine<'_>) -> Self {
        if line.is_truncated() {
            Self::Unknown
        } else {
            Self::from_line(line.text())
        }
    }
}
