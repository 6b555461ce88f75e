//! Fuzz target: `LineReader::poll` + `SirenCommand::decode`
//!
//! Streams arbitrary bytes through the command line reader, split into
//! bursts at the first input byte's chosen chunk size, and asserts that
//! yielded lines are trimmed, bounded, and only decode to a command when
//! they match it exactly.
//!
//! cargo fuzz run fuzz_line_reader

#![no_main]

use libfuzzer_sys::fuzz_target;
use siren::app::commands::SirenCommand;
use siren::serial::line_reader::{CommandLineReader, COMMAND_LINE_CAPACITY};
use siren::serial::transport::SerialPort;

struct Chunk<'a> {
    data: &'a [u8],
}

impl SerialPort for Chunk<'_> {
    type Error = core::convert::Infallible;

    fn available(&self) -> bool {
        !self.data.is_empty()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&chunk, rest)) = data.split_first() else {
        return;
    };
    let chunk = usize::from(chunk).max(1);

    let mut reader = CommandLineReader::new();
    for burst in rest.chunks(chunk) {
        let mut port = Chunk { data: burst };
        while port.available() {
            let Some(line) = reader.poll(&mut port) else {
                continue;
            };
            assert!(line.text().len() <= COMMAND_LINE_CAPACITY);
            assert_eq!(line.text(), line.text().trim());
            match SirenCommand::decode(&line) {
                SirenCommand::Activate => assert_eq!(line.text(), "ON"),
                SirenCommand::Deactivate => assert_eq!(line.text(), "OFF"),
                SirenCommand::Unknown => {}
            }
        }
        assert!(reader.pending() <= COMMAND_LINE_CAPACITY);
    }
});
