//! Line-at-a-time input.

use std::io::{self, BufRead};

/// Source of answer lines.
pub trait LineReader {
    /// Block until a line is available. Returns the line without its
    /// terminator, or `None` once the input is exhausted.
    ///
    /// A line that is not valid UTF-8 is consumed and reported as
    /// `io::ErrorKind::InvalidData`, so the next call reads the following line.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<B: BufRead> LineReader for B {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}
