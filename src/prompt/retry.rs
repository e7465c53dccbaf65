//! The read-validate-retry loop every prompt is built on.

use super::Prompter;
use crate::{
    constants::messages,
    error::{Error, Result},
    output::Output,
    reader::LineReader,
    style::StyledText,
};
use log::{debug, trace};
use std::io;

impl<R: LineReader, O: Output> Prompter<R, O> {
    /// Run `step` until it produces a value.
    ///
    /// A `ValidationError` from `step` is reported as one error line and the
    /// step is run again; there is no retry limit. Any other error is
    /// returned to the caller.
    pub(crate) fn ask<T>(&mut self, mut step: impl FnMut(&mut Self) -> Result<T>) -> Result<T> {
        loop {
            match step(self) {
                Err(Error::ValidationError(message)) => {
                    debug!("Rejected answer: {message}");
                    self.console.error(&message)?;
                }
                result => return result,
            }
        }
    }

    /// Print `prompt` without a newline, then read and trim one line.
    pub(crate) fn read_answer(&mut self, prompt: &str) -> Result<String> {
        self.console.print(&StyledText::plain(prompt))?;
        let line = match self.reader.read_line() {
            Ok(line) => line.ok_or(Error::EndOfInput)?,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                return Err(Error::ValidationError(messages::NOT_TEXT.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        trace!("Read line {line:?} for prompt {prompt:?}");
        Ok(line.trim().to_string())
    }
}
