//! Interactive prompts that validate answers and ask again on failure.
//!
//! The module is structured in layers:
//! - `retry`: the print/read/validate/retry loop
//! - `text`, `integer`, `confirmation`, `choice`: the four prompt kinds
//! - `options`: per-kind option structs
//!
//! A [`Prompter`] owns its line reader and console, so prompts never touch
//! process-wide state. The free functions at the bottom of this module are
//! shorthands that prompt on stdin and the terminal.

use crate::{
    error::Result,
    output::{Console, Output, OutputConfig, Terminal},
    reader::LineReader,
};
use std::{fmt::Display, io::StdinLock};

pub mod choice;
pub mod confirmation;
pub mod integer;
pub mod options;
pub mod retry;
pub mod text;

pub use options::*;

/// Runs prompts against a line reader and a console.
pub struct Prompter<R: LineReader, O: Output = Terminal> {
    reader: R,
    console: Console<O>,
}

impl Prompter<StdinLock<'static>, Terminal> {
    /// Prompter reading from stdin and writing to the terminal.
    pub fn stdio(config: OutputConfig) -> Self {
        Self::new(std::io::stdin().lock(), Console::stdio(config))
    }
}

impl<R: LineReader, O: Output> Prompter<R, O> {
    pub fn new(reader: R, console: Console<O>) -> Self {
        Self { reader, console }
    }

    pub fn console(&mut self) -> &mut Console<O> {
        &mut self.console
    }

    pub fn into_parts(self) -> (R, Console<O>) {
        (self.reader, self.console)
    }
}

/// Ask for free text on the terminal. See [`Prompter::prompt_string`].
pub fn prompt_string(message: &str, options: &StringOptions) -> Result<String> {
    Prompter::stdio(OutputConfig::default()).prompt_string(message, options)
}

/// Ask for an integer on the terminal. See [`Prompter::prompt_integer`].
pub fn prompt_integer(message: &str, options: &IntegerOptions) -> Result<i64> {
    Prompter::stdio(OutputConfig::default()).prompt_integer(message, options)
}

/// Ask a yes/no question on the terminal. See [`Prompter::yes`].
pub fn yes(message: &str, options: &ConfirmOptions) -> Result<bool> {
    Prompter::stdio(OutputConfig::default()).yes(message, options)
}

/// Ask for one of `choices` on the terminal. See [`Prompter::choose`].
pub fn choose<K, L>(message: &str, choices: &[(K, L)], options: &ChoiceOptions<K>) -> Result<K>
where
    K: PartialEq + Clone,
    L: Display,
{
    Prompter::stdio(OutputConfig::default()).choose(message, choices, options)
}
