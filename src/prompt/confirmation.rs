use super::{ConfirmOptions, Prompter};
use crate::{error::Result, output::Output, reader::LineReader, validation::parse_yes_no};

impl<R: LineReader, O: Output> Prompter<R, O> {
    /// Ask a yes/no question.
    ///
    /// Accepts `y`, `Y`, `yes`, `YES`, `Yes` and their negative counterparts.
    /// Empty input resolves to the default when one is set.
    pub fn yes(&mut self, message: &str, options: &ConfirmOptions) -> Result<bool> {
        let hint = match options.default {
            Some(true) => " [Y/n] ",
            Some(false) => " [y/N] ",
            None => " (y/n) ",
        };
        let prompt = format!("{message}{hint}");

        self.ask(|p| {
            let answer = p.read_answer(&prompt)?;
            parse_yes_no(&answer, options.default)
        })
    }
}
