use super::{Prompter, StringOptions};
use crate::{
    error::Result,
    output::Output,
    reader::LineReader,
    validation::{check_length, resolve_text, Resolved},
};

impl<R: LineReader, O: Output> Prompter<R, O> {
    /// Ask for free text.
    ///
    /// Shows `message`, a `(MIN-MAX characters)` hint when a length range is
    /// set and `[DEFAULT]` when a default is set, then reads a trimmed line.
    /// Empty input returns the default unchecked; otherwise the answer must
    /// satisfy `required` and the length range.
    pub fn prompt_string(&mut self, message: &str, options: &StringOptions) -> Result<String> {
        Ok(self.resolve_string(message, options)?.into_value())
    }

    /// Like `prompt_string`, but reports whether the default was used.
    pub(crate) fn resolve_string(
        &mut self,
        message: &str,
        options: &StringOptions,
    ) -> Result<Resolved> {
        let prompt = decorate(message, options);
        self.ask(|p| {
            let answer = p.read_answer(&prompt)?;
            let resolved = resolve_text(
                &answer,
                options.default.as_deref(),
                options.required,
                options.error_message.as_deref(),
            )?;
            if let (Resolved::Entered(value), Some(length)) = (&resolved, &options.length) {
                check_length(value, length)?;
            }
            Ok(resolved)
        })
    }
}

fn decorate(message: &str, options: &StringOptions) -> String {
    let mut prompt = message.to_string();
    if let Some(length) = &options.length {
        prompt.push_str(&format!(" ({}-{} characters)", length.start(), length.end()));
    }
    match &options.default {
        Some(default) => prompt.push_str(&format!(" [{default}]: ")),
        None => prompt.push_str(": "),
    }
    prompt
}
