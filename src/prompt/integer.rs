use super::{IntegerOptions, Prompter, StringOptions};
use crate::{
    error::Result,
    output::Output,
    reader::LineReader,
    validation::{check_range, parse_integer},
};

impl<R: LineReader, O: Output> Prompter<R, O> {
    /// Ask for a base-10 integer, optionally within an inclusive range.
    ///
    /// Empty input returns the default as-is, without the range check.
    pub fn prompt_integer(&mut self, message: &str, options: &IntegerOptions) -> Result<i64> {
        let mut decorated = message.to_string();
        if let Some(range) = &options.range {
            decorated.push_str(&format!(" ({}-{})", range.start(), range.end()));
        }

        let text_options = StringOptions {
            default: options.default.map(|default| default.to_string()),
            required: true,
            ..StringOptions::default()
        };

        self.ask(|p| {
            let resolved = p.resolve_string(&decorated, &text_options)?;
            if let (true, Some(default)) = (resolved.is_default(), options.default) {
                return Ok(default);
            }
            let value = parse_integer(resolved.value())?;
            if let Some(range) = &options.range {
                check_range(value, range)?;
            }
            Ok(value)
        })
    }
}
