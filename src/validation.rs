//! Answer validators.
//!
//! Each function takes an already trimmed answer and either accepts it or
//! returns `Error::ValidationError` with the message shown to the user.

use crate::{
    constants::{messages, NO_ANSWERS, YES_ANSWERS},
    error::{Error, Result},
};
use std::ops::RangeInclusive;

fn invalid<T>(message: impl Into<String>) -> Result<T> {
    Err(Error::ValidationError(message.into()))
}

/// Resolve a text answer: empty input falls back to the default (which is
/// returned as-is), or is rejected when a value is required.
pub fn resolve_text(
    answer: &str,
    default: Option<&str>,
    required: bool,
    error_message: Option<&str>,
) -> Result<Resolved> {
    if answer.is_empty() {
        if let Some(default) = default {
            return Ok(Resolved::Default(default.to_string()));
        }
        if required {
            return invalid(error_message.unwrap_or(messages::VALUE_REQUIRED));
        }
    }
    Ok(Resolved::Entered(answer.to_string()))
}

/// Where a resolved text answer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Entered(String),
    Default(String),
}

impl Resolved {
    pub fn value(&self) -> &str {
        match self {
            Resolved::Entered(value) | Resolved::Default(value) => value,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Resolved::Entered(value) | Resolved::Default(value) => value,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Resolved::Default(_))
    }
}

/// Character count must fall within `length`.
pub fn check_length(value: &str, length: &RangeInclusive<usize>) -> Result<()> {
    if length.contains(&value.chars().count()) {
        Ok(())
    } else {
        invalid(format!(
            "The value must be {} to {} characters long.",
            length.start(),
            length.end()
        ))
    }
}

/// The whole answer must be a base-10 integer.
pub fn parse_integer(answer: &str) -> Result<i64> {
    answer.parse::<i64>().or_else(|_| invalid(messages::NOT_AN_INTEGER))
}

pub fn check_range(value: i64, range: &RangeInclusive<i64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        invalid(format!("The value must be between {} and {}.", range.start(), range.end()))
    }
}

/// Map a yes/no answer to a boolean, falling back to `default` on empty input.
pub fn parse_yes_no(answer: &str, default: Option<bool>) -> Result<bool> {
    if YES_ANSWERS.contains(&answer) {
        return Ok(true);
    }
    if NO_ANSWERS.contains(&answer) {
        return Ok(false);
    }
    match default {
        Some(default) if answer.is_empty() => Ok(default),
        _ => invalid(messages::YES_OR_NO),
    }
}

/// Parse a 1-based choice and return it as a 0-based index into `len` items.
pub fn parse_choice(answer: &str, len: usize) -> Result<usize> {
    match answer.parse::<usize>() {
        Ok(position) if (1..=len).contains(&position) => Ok(position - 1),
        _ => invalid(format!("The choice must be an integer between 1 and {len}.")),
    }
}
