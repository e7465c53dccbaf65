/// Handles argument parsing and the `termprompt` binary's workflow.
pub mod cli;

/// Shared constants: fixed messages, accepted answers, exit codes.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Output sinks, display switches and color-coded status lines.
pub mod output;

/// Interactive prompts with validation and retry.
pub mod prompt;

/// Line-at-a-time input sources.
pub mod reader;

/// Text runs interleaved with style markers.
pub mod style;

/// Answer validators
pub mod validation;

pub use prompt::{
    choose, prompt_integer, prompt_string, yes, ChoiceOptions, ConfirmOptions, IntegerOptions,
    Prompter, StringOptions,
};
