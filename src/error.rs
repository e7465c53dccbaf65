use crate::{
    constants::exit_codes,
    output::{Console, OutputConfig},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// A rejected answer. Prompts catch this variant, report the message and
    /// ask again, so it never escapes a public prompt function.
    #[error("{0}")]
    ValidationError(String),

    /// The line reader ran out of input before a valid answer was given.
    #[error("Input ended before a valid answer was given.")]
    EndOfInput,

    /// `choose` was called with nothing to choose from.
    #[error("Cannot prompt for a choice: the choice list is empty.")]
    EmptyChoiceList,

    #[error("Invalid choice '{0}'. Expected KEY=LABEL or LABEL.")]
    ChoiceSpecError(String),

    #[error("Failed to serialize answer. Original error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with this crate's error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
/// * `config` - Display switches chosen on the command line
///
/// # Behavior
/// Prints the error message with the console's error style, on the stream and
/// with the colors chosen by `config`, and exits with status code 1
pub fn default_error_handler(err: Error, config: OutputConfig) -> ! {
    Console::stdio(config).halt(&err.to_string(), exit_codes::FAILURE)
}
