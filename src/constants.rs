//! Constants used throughout termprompt

/// Prompt text shown when asking for a numbered choice
pub const CHOICE_PROMPT: &str = "Choice";

/// Answers accepted by the yes/no prompt. Matching is literal, not case-folded.
pub const YES_ANSWERS: &[&str] = &["y", "Y", "yes", "YES", "Yes"];
pub const NO_ANSWERS: &[&str] = &["n", "N", "no", "NO", "No"];

/// Fixed validation messages
pub mod messages {
    pub const VALUE_REQUIRED: &str = "You must provide a value!";
    pub const NOT_AN_INTEGER: &str = "The value must be an integer.";
    pub const YES_OR_NO: &str = "You must answer yes or no.";
    pub const CHOICE_REQUIRED: &str = "You must make a choice!";
    pub const NOT_TEXT: &str = "The answer must be valid UTF-8 text.";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
