//! Per-prompt option structs. Every field is optional; `Default` means "no
//! constraint".

use std::ops::RangeInclusive;

/// Options for free-text prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringOptions {
    /// Returned verbatim on empty input, without length checking.
    pub default: Option<String>,
    /// Reject empty input when there is no default.
    pub required: bool,
    /// Replaces the message shown when a required value is missing.
    pub error_message: Option<String>,
    /// Accepted character count, inclusive.
    pub length: Option<RangeInclusive<usize>>,
}

impl StringOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    pub fn with_length(mut self, length: RangeInclusive<usize>) -> Self {
        self.length = Some(length);
        self
    }
}

/// Options for integer prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerOptions {
    /// Returned on empty input, without range checking.
    pub default: Option<i64>,
    /// Accepted values, inclusive.
    pub range: Option<RangeInclusive<i64>>,
}

impl IntegerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.range = Some(range);
        self
    }
}

/// Options for yes/no prompts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub default: Option<bool>,
}

impl ConfirmOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }
}

/// Options for choice prompts, keyed by the choice list's key type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOptions<K> {
    /// Key of the entry selected on empty input.
    pub default: Option<K>,
}

impl<K> Default for ChoiceOptions<K> {
    fn default() -> Self {
        Self { default: None }
    }
}

impl<K> ChoiceOptions<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, default: K) -> Self {
        self.default = Some(default);
        self
    }
}
