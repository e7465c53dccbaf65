use crate::constants::verbosity;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;

/// Answer used when the user just presses enter on a yes/no question.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        };
        write!(f, "{s}")
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        value == YesNo::Yes
    }
}

/// CLI arguments for termprompt.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Render prompts and messages with ANSI colors.
    #[arg(long, global = true)]
    pub color: bool,

    /// Print validation errors on stdout instead of stderr.
    #[arg(long = "errors-to-stdout", global = true)]
    pub errors_to_stdout: bool,

    /// Print the answer as a JSON object.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for free text.
    #[command(name = "string")]
    Text(TextArgs),
    /// Ask for an integer.
    Integer(IntegerArgs),
    /// Ask a yes/no question.
    Yes(YesArgs),
    /// Ask for one entry of a numbered list.
    Choose(ChooseArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    /// Prompt message.
    pub message: String,

    /// Value used when the answer is empty.
    #[arg(long)]
    pub default: Option<String>,

    /// Reject empty answers.
    #[arg(long)]
    pub required: bool,

    /// Message shown when a required answer is empty.
    #[arg(long = "error-message")]
    pub error_message: Option<String>,

    /// Minimum answer length in characters.
    #[arg(long = "min-length", requires = "max_length")]
    pub min_length: Option<usize>,

    /// Maximum answer length in characters.
    #[arg(long = "max-length", requires = "min_length")]
    pub max_length: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct IntegerArgs {
    /// Prompt message.
    pub message: String,

    /// Value used when the answer is empty.
    #[arg(long, allow_hyphen_values = true)]
    pub default: Option<i64>,

    /// Smallest accepted value.
    #[arg(long, requires = "max", allow_hyphen_values = true)]
    pub min: Option<i64>,

    /// Largest accepted value.
    #[arg(long, requires = "min", allow_hyphen_values = true)]
    pub max: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct YesArgs {
    /// Prompt message.
    pub message: String,

    /// Answer used when the user just presses enter.
    #[arg(long, value_enum)]
    pub default: Option<YesNo>,

    /// Exit with status 1 when the answer is no.
    #[arg(long = "exit-code")]
    pub exit_code: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ChooseArgs {
    /// Prompt message.
    pub message: String,

    /// Entries as `KEY=LABEL`, or `LABEL` to use the label as key.
    #[arg(required = true)]
    pub choices: Vec<String>,

    /// Key of the entry picked when the answer is empty.
    #[arg(long)]
    pub default: Option<String>,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn display_yes_no_variants() {
        assert_eq!(YesNo::Yes.to_string(), "yes");
        assert_eq!(YesNo::No.to_string(), "no");
        assert!(bool::from(YesNo::Yes));
        assert!(!bool::from(YesNo::No));
    }

    #[test]
    fn parses_string_command() {
        let cli = Cli::parse_from([
            "termprompt",
            "string",
            "Project name",
            "--default",
            "demo",
            "--min-length",
            "2",
            "--max-length",
            "20",
            "--color",
        ]);
        assert!(cli.color);
        let Commands::Text(args) = cli.command else { panic!("Expected string command") };
        assert_eq!(args.message, "Project name");
        assert_eq!(args.default.as_deref(), Some("demo"));
        assert_eq!((args.min_length, args.max_length), (Some(2), Some(20)));
        assert!(!args.required);
    }

    #[test]
    fn length_bounds_come_in_pairs() {
        let result = Cli::try_parse_from(["termprompt", "string", "Name", "--min-length", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_negative_integer_bounds() {
        let cli = Cli::try_parse_from([
            "termprompt", "integer", "Offset", "--min", "-5", "--max", "5", "--default", "-1",
        ])
        .unwrap();
        let Commands::Integer(args) = cli.command else { panic!("Expected integer command") };
        assert_eq!((args.min, args.max, args.default), (Some(-5), Some(5), Some(-1)));
    }

    #[test]
    fn parses_yes_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "termprompt",
            "yes",
            "Deploy?",
            "--default",
            "no",
            "--exit-code",
            "--json",
            "-vv",
        ]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        let Commands::Yes(args) = cli.command else { panic!("Expected yes command") };
        assert_eq!(args.default, Some(YesNo::No));
        assert!(args.exit_code);
    }

    #[test]
    fn choose_requires_choices() {
        assert!(Cli::try_parse_from(["termprompt", "choose", "Pick"]).is_err());
        let cli = Cli::parse_from(["termprompt", "choose", "Pick", "a=Alpha", "Beta"]);
        let Commands::Choose(args) = cli.command else { panic!("Expected choose command") };
        assert_eq!(args.choices, vec!["a=Alpha".to_string(), "Beta".to_string()]);
    }
}
