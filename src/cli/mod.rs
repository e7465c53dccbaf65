pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, ChooseArgs, Cli, Commands, IntegerArgs, TextArgs,
    YesArgs, YesNo,
};
pub use runner::{Answer, Runner};
