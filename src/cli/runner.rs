use crate::{
    cli::{ChooseArgs, Cli, Commands, IntegerArgs, TextArgs, YesArgs},
    constants::exit_codes,
    error::{Error, Result},
    output::{Output, OutputConfig, Stream},
    prompt::{ChoiceOptions, ConfirmOptions, IntegerOptions, Prompter, StringOptions},
    reader::LineReader,
    style::StyledText,
};
use log::info;
use serde::Serialize;
use std::fmt::Display;

/// An answer collected by one of the subcommands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Text(text) => write!(f, "{text}"),
            Answer::Integer(value) => write!(f, "{value}"),
            Answer::Bool(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Serialize)]
struct JsonAnswer<'a> {
    answer: &'a Answer,
}

/// Runs the selected subcommand and prints its answer.
pub struct Runner {
    cli: Cli,
}

impl Runner {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Display switches from the command line. Prompts always go to stderr so
    /// standard output carries nothing but the answer.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::default()
            .with_colors(self.cli.color)
            .with_errors_to_stderr(!self.cli.errors_to_stdout)
            .with_prompts_to_stderr(true)
    }

    /// Prompt on the terminal. Returns the process exit code.
    pub fn run(self) -> Result<i32> {
        let mut prompter = Prompter::stdio(self.output_config());
        self.run_with(&mut prompter)
    }

    /// Prompt through `prompter`, print the answer on its standard stream and
    /// return the process exit code.
    pub fn run_with<R: LineReader, O: Output>(
        &self,
        prompter: &mut Prompter<R, O>,
    ) -> Result<i32> {
        let answer = self.ask(prompter)?;
        info!("Collected answer: {answer}");

        let line = format_answer(&answer, self.cli.json)?;
        prompter.console().write_line(Stream::Standard, &StyledText::plain(line))?;

        Ok(match (&self.cli.command, &answer) {
            (Commands::Yes(YesArgs { exit_code: true, .. }), Answer::Bool(false)) => {
                exit_codes::FAILURE
            }
            _ => exit_codes::SUCCESS,
        })
    }

    fn ask<R: LineReader, O: Output>(&self, prompter: &mut Prompter<R, O>) -> Result<Answer> {
        match &self.cli.command {
            Commands::Text(args) => {
                prompter.prompt_string(&args.message, &text_options(args)).map(Answer::Text)
            }
            Commands::Integer(args) => prompter
                .prompt_integer(&args.message, &integer_options(args))
                .map(Answer::Integer),
            Commands::Yes(args) => {
                let options = ConfirmOptions { default: args.default.map(bool::from) };
                prompter.yes(&args.message, &options).map(Answer::Bool)
            }
            Commands::Choose(args) => self.choose(prompter, args).map(Answer::Text),
        }
    }

    fn choose<R: LineReader, O: Output>(
        &self,
        prompter: &mut Prompter<R, O>,
        args: &ChooseArgs,
    ) -> Result<String> {
        let choices = args
            .choices
            .iter()
            .map(String::as_str)
            .map(parse_choice_spec)
            .collect::<Result<Vec<_>>>()?;
        let options = ChoiceOptions { default: args.default.clone() };
        prompter.choose(&args.message, &choices, &options)
    }
}

fn text_options(args: &TextArgs) -> StringOptions {
    StringOptions {
        default: args.default.clone(),
        required: args.required,
        error_message: args.error_message.clone(),
        length: args.min_length.zip(args.max_length).map(|(min, max)| min..=max),
    }
}

fn integer_options(args: &IntegerArgs) -> IntegerOptions {
    IntegerOptions {
        default: args.default,
        range: args.min.zip(args.max).map(|(min, max)| min..=max),
    }
}

/// Split `KEY=LABEL`; a bare `LABEL` is its own key.
fn parse_choice_spec(spec: &str) -> Result<(String, String)> {
    match spec.split_once('=') {
        Some((key, label)) if !key.is_empty() && !label.is_empty() => {
            Ok((key.to_string(), label.to_string()))
        }
        Some(_) => Err(Error::ChoiceSpecError(spec.to_string())),
        None if spec.is_empty() => Err(Error::ChoiceSpecError(spec.to_string())),
        None => Ok((spec.to_string(), spec.to_string())),
    }
}

fn format_answer(answer: &Answer, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&JsonAnswer { answer })?)
    } else {
        Ok(answer.to_string())
    }
}
