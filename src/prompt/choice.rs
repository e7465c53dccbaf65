use super::{ChoiceOptions, Prompter, StringOptions};
use crate::{
    constants::{messages, CHOICE_PROMPT},
    error::{Error, Result},
    output::Output,
    reader::LineReader,
    style::StyledText,
    validation::parse_choice,
};
use log::debug;
use std::fmt::Display;

impl<R: LineReader, O: Output> Prompter<R, O> {
    /// Ask the user to pick one entry of `choices` by its 1-based position.
    ///
    /// The message and the numbered labels are printed before every attempt.
    /// Returns the key of the picked entry.
    ///
    /// # Errors
    /// `Error::EmptyChoiceList` if `choices` is empty; nothing is printed.
    pub fn choose<K, L>(
        &mut self,
        message: &str,
        choices: &[(K, L)],
        options: &ChoiceOptions<K>,
    ) -> Result<K>
    where
        K: PartialEq + Clone,
        L: Display,
    {
        if choices.is_empty() {
            return Err(Error::EmptyChoiceList);
        }

        let text_options = StringOptions {
            default: find_default_position(choices, options.default.as_ref())
                .map(|position| position.to_string()),
            required: true,
            error_message: Some(messages::CHOICE_REQUIRED.to_string()),
            length: None,
        };
        debug!("Default choice position: {:?}", text_options.default);

        self.ask(|p| {
            p.print_choices(message, choices)?;
            let answer = p.prompt_string(CHOICE_PROMPT, &text_options)?;
            let index = parse_choice(&answer, choices.len())?;
            Ok(choices[index].0.clone())
        })
    }

    fn print_choices<K, L: Display>(
        &mut self,
        message: &str,
        choices: &[(K, L)],
    ) -> Result<()> {
        let stream = self.console.prompt_stream();
        self.console.write_line(stream, &StyledText::plain(message))?;
        self.console.write_line(stream, &StyledText::new())?;
        for (position, (_, label)) in choices.iter().enumerate() {
            let line = format!("  {}. {}", position + 1, label);
            self.console.write_line(stream, &StyledText::plain(line))?;
        }
        self.console.write_line(stream, &StyledText::new())
    }
}

/// 1-based position of the first entry keyed `default`.
fn find_default_position<K: PartialEq, L>(
    choices: &[(K, L)],
    default: Option<&K>,
) -> Option<usize> {
    let default = default?;
    choices.iter().position(|(key, _)| key == default).map(|index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{Captured, Console, OutputConfig};
    use test_log::test;

    const AB: &[(&str, &str)] = &[("a", "A"), ("b", "B")];

    type Key = &'static str;

    fn run(
        input: &str,
        choices: &[(Key, &str)],
        options: &ChoiceOptions<Key>,
    ) -> (Result<Key>, Captured) {
        let mut out = Captured::default();
        let console = Console::new(&mut out, OutputConfig::default());
        let answer = Prompter::new(input.as_bytes(), console)
            .choose("Pick one", choices, options);
        (answer, out)
    }

    #[test]
    fn returns_key_at_position() {
        let (answer, out) = run("2\n", AB, &ChoiceOptions::new());
        assert_eq!(answer.unwrap(), "b");
        assert_eq!(out.stdout, "Pick one\n\n  1. A\n  2. B\n\nChoice: ");
    }

    #[test]
    fn out_of_range_reprints_whole_list() {
        let (answer, out) = run("3\n1\n", AB, &ChoiceOptions::new());
        assert_eq!(answer.unwrap(), "a");
        assert_eq!(out.stderr, "The choice must be an integer between 1 and 2.\n");
        assert_eq!(out.stdout, "Pick one\n\n  1. A\n  2. B\n\nChoice: ".repeat(2));
    }

    #[test]
    fn non_numeric_answer_is_a_range_error() {
        let (answer, out) = run("b\n2\n", AB, &ChoiceOptions::new());
        assert_eq!(answer.unwrap(), "b");
        assert_eq!(out.stderr, "The choice must be an integer between 1 and 2.\n");
    }

    #[test]
    fn empty_answer_without_default_asks_for_a_choice() {
        let (answer, out) = run("\n1\n", AB, &ChoiceOptions::new());
        assert_eq!(answer.unwrap(), "a");
        assert_eq!(out.stderr, format!("{}\n", messages::CHOICE_REQUIRED));
    }

    #[test]
    fn default_key_becomes_default_position() {
        let (answer, out) = run("\n", AB, &ChoiceOptions::new().with_default("b"));
        assert_eq!(answer.unwrap(), "b");
        assert!(out.stdout.ends_with("Choice [2]: "));
    }

    #[test]
    fn unknown_default_key_is_ignored() {
        let (_, out) = run("1\n", AB, &ChoiceOptions::new().with_default("z"));
        assert!(out.stdout.ends_with("Choice: "));
    }

    #[test]
    fn list_and_prompt_follow_the_prompt_stream() {
        let mut out = Captured::default();
        let config = OutputConfig::default().with_prompts_to_stderr(true);
        let answer = Prompter::new("2\n".as_bytes(), Console::new(&mut out, config))
            .choose("Pick one", AB, &ChoiceOptions::new());
        assert_eq!(answer.unwrap(), "b");
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr, "Pick one\n\n  1. A\n  2. B\n\nChoice: ");
    }

    #[test]
    fn duplicate_keys_default_to_first_match() {
        let choices = [("x", "first"), ("x", "second")];
        assert_eq!(find_default_position(&choices, Some(&"x")), Some(1));
    }

    #[test]
    fn empty_list_is_a_contract_violation() {
        let (answer, out) = run("1\n", &[], &ChoiceOptions::new());
        assert!(matches!(answer, Err(Error::EmptyChoiceList)));
        assert!(out.stdout.is_empty());
    }
}
