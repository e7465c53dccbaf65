//! Output sinks and the console that renders styled lines into them.

use crate::{
    constants::exit_codes,
    error::Result,
    style::{Marker, StyledText},
};
use console::Term;
use std::io;

/// Destination stream for a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Standard,
    Error,
}

/// Display switches. Owned by a [`Console`] rather than held globally, so two
/// consoles in one process can be configured independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit ANSI escape codes for styled text.
    pub colors: bool,
    /// Send error lines to the error stream instead of the standard stream.
    pub errors_to_stderr: bool,
    /// Send prompt text and choice lists to the error stream, leaving the
    /// standard stream to whatever the caller prints with the answer.
    pub prompts_to_stderr: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { colors: false, errors_to_stderr: true, prompts_to_stderr: false }
    }
}

impl OutputConfig {
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_errors_to_stderr(mut self, errors_to_stderr: bool) -> Self {
        self.errors_to_stderr = errors_to_stderr;
        self
    }

    pub fn with_prompts_to_stderr(mut self, prompts_to_stderr: bool) -> Self {
        self.prompts_to_stderr = prompts_to_stderr;
        self
    }
}

/// Something text can be written to.
pub trait Output {
    fn write_str(&mut self, stream: Stream, text: &str) -> io::Result<()>;
}

impl<O: Output + ?Sized> Output for &mut O {
    fn write_str(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        (**self).write_str(stream, text)
    }
}

/// Writes to the process's standard and error streams.
#[derive(Debug, Clone)]
pub struct Terminal {
    stdout: Term,
    stderr: Term,
}

impl Terminal {
    pub fn new() -> Self {
        Self { stdout: Term::stdout(), stderr: Term::stderr() }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for Terminal {
    fn write_str(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        let term = match stream {
            Stream::Standard => &self.stdout,
            Stream::Error => &self.stderr,
        };
        term.write_str(text)?;
        term.flush()
    }
}

/// Records everything written, one string per stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
}

impl Output for Captured {
    fn write_str(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        match stream {
            Stream::Standard => self.stdout.push_str(text),
            Stream::Error => self.stderr.push_str(text),
        }
        Ok(())
    }
}

/// Renders styled text according to an [`OutputConfig`] and writes it out.
pub struct Console<O: Output = Terminal> {
    sink: O,
    config: OutputConfig,
}

impl Console<Terminal> {
    pub fn stdio(config: OutputConfig) -> Self {
        Self::new(Terminal::new(), config)
    }
}

impl<O: Output> Console<O> {
    pub fn new(sink: O, config: OutputConfig) -> Self {
        Self { sink, config }
    }

    pub fn sink(&self) -> &O {
        &self.sink
    }

    /// The stream error lines are routed to.
    pub fn error_stream(&self) -> Stream {
        if self.config.errors_to_stderr {
            Stream::Error
        } else {
            Stream::Standard
        }
    }

    /// The stream prompt text is routed to.
    pub fn prompt_stream(&self) -> Stream {
        if self.config.prompts_to_stderr {
            Stream::Error
        } else {
            Stream::Standard
        }
    }

    /// Write prompt text to the prompt stream without a trailing newline.
    pub fn print(&mut self, text: &StyledText) -> Result<()> {
        let rendered = text.render(self.config.colors);
        self.sink.write_str(self.prompt_stream(), &rendered)?;
        Ok(())
    }

    /// Write text followed by a single newline.
    pub fn write_line(&mut self, stream: Stream, text: &StyledText) -> Result<()> {
        let mut rendered = text.render(self.config.colors);
        rendered.push('\n');
        self.sink.write_str(stream, &rendered)?;
        Ok(())
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        self.status(Stream::Standard, &[Marker::Cyan], message)
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        self.status(Stream::Standard, &[Marker::Green], message)
    }

    pub fn warning(&mut self, message: &str) -> Result<()> {
        self.status(Stream::Standard, &[Marker::Yellow], message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        let stream = self.error_stream();
        self.status(stream, &[Marker::Red, Marker::Bold], message)
    }

    fn status(&mut self, stream: Stream, markers: &[Marker], message: &str) -> Result<()> {
        let text = markers
            .iter()
            .fold(StyledText::new(), |text, marker| text.marker(*marker))
            .text(message);
        self.write_line(stream, &text)
    }

    /// Print `message` and terminate the process with `code`.
    ///
    /// Non-zero codes print the message as an error.
    pub fn halt(&mut self, message: &str, code: i32) -> ! {
        let written = if code == exit_codes::SUCCESS {
            self.write_line(Stream::Standard, &StyledText::plain(message))
        } else {
            self.error(message)
        };
        if let Err(err) = written {
            eprintln!("{message} ({err})");
        }
        std::process::exit(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn captured(config: OutputConfig) -> Console<Captured> {
        Console::new(Captured::default(), config)
    }

    #[test]
    fn write_line_appends_one_newline() {
        let mut console = captured(OutputConfig::default());
        console.write_line(Stream::Standard, &StyledText::plain("hello")).unwrap();
        assert_eq!(console.sink().stdout, "hello\n");
        assert!(console.sink().stderr.is_empty());
    }

    #[test]
    fn print_has_no_newline() {
        let mut console = captured(OutputConfig::default());
        console.print(&StyledText::plain("Name: ")).unwrap();
        assert_eq!(console.sink().stdout, "Name: ");
    }

    #[test]
    fn prompts_can_be_routed_to_stderr() {
        let mut console = captured(OutputConfig::default().with_prompts_to_stderr(true));
        console.print(&StyledText::plain("Name: ")).unwrap();
        console.write_line(Stream::Standard, &StyledText::plain("anon")).unwrap();
        assert_eq!(console.sink().stderr, "Name: ");
        assert_eq!(console.sink().stdout, "anon\n");
    }

    #[test]
    fn errors_go_to_stderr_by_default() {
        let mut console = captured(OutputConfig::default());
        console.error("bad").unwrap();
        assert_eq!(console.sink().stderr, "bad\n");
        assert!(console.sink().stdout.is_empty());
    }

    #[test]
    fn errors_can_be_routed_to_stdout() {
        let mut console = captured(OutputConfig::default().with_errors_to_stderr(false));
        console.error("bad").unwrap();
        assert_eq!(console.sink().stdout, "bad\n");
        assert!(console.sink().stderr.is_empty());
    }

    #[test]
    fn status_lines_are_colored_only_when_enabled() {
        let mut plain = captured(OutputConfig::default());
        plain.success("done").unwrap();
        assert_eq!(plain.sink().stdout, "done\n");

        let mut colored = captured(OutputConfig::default().with_colors(true));
        colored.success("done").unwrap();
        assert!(colored.sink().stdout.contains("\u{1b}[32m"));
        assert!(colored.sink().stdout.ends_with("\u{1b}[0m\n"));
    }

    #[test]
    fn consoles_do_not_share_configuration() {
        let mut first = captured(OutputConfig::default().with_colors(true));
        let mut second = captured(OutputConfig::default());
        first.warning("w").unwrap();
        second.warning("w").unwrap();
        assert_ne!(first.sink().stdout, second.sink().stdout);
        assert_eq!(second.sink().stdout, "w\n");
    }
}
