//! Styled text: literal runs interleaved with style markers.
//!
//! A [`StyledText`] is rendered left to right. Each marker changes the style
//! of every following text run until a [`Marker::Reset`]. Rendering goes
//! through `console::Style`, which closes every styled run with the reset
//! escape, so a rendered string never leaks styling into what follows it.

use console::Style;

/// A style marker that can be placed between text runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Bold,
    Dim,
    Underline,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Reset,
}

impl Marker {
    fn apply(self, style: Style) -> Style {
        match self {
            Marker::Bold => style.bold(),
            Marker::Dim => style.dim(),
            Marker::Underline => style.underlined(),
            Marker::Red => style.red(),
            Marker::Green => style.green(),
            Marker::Yellow => style.yellow(),
            Marker::Blue => style.blue(),
            Marker::Magenta => style.magenta(),
            Marker::Cyan => style.cyan(),
            Marker::White => style.white(),
            Marker::Reset => Style::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Marker(Marker),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    segments: Vec<Segment>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single unstyled text run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Text(text.into()));
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.segments.push(Segment::Marker(marker));
        self
    }

    /// Render to a string, with ANSI escapes when `colors` is set and as the
    /// plain concatenation of the text runs otherwise.
    pub fn render(&self, colors: bool) -> String {
        let mut current = Style::new().force_styling(colors);
        let mut rendered = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => {
                    rendered.push_str(&current.apply_to(text).to_string());
                }
                Segment::Marker(marker) => {
                    current = marker.apply(current).force_styling(colors);
                }
            }
        }

        rendered
    }
}
