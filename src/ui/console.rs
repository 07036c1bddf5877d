//! Line-oriented console abstraction
//!
//! The session talks to a `Console`; the binary uses `TerminalConsole`,
//! tests use `ScriptedConsole`.

use crate::core::error::Result;
use crate::mood::MoodColor;
use crossterm::style::{Color, Stylize};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

/// How a line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Section banners and companion labels
    Info,
    /// Companion replies and confirmations
    Success,
    /// Recorded values and gentle notices
    Notice,
    /// Invalid input and failures
    Error,
    /// Feature announcements
    Highlight,
    /// A mood-colored line
    Mood(MoodColor),
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Self::Plain => None,
            Self::Info => Some(Color::Cyan),
            Self::Success => Some(Color::Green),
            Self::Notice => Some(Color::Yellow),
            Self::Error => Some(Color::Red),
            Self::Highlight => Some(Color::Magenta),
            Self::Mood(mood) => Some(match mood {
                MoodColor::Red => Color::Red,
                MoodColor::Yellow => Color::Yellow,
                MoodColor::White => Color::White,
                MoodColor::Cyan => Color::Cyan,
                MoodColor::Green => Color::Green,
            }),
        }
    }
}

pub trait Console {
    /// Show `prompt` and read one line without its line ending.
    /// `Ok(None)` means input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn say(&mut self, tone: Tone, text: &str);

    /// Short pause before a reply; consoles without a human may skip it
    fn pause(&mut self, _duration: Duration) {}
}

/// Stdin/stdout console with optional colors
#[derive(Debug, Clone)]
pub struct TerminalConsole {
    color: bool,
}

impl TerminalConsole {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        match tone.color() {
            Some(color) if self.color => text.with(color).to_string(),
            _ => text.to_string(),
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", self.paint(Tone::Success, prompt));
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, tone: Tone, text: &str) {
        println!("{}", self.paint(tone, text));
    }

    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Replays queued input lines and records everything shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<(Tone, String)>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn output(&self) -> &[(Tone, String)] {
        &self.output
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Everything shown, one line per `say`
    pub fn transcript(&self) -> String {
        self.output
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn say(&mut self, tone: Tone, text: &str) {
        self.output.push((tone, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replays_then_closes() {
        let mut console = ScriptedConsole::new(["one", "two"]);
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("one"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("two"));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.prompts().len(), 3);
    }

    #[test]
    fn test_scripted_records_output() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        console.say(Tone::Info, "hello");
        console.say(Tone::Error, "oops");
        assert_eq!(console.transcript(), "hello\noops");
        assert_eq!(console.output()[1].0, Tone::Error);
    }

    #[test]
    fn test_paint_without_color_is_plain() {
        let console = TerminalConsole::new(false);
        assert_eq!(console.paint(Tone::Error, "plain"), "plain");

        let colored = TerminalConsole::new(true);
        assert_ne!(colored.paint(Tone::Error, "red"), "red");
        assert_eq!(colored.paint(Tone::Plain, "plain"), "plain");
    }
}
