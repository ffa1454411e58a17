//! Interactive terminal prompts.
//!
//! Every method returns `Ok(None)` once input is exhausted (Ctrl-D or a
//! closed pipe) so callers can stop cleanly instead of failing.

use aniracetam_core::Quality;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

pub type Result<T> = std::result::Result<T, PromptError>;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Banner,
    Info,
    Success,
    Warning,
    Error,
}

/// Everything the application needs from the person at the keyboard.
pub trait Prompt {
    /// Print a message.
    fn say(&mut self, tone: Tone, message: &str) -> Result<()>;

    /// Ask for a line of free text.
    fn input(&mut self, message: &str) -> Result<Option<String>>;

    /// Ask for one of `choices`, returning its index.
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<Option<usize>>;

    /// Ask for a non-empty line, repeating `retry` until one is given.
    fn required_input(&mut self, message: &str, retry: &str) -> Result<Option<String>> {
        loop {
            match self.input(message)? {
                None => return Ok(None),
                Some(answer) if !answer.trim().is_empty() => {
                    return Ok(Some(answer.trim().to_string()))
                }
                Some(_) => self.say(Tone::Warning, retry)?,
            }
        }
    }

    /// Ask how well the answer was recalled.
    fn quality(&mut self, message: &str) -> Result<Option<Quality>> {
        let labels: Vec<String> = Quality::ALL
            .iter()
            .map(|q| format!("{} ({}) - {}", q.label(), q.value(), q.description()))
            .collect();
        self.say(Tone::Plain, message)?;
        for label in &labels {
            self.say(Tone::Plain, &format!("  {label}"))?;
        }
        loop {
            let Some(answer) = self.input("Grade (0-3):")? else {
                return Ok(None);
            };
            match parse_quality(&answer) {
                Some(quality) => return Ok(Some(quality)),
                None => self.say(Tone::Warning, "Please enter 0, 1, 2 or 3.")?,
            }
        }
    }
}

/// Accepts the grade number or its label, case-insensitively.
pub fn parse_quality(answer: &str) -> Option<Quality> {
    let answer = answer.trim();
    if let Ok(value) = answer.parse::<u8>() {
        return Quality::from_value(value).ok();
    }
    Quality::ALL
        .into_iter()
        .find(|q| q.label().eq_ignore_ascii_case(answer))
}

/// Line-based prompt over any reader/writer pair.
pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
    color: bool,
}

impl TerminalPrompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(reader: R, writer: W, color: bool) -> Self {
        Self {
            reader,
            writer,
            color,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn styled(&self, tone: Tone, message: &str) -> String {
        if !self.color {
            return message.to_string();
        }
        match tone {
            Tone::Plain => message.to_string(),
            Tone::Banner => message.blue().to_string(),
            Tone::Info => message.cyan().to_string(),
            Tone::Success => message.green().to_string(),
            Tone::Warning => message.yellow().to_string(),
            Tone::Error => message.red().to_string(),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn say(&mut self, tone: Tone, message: &str) -> Result<()> {
        let text = self.styled(tone, message);
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    fn input(&mut self, message: &str) -> Result<Option<String>> {
        let question = if self.color {
            format!("{} {} ", "?".green(), message.bold())
        } else {
            format!("? {message} ")
        };
        write!(self.writer, "{question}")?;
        self.writer.flush()?;
        self.read_line()
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<Option<usize>> {
        self.say(Tone::Plain, message)?;
        for (idx, choice) in choices.iter().enumerate() {
            self.say(Tone::Plain, &format!("  {}. {choice}", idx + 1))?;
        }
        loop {
            let Some(answer) = self.input(&format!("Choose 1-{}:", choices.len()))? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => self.say(
                    Tone::Warning,
                    &format!("Please enter a number between 1 and {}.", choices.len()),
                )?,
            }
        }
    }
}
