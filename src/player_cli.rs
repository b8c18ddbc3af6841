#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;
use std::thread;
use std::time::Duration;

use crate::{
    common::MoveError,
    config::{DEFAULT_DELAY_MS, NUM_CELLS},
    game::Game,
};
use rand::rngs::SmallRng;

use crate::player::MoveSource;

const MOVE_PROMPT: &str = "Choose a move [1-9]: ";
const NOT_A_NUMBER: &str = "That's not even a number!";
const INVALID_MOVE: &str = "Come on! Choose a valid move!";

/// Problems with a line typed at the move prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line is not an integer.
    NotANumber(String),
    /// The number is outside 1..=9.
    OutOfRange(i64),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber(s) => write!(f, "'{}' is not a number", s),
            InputError::OutOfRange(n) => write!(f, "{} is not between 1 and {}", n, NUM_CELLS),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a 1-based cell number typed by a person into a 0-based index.
pub fn parse_move(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if n < 1 || n > NUM_CELLS as i64 {
        return Err(InputError::OutOfRange(n));
    }
    Ok(n as usize - 1)
}

/// A person at a terminal: reads moves from `input` and draws the game on
/// `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    delay: Duration,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Console player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Pause for `delay` after each board is drawn.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Print `line` followed by a newline.
    pub fn say(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` and read one line, without its trailing newline. End
    /// of input is an error.
    pub fn prompt(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Give back the underlying writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MoveSource for CliPlayer<R, W> {
    fn select_move(&mut self, _game: &Game, _rng: &mut SmallRng) -> anyhow::Result<usize> {
        loop {
            let line = self.prompt(MOVE_PROMPT)?;
            match parse_move(&line) {
                Ok(index) => return Ok(index),
                Err(InputError::NotANumber(_)) => self.say(NOT_A_NUMBER)?,
                Err(InputError::OutOfRange(_)) => self.say(INVALID_MOVE)?,
            }
        }
    }

    fn move_rejected(&mut self, _index: usize, _err: MoveError) -> anyhow::Result<()> {
        self.say(INVALID_MOVE)
    }

    fn announce(&mut self, line: &str) -> anyhow::Result<()> {
        self.say(line)
    }

    fn show_board(&mut self, rendered: &str) -> anyhow::Result<()> {
        self.say(rendered)?;
        self.output.flush()?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}
