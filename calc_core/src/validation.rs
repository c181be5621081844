//! # Input Validation
//!
//! [`InputValidator`] reads console lines until one matches an accepted
//! pattern. Input is trimmed and lower-cased before matching, and a pattern
//! only counts when its match starts at the first character.
//!
//! The validator owns generic reader/writer handles, so the same code runs
//! against stdin/stdout or against in-memory buffers in tests.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::validation::{InputValidator, PatternSet};
//! use std::io::Cursor;
//!
//! let patterns = PatternSet::new(&["^1$", "^m$"]).unwrap();
//! let mut validator = InputValidator::new(Cursor::new("2\n M \n"), Vec::new(), "> ");
//!
//! assert_eq!(validator.read_valid(&patterns).unwrap(), "m");
//! ```

use std::io::{BufRead, Write};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::equation::NUMBER_PATTERN;
use crate::errors::{CalcError, CalcResult};

/// Message printed after every rejected line
pub const INVALID_OPTION_TEXT: &str = "Invalid option. Try again.";

/// A non-empty set of accepted input patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile a pattern set.
    pub fn new(patterns: &[&str]) -> CalcResult<Self> {
        if patterns.is_empty() {
            return Err(CalcError::invalid_input("patterns", "[]", "At least one pattern is required"));
        }
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).map_err(|e| CalcError::invalid_input("pattern", *p, e.to_string())))
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(PatternSet { patterns })
    }

    /// Check whether any pattern matches `input` starting at its first character.
    pub fn accepts(&self, input: &str) -> bool {
        self.patterns
            .iter()
            .any(|re| re.find(input).is_some_and(|m| m.start() == 0))
    }
}

fn builtin(patterns: &[&str]) -> PatternSet {
    PatternSet::new(patterns).expect("built-in patterns are valid")
}

/// Main menu selections: a digit or the option's initial.
pub static MENU_PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    builtin(&[
        "^1$", "^2$", "^3$", "^4$", "^5$", "^m$", "^r$", "^d$", "^h$", "^e$",
    ])
});

/// A non-negative decimal operand.
pub static NUMBER_PATTERNS: Lazy<PatternSet> = Lazy::new(|| builtin(&[NUMBER_PATTERN]));

/// One of the four operator symbols.
pub static OPERATOR_PATTERNS: Lazy<PatternSet> =
    Lazy::new(|| builtin(&[r"^\+$", r"^\-$", r"^\*$", r"^/$"]));

/// Line-oriented console prompter.
pub struct InputValidator<R, W> {
    reader: R,
    writer: W,
    prompt: String,
}

impl<R: BufRead, W: Write> InputValidator<R, W> {
    pub fn new(reader: R, writer: W, prompt: impl Into<String>) -> Self {
        InputValidator {
            reader,
            writer,
            prompt: prompt.into(),
        }
    }

    /// Consume the validator, returning the output handle
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print a full line of output.
    pub fn say(&mut self, text: &str) -> CalcResult<()> {
        writeln!(self.writer, "{}", text).map_err(console_error)
    }

    /// Write raw bytes followed by a newline.
    pub fn say_bytes(&mut self, bytes: &[u8]) -> CalcResult<()> {
        self.writer
            .write_all(bytes)
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(console_error)
    }

    /// Print the prompt and read one raw line, without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// such a line simply fails to match any pattern.
    /// Returns [`CalcError::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> CalcResult<String> {
        write!(self.writer, "{}", self.prompt).map_err(console_error)?;
        self.writer.flush().map_err(console_error)?;

        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf).map_err(console_error)?;
        if read == 0 {
            return Err(CalcError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Prompt until a line (trimmed, lower-cased) is accepted by `patterns`.
    pub fn read_valid(&mut self, patterns: &PatternSet) -> CalcResult<String> {
        loop {
            let input = self.read_line()?.trim().to_lowercase();
            if patterns.accepts(&input) {
                return Ok(input);
            }
            debug!(%input, "rejected input");
            self.say(INVALID_OPTION_TEXT)?;
        }
    }
}

fn console_error(e: std::io::Error) -> CalcError {
    CalcError::console(e.to_string())
}
