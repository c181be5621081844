//! # Equations
//!
//! An [`Equation`] is a single `number operator number` triple. Operands are
//! non-negative decimals (`^[0-9]+[.]?[0-9]*$`); the operator is one of
//! `+ - * /`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::equation::{Equation, Operator};
//!
//! let eq = Equation::parse_line("6 / 0").unwrap();
//! assert_eq!(eq.operator, Operator::Divide);
//! assert_eq!(eq.rhs, 0.0);
//!
//! // Malformed lines simply do not parse
//! assert!(Equation::parse_line("3 & 2").is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Pattern an operand must match, anchored at both ends.
pub const NUMBER_PATTERN: &str = r"^[0-9]+[.]?[0-9]*$";

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(NUMBER_PATTERN).expect("valid number pattern"));

/// One of the four supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Every operator, in menu order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The operator's symbol as typed by the user
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CalcError::invalid_input("operator", s, "Expected one of +, -, *, /"))
    }
}

/// Check whether `text` is a well-formed operand.
pub fn is_number(text: &str) -> bool {
    NUMBER_RE.is_match(text)
}

/// Parse an operand, rejecting anything outside the operand pattern.
pub fn parse_number(text: &str) -> CalcResult<f64> {
    if !is_number(text) {
        return Err(CalcError::invalid_input(
            "operand",
            text,
            "Expected a non-negative decimal number",
        ));
    }
    text.parse()
        .map_err(|e: std::num::ParseFloatError| CalcError::invalid_input("operand", text, e.to_string()))
}

/// A validated `lhs operator rhs` triple, not yet evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    /// First operand
    pub lhs: f64,

    /// Operator between the operands
    pub operator: Operator,

    /// Second operand
    pub rhs: f64,
}

impl Equation {
    /// Create an equation from already-validated parts
    pub fn new(lhs: f64, operator: Operator, rhs: f64) -> Self {
        Equation { lhs, operator, rhs }
    }

    /// Build an equation from the three raw text fields.
    ///
    /// Operands are whitespace-trimmed; the operator must match exactly.
    pub fn from_fields(lhs: &str, operator: &str, rhs: &str) -> CalcResult<Self> {
        let lhs = parse_number(lhs.trim())?;
        let operator = operator.parse()?;
        let rhs = parse_number(rhs.trim())?;
        Ok(Equation::new(lhs, operator, rhs))
    }

    /// Parse one line of an equation file.
    ///
    /// The line is split on single spaces and must yield exactly three fields.
    /// Returns `None` for anything malformed.
    pub fn parse_line(line: &str) -> Option<Self> {
        Self::try_parse_line(line).ok()
    }

    /// Like [`Equation::parse_line`], but says why a line was rejected.
    pub fn try_parse_line(line: &str) -> CalcResult<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let fields: Vec<&str> = line.split(' ').collect();
        match fields.as_slice() {
            [lhs, operator, rhs] => Equation::from_fields(lhs, operator, rhs),
            _ => Err(CalcError::invalid_input(
                "line",
                line,
                format!("Expected 3 space-separated fields, found {}", fields.len()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_pattern() {
        assert!(is_number("4"));
        assert!(is_number("4.25"));
        assert!(is_number("4."));
        assert!(!is_number(".5"));
        assert!(!is_number("-4"));
        assert!(!is_number("4.2.1"));
        assert!(!is_number(""));
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert!("&".parse::<Operator>().is_err());
        assert!(" +".parse::<Operator>().is_err());
    }

    #[test]
    fn test_parse_valid_line() {
        let eq = Equation::parse_line("4 + 5").unwrap();
        assert_eq!(eq, Equation::new(4.0, Operator::Add, 5.0));

        let eq = Equation::parse_line("2.5 * 4.").unwrap();
        assert_eq!(eq, Equation::new(2.5, Operator::Multiply, 4.0));
    }

    #[test]
    fn test_parse_trims_operands_and_carriage_return() {
        let eq = Equation::parse_line("\t10 - 3\r").unwrap();
        assert_eq!(eq, Equation::new(10.0, Operator::Subtract, 3.0));
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(Equation::parse_line("9 + ").is_none());
        assert!(Equation::parse_line("3 & 2").is_none());
        assert!(Equation::parse_line("4  + 5").is_none());
        assert!(Equation::parse_line("4 + 5 + 6").is_none());
        assert!(Equation::parse_line("4+5").is_none());
        assert!(Equation::parse_line("").is_none());
        assert!(Equation::parse_line("a + 1").is_none());
    }

    #[test]
    fn test_rejection_reason() {
        let err = Equation::try_parse_line("1 2").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_operator_serialization() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"*\"");
    }
}
