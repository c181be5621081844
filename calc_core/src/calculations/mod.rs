//! # Calculations
//!
//! Evaluates an [`Equation`] into an [`Outcome`]. Follows the pattern:
//!
//! - [`Equation`] - Input triple
//! - [`ComputedEquation`] - Input plus its outcome
//! - `calculate(input) -> Outcome` - Pure calculation function
//!
//! Division by zero is a regular outcome rather than an error, so a batch
//! of equations keeps going past it.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{calculate, Outcome};
//! use calc_core::equation::{Equation, Operator};
//!
//! assert_eq!(calculate(&Equation::new(7.0, Operator::Multiply, 6.0)), Outcome::Value(42.0));
//! assert_eq!(calculate(&Equation::new(5.0, Operator::Divide, 0.0)), Outcome::DivisionByZero);
//! ```

use serde::{Deserialize, Serialize};

use crate::equation::{Equation, Operator};

/// Result of evaluating one equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Outcome {
    /// A numeric result
    Value(f64),
    /// The right-hand operand of a division was zero
    DivisionByZero,
}

impl Outcome {
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Outcome::DivisionByZero)
    }
}

/// An equation together with its computed outcome.
///
/// This is the only thing that gets rendered and written to the log, so a
/// log entry always has validated operands and a computed result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedEquation {
    pub equation: Equation,
    pub outcome: Outcome,
}

impl ComputedEquation {
    /// Evaluate `equation` and pair it with the outcome
    pub fn compute(equation: Equation) -> Self {
        ComputedEquation {
            equation,
            outcome: calculate(&equation),
        }
    }
}

/// Evaluate a single equation with IEEE-754 double arithmetic.
pub fn calculate(equation: &Equation) -> Outcome {
    let Equation { lhs, operator, rhs } = *equation;
    match operator {
        Operator::Add => Outcome::Value(lhs + rhs),
        Operator::Subtract => Outcome::Value(lhs - rhs),
        Operator::Multiply => Outcome::Value(lhs * rhs),
        Operator::Divide if rhs == 0.0 => Outcome::DivisionByZero,
        Operator::Divide => Outcome::Value(lhs / rhs),
    }
}
