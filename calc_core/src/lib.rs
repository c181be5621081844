//! # calc_core - Arithmetic Equation Engine
//!
//! `calc_core` holds everything the calculator does apart from drawing the
//! menu: parsing `number operator number` equations, evaluating them,
//! rendering results, and appending them to an equation log.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Explicit outcomes**: Division by zero is an [`calculations::Outcome`] variant, not a panic
//! - **Rich Errors**: Structured error types, not just strings
//! - **I/O at the edges**: Console access goes through caller-supplied readers/writers
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::ComputedEquation;
//! use calc_core::equation::Equation;
//!
//! let equation = Equation::parse_line("6 / 4").unwrap();
//! let computed = ComputedEquation::compute(equation);
//! assert_eq!(computed.to_string(), "6 / 4 = 1.5");
//! ```
//!
//! ## Modules
//!
//! - [`equation`] - Equation triples and operand/operator parsing
//! - [`calculations`] - Evaluation into numeric or division-by-zero outcomes
//! - [`format`] - Number trimming and equation line rendering
//! - [`file_io`] - Equation file reader, file display and the append-only log
//! - [`validation`] - Read-until-valid console input
//! - [`settings`] - Runtime configuration
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equation;
pub mod errors;
pub mod file_io;
pub mod format;
pub mod settings;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, ComputedEquation, Outcome};
pub use equation::{Equation, Operator};
pub use errors::{CalcError, CalcResult};
pub use file_io::{read_equations, read_file_contents, EquationFile, EquationLog};
pub use settings::{load_settings, CalculatorSettings};
pub use validation::{InputValidator, PatternSet};
