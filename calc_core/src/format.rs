//! # Formatting
//!
//! Renders computed equations as `<lhs> <op> <rhs> = <result>` lines.
//! Numbers are rounded to 6 decimal places and lose any trailing zeros and
//! trailing decimal point; zero always renders as `0`.
//!
//! ```rust
//! use calc_core::format::format_number;
//!
//! assert_eq!(format_number(2.5), "2.5");
//! assert_eq!(format_number(3.0), "3");
//! assert_eq!(format_number(0.0), "0");
//! assert_eq!(format_number(1.0 / 3.0), "0.333333");
//! ```

use std::fmt;

use crate::calculations::{ComputedEquation, Outcome};

/// Text shown in place of a result when dividing by zero
pub const DIVISION_BY_ZERO_TEXT: &str = "ERROR. Cannot divide by zero.";

/// Decimal places kept when rendering a number
pub const DECIMAL_PLACES: usize = 6;

/// Render a number rounded to [`DECIMAL_PLACES`] with trailing zeros removed.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let fixed = format!("{:.*}", DECIMAL_PLACES, value);
    if !fixed.contains('.') {
        // inf
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Render an outcome: the trimmed number, or the division-by-zero text.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Value(v) => format_number(*v),
        Outcome::DivisionByZero => DIVISION_BY_ZERO_TEXT.to_string(),
    }
}

impl fmt::Display for ComputedEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.equation.lhs),
            self.equation.operator,
            format_number(self.equation.rhs),
            format_outcome(&self.outcome)
        )
    }
}
