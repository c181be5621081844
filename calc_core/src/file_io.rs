//! # File I/O Module
//!
//! Handles the three files the calculator touches:
//! - **Equation files**: one `number operator number` per line, read in bulk
//! - **Display files**: any text file, echoed verbatim
//! - **Equation log**: append-only record of every computed equation
//!
//! A missing input file is reported as [`CalcError::FileNotFound`], which is
//! distinct from a file that exists but holds no valid equations.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::calculations::ComputedEquation;
//! use calc_core::file_io::{read_equations, EquationLog};
//! use std::path::Path;
//!
//! let file = read_equations(Path::new("input.txt"))?;
//! let log = EquationLog::new("equations.txt");
//! for equation in file.equations {
//!     log.append(&ComputedEquation::compute(equation))?;
//! }
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, info};

use crate::calculations::ComputedEquation;
use crate::equation::Equation;
use crate::errors::{CalcError, CalcResult};

/// Equations parsed from a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquationFile {
    /// Valid equations, in file order
    pub equations: Vec<Equation>,

    /// Number of lines that were not valid equations
    pub skipped: usize,
}

impl EquationFile {
    /// Parse the contents of an equation file.
    ///
    /// Malformed lines are dropped; only their count is kept.
    pub fn parse(contents: &str) -> Self {
        let mut file = EquationFile::default();
        // A trailing newline does not start another line
        let body = contents.strip_suffix('\n').unwrap_or(contents);
        if body.is_empty() {
            return file;
        }
        for (index, line) in body.split('\n').enumerate() {
            match Equation::try_parse_line(line) {
                Ok(equation) => file.equations.push(equation),
                Err(reason) => {
                    debug!(line = index + 1, %reason, "skipping malformed equation line");
                    file.skipped += 1;
                }
            }
        }
        file
    }
}

/// Read and parse an equation file.
///
/// # Returns
///
/// * `Ok(EquationFile)` - Valid equations (possibly none)
/// * `Err(CalcError::FileNotFound)` - No such file
/// * `Err(CalcError::FileError)` - Any other I/O failure
pub fn read_equations(path: &Path) -> CalcResult<EquationFile> {
    let contents = read_text(path)?;
    let file = EquationFile::parse(&contents);
    info!(
        path = %path.display(),
        equations = file.equations.len(),
        skipped = file.skipped,
        "read equation file"
    );
    Ok(file)
}

/// Read a whole file for display, byte for byte.
pub fn read_file_contents(path: &Path) -> CalcResult<Vec<u8>> {
    fs::read(path).map_err(|e| CalcError::from_io("read", path.display().to_string(), &e))
}

fn read_text(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path).map_err(|e| CalcError::from_io("read", path.display().to_string(), &e))
}

/// Append-only equation log.
///
/// The file is opened, locked, written and closed for every entry; no
/// handle outlives a single append.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationLog {
    path: PathBuf,
}

impl EquationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EquationLog { path: path.into() }
    }

    /// Append one computed equation, preceded by a newline.
    ///
    /// Creates the file if absent; never truncates existing content.
    pub fn append(&self, computed: &ComputedEquation) -> CalcResult<()> {
        self.append_line(&computed.to_string())
    }

    /// Append an already-rendered line, preceded by a newline.
    ///
    /// The lock is released when the file is closed at the end of the call.
    pub fn append_line(&self, line: &str) -> CalcResult<()> {
        let display_path = self.path.display().to_string();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CalcError::file_error("open log", &display_path, e.to_string()))?;

        // Exclusive OS-level lock for the duration of the write
        file.lock_exclusive()
            .map_err(|e| CalcError::file_error("lock log", &display_path, e.to_string()))?;

        write!(file, "\n{}", line)
            .and_then(|_| file.flush())
            .map_err(|e| CalcError::file_error("write log", &display_path, e.to_string()))?;

        info!(path = %display_path, %line, "appended equation to log");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::Operator;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("calc_file_io_test_{}_{}.txt", name, std::process::id()))
    }

    #[test]
    fn test_parse_drops_malformed_lines() {
        let file = EquationFile::parse("4 + 5\n9 + \n3 & 2\n6 / 0\n");
        assert_eq!(
            file.equations,
            vec![
                Equation::new(4.0, Operator::Add, 5.0),
                Equation::new(6.0, Operator::Divide, 0.0),
            ]
        );
        assert_eq!(file.skipped, 2);
    }

    #[test]
    fn test_parse_empty_and_crlf() {
        assert_eq!(EquationFile::parse(""), EquationFile::default());

        let file = EquationFile::parse("1 * 2\r\n3 - 1");
        assert_eq!(file.equations.len(), 2);
        assert_eq!(file.skipped, 0);
    }

    #[test]
    fn test_read_equations_from_file() {
        let path = temp_path("read");
        fs::write(&path, "4 + 5\n9 + \n3 & 2\n6 / 0\n").unwrap();

        let file = read_equations(&path).unwrap();
        assert_eq!(file.equations.len(), 2);
        assert_eq!(file.equations[1].operator, Operator::Divide);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_equations_not_found() {
        let path = temp_path("does_not_exist");
        let err = read_equations(&path).unwrap_err();
        assert_eq!(err, CalcError::file_not_found(path.display().to_string()));
    }

    #[test]
    fn test_read_file_contents_verbatim() {
        let path = temp_path("display");
        fs::write(&path, b"line one\n  line two\xff\n").unwrap();
        assert_eq!(read_file_contents(&path).unwrap(), b"line one\n  line two\xff\n".to_vec());
        let _ = fs::remove_file(&path);

        assert!(matches!(read_file_contents(&path), Err(CalcError::FileNotFound { .. })));
    }

    #[test]
    fn test_log_appends_in_order() {
        let path = temp_path("log_order");
        fs::write(&path, "existing").unwrap();

        let log = EquationLog::new(&path);
        let computed = ComputedEquation::compute(Equation::new(4.0, Operator::Add, 5.0));
        log.append(&computed).unwrap();
        log.append(&computed).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "existing\n4 + 5 = 9\n4 + 5 = 9");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_log_append_to_directory_fails() {
        let log = EquationLog::new(temp_dir());
        let computed = ComputedEquation::compute(Equation::new(1.0, Operator::Add, 1.0));
        let err = log.append(&computed).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_log_creates_missing_file() {
        let path = temp_path("log_create");
        let _ = fs::remove_file(&path);

        let log = EquationLog::new(&path);
        let computed = ComputedEquation::compute(Equation::new(5.0, Operator::Divide, 0.0));
        log.append(&computed).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "\n5 / 0 = ERROR. Cannot divide by zero.");

        let _ = fs::remove_file(&path);
    }
}
