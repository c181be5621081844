//! Interactive session: the main menu loop and its three modes.
//!
//! Every mode returns to the menu when it finishes. Missing files are
//! reported and the loop continues; only an Exit selection (or the console
//! closing) ends the session.

use std::io::{BufRead, Write};
use std::path::Path;

use calc_core::calculations::ComputedEquation;
use calc_core::equation::{parse_number, Equation, Operator};
use calc_core::errors::{CalcError, CalcResult};
use calc_core::file_io::{read_equations, read_file_contents, EquationLog};
use calc_core::validation::{InputValidator, MENU_PATTERNS, NUMBER_PATTERNS, OPERATOR_PATTERNS};
use tracing::{info, warn};

use crate::menu::{Action, MenuChoice, MAIN_MENU, WELCOME_BANNER};

const AUTOMATIC_PROMPT: &str =
    "Enter a txt file name with equations adhering to the following format: number operation number.";
const DISPLAY_PROMPT: &str = "Enter a file to display.";
const AUTOMATIC_NOT_FOUND: &str = "File not found. Try again.";

pub struct Session<R, W> {
    input: InputValidator<R, W>,
    log: EquationLog,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: InputValidator<R, W>, log: EquationLog) -> Self {
        Session { input, log }
    }

    /// Consume the session, returning the output handle
    pub fn into_output(self) -> W {
        self.input.into_writer()
    }

    /// Run until the user exits.
    ///
    /// End of console input is treated like an Exit selection.
    pub fn run(&mut self) -> CalcResult<()> {
        match self.run_menu() {
            Err(CalcError::InputClosed) => {
                info!("console input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_menu(&mut self) -> CalcResult<()> {
        self.input.say(WELCOME_BANNER)?;
        self.input.say(MAIN_MENU)?;

        loop {
            let selection = self.input.read_valid(&MENU_PATTERNS)?;
            let choice = MenuChoice::from_selection(&selection)
                .ok_or_else(|| CalcError::invalid_input("selection", &selection, "Not a menu option"))?;
            match choice {
                MenuChoice::Exit => {
                    info!("exit selected");
                    return Ok(());
                }
                MenuChoice::Run(action) => {
                    self.dispatch(action)?;
                    self.input.say(MAIN_MENU)?;
                }
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> CalcResult<()> {
        let result = match action {
            Action::Manual => self.manual(),
            Action::Automatic => self.automatic(),
            Action::Display => self.display(),
            Action::Help => Ok(()),
        };

        match result {
            Err(e) if e.is_recoverable() => {
                warn!(code = e.error_code(), error = %e, "action failed");
                self.input.say(&e.to_string())
            }
            other => other,
        }
    }

    fn manual(&mut self) -> CalcResult<()> {
        self.input.say("Enter number 1:")?;
        let lhs = parse_number(&self.input.read_valid(&NUMBER_PATTERNS)?)?;

        self.input.say("Enter operation (+, -, *, /):")?;
        let operator: Operator = self.input.read_valid(&OPERATOR_PATTERNS)?.parse()?;

        self.input.say("Enter number 2:")?;
        let rhs = parse_number(&self.input.read_valid(&NUMBER_PATTERNS)?)?;

        self.record(Equation::new(lhs, operator, rhs))
    }

    fn automatic(&mut self) -> CalcResult<()> {
        self.input.say(AUTOMATIC_PROMPT)?;
        let path = self.input.read_line()?;

        match read_equations(Path::new(&path)) {
            Ok(file) => {
                for equation in file.equations {
                    self.record(equation)?;
                }
                Ok(())
            }
            Err(e @ CalcError::FileNotFound { .. }) => {
                self.input.say(&e.to_string())?;
                self.input.say(AUTOMATIC_NOT_FOUND)
            }
            Err(e) => Err(e),
        }
    }

    fn display(&mut self) -> CalcResult<()> {
        self.input.say(DISPLAY_PROMPT)?;
        let path = self.input.read_line()?;

        match read_file_contents(Path::new(&path)) {
            Ok(contents) => self.input.say_bytes(&contents),
            Err(e @ CalcError::FileNotFound { .. }) => self.input.say(&e.to_string()),
            Err(e) => Err(e),
        }
    }

    /// Evaluate, print and log one equation.
    fn record(&mut self, equation: Equation) -> CalcResult<()> {
        let computed = ComputedEquation::compute(equation);
        self.input.say(&computed.to_string())?;
        self.log.append(&computed)
    }
}
