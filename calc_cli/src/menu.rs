//! Menu text and selections.

/// Banner shown once at startup
pub const WELCOME_BANNER: &str = "**************************
***   THE CALCULATOR   ***
**************************";

/// Main menu, shown after the banner and after every action
pub const MAIN_MENU: &str = "
Choose an option:
1. (M)anual
2. (R)ead and Compute
3. (D)isplay File
4. (H)elp
5. (E)xit
";

/// A menu action that returns to the menu when done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Manual,
    Automatic,
    Display,
    Help,
}

/// A validated main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Action),
    Exit,
}

impl MenuChoice {
    /// Map a selection accepted by the menu patterns.
    ///
    /// Returns `None` for anything else.
    pub fn from_selection(selection: &str) -> Option<Self> {
        match selection {
            "1" | "m" => Some(MenuChoice::Run(Action::Manual)),
            "2" | "r" => Some(MenuChoice::Run(Action::Automatic)),
            "3" | "d" => Some(MenuChoice::Run(Action::Display)),
            "4" | "h" => Some(MenuChoice::Run(Action::Help)),
            "5" | "e" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::validation::MENU_PATTERNS;

    #[test]
    fn test_digit_and_letter_selections() {
        assert_eq!(MenuChoice::from_selection("1"), Some(MenuChoice::Run(Action::Manual)));
        assert_eq!(MenuChoice::from_selection("r"), Some(MenuChoice::Run(Action::Automatic)));
        assert_eq!(MenuChoice::from_selection("d"), Some(MenuChoice::Run(Action::Display)));
        assert_eq!(MenuChoice::from_selection("4"), Some(MenuChoice::Run(Action::Help)));
        assert_eq!(MenuChoice::from_selection("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_selection("x"), None);
    }

    #[test]
    fn test_every_accepted_selection_maps_to_a_choice() {
        for selection in ["1", "2", "3", "4", "5", "m", "r", "d", "h", "e"] {
            assert!(MENU_PATTERNS.accepts(selection));
            assert!(MenuChoice::from_selection(selection).is_some());
        }
    }
}
