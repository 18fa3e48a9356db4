//! Session - Menu-driven interaction loop
//!
//! TigerStyle: The session owns the storage unit and all text I/O. Reader,
//! writer and clock are injected so a test can replay a transcript.
//!
//! Flow per iteration:
//! 1. Print current mode and the menu
//! 2. Read a selection, prompt for its arguments
//! 3. Call the storage unit and render the outcome
//! 4. Storage and input failures are printed; the loop continues
//!
//! Only I/O errors end a session early. End of input is treated like the
//! exit option.

use std::io::{self, BufRead, Write};

use traystack_core::{Item, StorageError, StorageUnit};

use crate::clock::Clock;
use crate::input::{self, InputError, BEST_BEFORE_DAYS_AHEAD_MAX};

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Banner printed once when the session starts.
pub const WELCOME_TEXT: &str =
    "___ Welcome to Fast-Food Storage Manager___\nManaging your trays in the best way possible!\n";

/// Main menu, one option per line.
pub const MENU_TEXT: &str = "1) Switch storage type\n\
    2) Add a new food item\n\
    3) Remove a food item\n\
    4) Peek at the top item\n\
    5) Display all items\n\
    6) Search item by name\n\
    7) Search items by weight\n\
    8) Search items by best-before date\n\
    9) Exit the program";

/// Mode sub-menu.
pub const MODE_MENU_TEXT: &str = "\nSelect mode: \n\
    1) STACK_FRONT_BOTH (LIFO / stack behavior)\n\
    2) ADD_FRONT_REMOVE_OPP (FIFO / queue behavior)";

/// Printed instead of prompting when there is no room for another item.
pub const STORAGE_FULL_TEXT: &str = "  Storage is full! Remove something first please.";

/// Weight search with no matches.
pub const WEIGHT_NO_MATCH_TEXT: &str = "Sorry, no items in that weight range.";

/// Best-before search with no matches.
pub const BEST_BEFORE_NO_MATCH_TEXT: &str = "Sorry, no items in that best-before range.";

/// Name search with no match.
pub const NAME_NOT_FOUND_TEXT: &str = " Item not found!";

/// Unknown menu selection.
pub const INVALID_OPTION_TEXT: &str = " Invalid option. Please  try again, and choose from 1 to 9.";

/// Printed when the user picks the exit option.
pub const EXIT_TEXT: &str = "\n Exiting... Thank you for using Fast-Food Storage Manager!";

/// Printed once the loop has ended, however it ended.
pub const FINISHED_TEXT: &str = " Program Finished .";

// =============================================================================
// Menu
// =============================================================================

/// Main menu selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    SwitchMode,
    Add,
    Remove,
    Peek,
    DisplayAll,
    SearchByName,
    SearchByWeight,
    SearchByBestBefore,
    Exit,
}

impl MenuOption {
    /// Parse a menu selection (`1`..=`9`).
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::SwitchMode),
            "2" => Some(Self::Add),
            "3" => Some(Self::Remove),
            "4" => Some(Self::Peek),
            "5" => Some(Self::DisplayAll),
            "6" => Some(Self::SearchByName),
            "7" => Some(Self::SearchByWeight),
            "8" => Some(Self::SearchByBestBefore),
            "9" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

// =============================================================================
// Errors
// =============================================================================

/// Failures while handling one menu option.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("session I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("end of input")]
    EndOfInput,
}

// =============================================================================
// Session
// =============================================================================

/// An interactive session over one storage unit.
pub struct Session<R, W, C> {
    unit: StorageUnit,
    input: R,
    output: W,
    clock: C,
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    /// Create a session driving `unit`.
    pub fn new(unit: StorageUnit, input: R, output: W, clock: C) -> Self {
        Self {
            unit,
            input,
            output,
            clock,
        }
    }

    /// Consume the session, returning the storage unit and writer.
    pub fn into_parts(self) -> (StorageUnit, W) {
        (self.unit, self.output)
    }

    /// Run the menu loop until the exit option or end of input.
    ///
    /// # Errors
    /// Returns [`SessionError::Io`] if reading or writing fails. Storage and
    /// input failures are printed and never returned.
    pub fn run(&mut self) -> Result<(), SessionError> {
        tracing::info!(capacity = self.unit.capacity(), mode = %self.unit.mode(), "session started");
        writeln!(self.output, "{WELCOME_TEXT}")?;

        loop {
            writeln!(self.output, "\n Your current mode: {}", self.unit.mode())?;
            writeln!(self.output, "{MENU_TEXT}")?;

            let selection = match self.prompt("→ Choose an option: ") {
                Ok(line) => line,
                Err(SessionError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let Some(option) = MenuOption::from_input(&selection) else {
                writeln!(self.output, "{INVALID_OPTION_TEXT}")?;
                continue;
            };
            tracing::debug!(?option, "menu option selected");

            match self.handle(option) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(SessionError::EndOfInput) => break,
                Err(SessionError::Storage(e)) => writeln!(self.output, "  Error: {e}")?,
                Err(SessionError::Input(e)) => writeln!(self.output, "  {e}")?,
                Err(e @ SessionError::Io(_)) => return Err(e),
            }
        }

        writeln!(self.output, "{FINISHED_TEXT}")?;
        self.output.flush()?;
        tracing::info!(items = self.unit.len(), "session finished");
        Ok(())
    }

    fn handle(&mut self, option: MenuOption) -> Result<Flow, SessionError> {
        match option {
            MenuOption::SwitchMode => self.switch_mode()?,
            MenuOption::Add => self.add_item()?,
            MenuOption::Remove => {
                let removed = self.unit.remove()?;
                writeln!(self.output, "  Removed: {removed}")?;
            }
            MenuOption::Peek => {
                let top = self.unit.peek_top()?;
                writeln!(self.output, " Top item: {top}")?;
            }
            MenuOption::DisplayAll => {
                let listing = self.unit.display_all();
                writeln!(self.output, "{listing}")?;
            }
            MenuOption::SearchByName => self.search_by_name()?,
            MenuOption::SearchByWeight => self.search_by_weight()?,
            MenuOption::SearchByBestBefore => self.search_by_best_before()?,
            MenuOption::Exit => {
                writeln!(self.output, "{EXIT_TEXT}")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn switch_mode(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{MODE_MENU_TEXT}")?;
        let choice = self.prompt(" Option: ")?;
        self.unit.set_mode(input::parse_mode_choice(&choice));
        writeln!(self.output, " Mode switched to: {}", self.unit.mode())?;
        Ok(())
    }

    fn add_item(&mut self) -> Result<(), SessionError> {
        if self.unit.is_full() {
            writeln!(self.output, "{STORAGE_FULL_TEXT}")?;
            return Ok(());
        }

        let name = input::parse_name(&self.prompt("Enter food name: ")?)?;
        let weight_grams = input::parse_weight(&self.prompt("Enter weight (grams): ")?)?;
        let best_before_prompt = format!(
            "Enter best-before date (YYYY-MM-DD, must be within {BEST_BEFORE_DAYS_AHEAD_MAX} days): "
        );
        let best_before = input::parse_date(&self.prompt(&best_before_prompt)?)?;
        let placed_at = self.clock.now();
        input::check_best_before(best_before, placed_at)?;

        self.unit
            .add(Item::new(name, weight_grams, best_before, placed_at))?;
        writeln!(self.output, " Item added !")?;
        Ok(())
    }

    fn search_by_name(&mut self) -> Result<(), SessionError> {
        let name = self.prompt("Enter name to search: ")?;
        match self.unit.search_by_name(name.trim()) {
            Some(item) => writeln!(self.output, "{item}")?,
            None => writeln!(self.output, "{NAME_NOT_FOUND_TEXT}")?,
        }
        Ok(())
    }

    fn search_by_weight(&mut self) -> Result<(), SessionError> {
        let min = input::parse_weight_bound(&self.prompt("Enter minimum weight: ")?)?;
        let max = input::parse_weight_bound(&self.prompt("Enter maximum weight: ")?)?;
        let found = self.unit.search_by_weight_range(min, max);
        write_matches(&mut self.output, &found, WEIGHT_NO_MATCH_TEXT)
    }

    fn search_by_best_before(&mut self) -> Result<(), SessionError> {
        let from = input::parse_date(&self.prompt("Enter start date (YYYY-MM-DD): ")?)?;
        let to = input::parse_date(&self.prompt("Enter end date (YYYY-MM-DD): ")?)?;
        let found = self.unit.search_by_best_before_range(from, to);
        write_matches(&mut self.output, &found, BEST_BEFORE_NO_MATCH_TEXT)
    }

    /// Print `text` without a newline and read one line.
    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("input exhausted");
            return Err(SessionError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }
}

fn write_matches<W: Write>(output: &mut W, found: &[&Item], no_match: &str) -> Result<(), SessionError> {
    if found.is_empty() {
        writeln!(output, "{no_match}")?;
        return Ok(());
    }
    for item in found {
        writeln!(output, "{item}")?;
    }
    writeln!(output)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
