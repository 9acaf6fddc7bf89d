//! Interactive prompt loop driving the reports.
//!
//! The loop reads from any [`BufRead`] and writes to any [`Write`], which lets
//! the binary bind it to the terminal and the tests feed it scripted input.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::authority::report::error::Result;
use crate::authority::report::model::LicenseRecord;
use crate::authority::report::operation::{Operation, REPORT_EXTENSION, report_path, run_operation};

const MENU: &str = "Choose an option:
1. List suspended licenses
2. Extract valid licenses issued until today's date
3. Find licenses based on category and their count
4. Stop the program";
const OPERATION_PROMPT: &str = "[TASK]: Enter operation ID: ";
const FILE_NAME_PROMPT: &str = "Enter the file name (without extension): ";
const INVALID_OPERATION: &str =
    "[ERROR]: Invalid operation ID. Please enter a number between 1 and 4.";
const EXITING: &str = "[INFO]: Exiting the program...";

/// Menu identifier that stops the loop.
pub const EXIT_ID: u8 = 4;

/// A validated menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

/// Parses an operation identifier typed by the user.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    let id: u8 = input.trim().parse().ok()?;
    if id == EXIT_ID {
        return Some(MenuChoice::Exit);
    }
    Operation::from_id(id).map(MenuChoice::Run)
}

/// Runs the menu until the user exits or the input ends.
///
/// Reports are written to `output_dir`. Returns the number of exports done.
pub fn run_interactive<R: BufRead, W: Write>(
    records: &[LicenseRecord],
    input: &mut R,
    output: &mut W,
    output_dir: &Path,
) -> Result<usize> {
    let mut exports = 0;

    loop {
        writeln!(output, "{MENU}")?;
        let Some(line) = prompt(input, output, OPERATION_PROMPT)? else {
            break;
        };

        let operation = match parse_choice(&line) {
            Some(MenuChoice::Exit) => break,
            Some(MenuChoice::Run(operation)) => operation,
            None => {
                debug!(input = %line.trim(), "rejected operation id");
                writeln!(output, "{INVALID_OPERATION}")?;
                continue;
            }
        };

        let Some(name) = prompt(input, output, FILE_NAME_PROMPT)? else {
            break;
        };
        let name = name.trim();
        let path = report_path(output_dir, name);
        let summary = run_operation(records, operation, &path)?;
        writeln!(
            output,
            "[INFO]: {} data exported to {name}.{REPORT_EXTENSION}",
            summary.operation.subject()
        )?;
        exports += 1;
    }

    writeln!(output, "{EXITING}")?;
    output.flush()?;
    Ok(exports)
}

/// Prints `message` and reads one line; `None` once the input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
