//! The `stop` command: locate the first expression-region occurrence of a
//! character, halting the scan there.

use std::path::Path;

use tessel_scan::{analyze_expression, Signal};

use super::read_file;
use crate::CliError;

/// Index of the first `needle` delivered in expression mode, if any.
pub fn find_in_expression(source: &str, needle: char) -> Option<usize> {
    let state = analyze_expression(source, |s| {
        if s.is(needle) {
            Signal::Stop
        } else {
            Signal::Continue
        }
    });
    if state.is_end() {
        return None;
    }
    usize::try_from(state.cursor()).ok()
}

/// Print where `needle` first appears as code in the file at `path`.
pub fn stop_file(path: &Path, needle: &str) -> Result<(), CliError> {
    let mut chars = needle.chars();
    let (Some(needle), None) = (chars.next(), chars.next()) else {
        return Err(CliError::Usage(format!(
            "stop: expected a single character, got {needle:?}"
        )));
    };

    let source = read_file(path)?;
    match find_in_expression(&source, needle) {
        Some(index) => println!("{}: {needle:?} at character {index}", path.display()),
        None => println!("{}: {needle:?} not found in code", path.display()),
    }
    Ok(())
}
