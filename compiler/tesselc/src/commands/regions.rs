//! The `regions` command: show which characters fall in which region.

use std::path::Path;

use tessel_scan::{analyze, Handlers, Mode, Residue};

use super::read_file;
use crate::CliError;

/// Characters delivered by a scan, grouped by region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionText {
    pub expression: String,
    pub literal: String,
    pub interpolating: String,
}

impl RegionText {
    fn push(&mut self, mode: Mode, c: char) {
        match mode {
            Mode::Expression => self.expression.push(c),
            Mode::Literal => self.literal.push(c),
            Mode::InterpolatingLiteral => self.interpolating.push(c),
        }
    }
}

/// Scan `source` and group every delivered character by region.
pub fn collect_regions(source: &str) -> (RegionText, Residue) {
    let mut text = RegionText::default();
    let state = analyze(
        source,
        Handlers::shared(|s| {
            if let Some(c) = s.current() {
                text.push(s.mode(), c);
            }
        }),
    );
    (text, state.residue())
}

/// Print the region breakdown of the file at `path`.
pub fn regions_file(path: &Path) -> Result<(), CliError> {
    let source = read_file(path)?;
    let (text, residue) = collect_regions(&source);
    tracing::debug!(path = %path.display(), ?residue, "regions collected");

    println!("expression:    {:?}", text.expression);
    println!("literal:       {:?}", text.literal);
    println!("interpolating: {:?}", text.interpolating);
    if !residue.is_balanced() {
        println!("(scan ended in {} mode with open nesting)", residue.mode);
    }
    Ok(())
}
