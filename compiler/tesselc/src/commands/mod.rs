//! Command handlers for the tessel CLI.
//!
//! Each submodule implements one command. The pure scanning half of every
//! command is exposed separately from the half that reads files and prints,
//! so it can be tested against in-memory sources.

use std::path::Path;

use crate::CliError;

mod check;
mod regions;
mod stop;

pub use check::{check_files, check_source, FileReport};
pub use regions::{collect_regions, regions_file, RegionText};
pub use stop::{find_in_expression, stop_file};

/// Read a source file into a string.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
