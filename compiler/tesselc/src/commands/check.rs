//! The `check` command: report files that end with open literals or braces.
//!
//! Files are scanned in parallel, one independent scan session per file.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tessel_scan::{analyze, Handlers, Residue, Unbalanced};

use super::read_file;
use crate::CliError;

/// Outcome of checking a single file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<Residue, CliError>,
}

/// Scan `source` without callbacks and require it to be balanced.
pub fn check_source(source: &str) -> Result<Residue, Unbalanced> {
    let state = analyze(source, Handlers::none());
    state.ensure_balanced()?;
    Ok(state.residue())
}

fn check_path(path: &Path) -> Result<Residue, CliError> {
    let source = read_file(path)?;
    check_source(&source).map_err(|source| CliError::Unbalanced {
        path: path.to_path_buf(),
        source,
    })
}

/// Check every file in `paths`, printing one line per file.
///
/// Returns the per-file reports in input order; fails if any file could not
/// be read or is unbalanced.
pub fn check_files(paths: &[PathBuf]) -> Result<Vec<FileReport>, CliError> {
    if paths.is_empty() {
        return Err(CliError::Usage("check: no files given".to_owned()));
    }

    let reports: Vec<FileReport> = paths
        .par_iter()
        .map(|path| FileReport {
            path: path.clone(),
            result: check_path(path),
        })
        .collect();

    let mut failed = 0;
    for report in &reports {
        match &report.result {
            Ok(_) => println!("OK: {}", report.path.display()),
            Err(err) => {
                failed += 1;
                eprintln!("error: {err}");
            }
        }
    }
    tracing::debug!(total = reports.len(), failed, "check finished");

    if failed > 0 {
        return Err(CliError::ChecksFailed {
            failed,
            total: reports.len(),
        });
    }
    Ok(reports)
}
