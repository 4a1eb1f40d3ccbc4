//! Command-line front end for the tessel region scanner.
//!
//! Each command reads source files, runs [`tessel_scan::analyze`] over them
//! and reports what it found. The binary in `main.rs` only parses arguments
//! and maps errors to exit codes.
//!
//! # Debugging
//!
//! - `RUST_LOG=tessel_scan=trace`: every region transition, nested under the
//!   scan that produced it.
//! - `RUST_LOG=tesselc=debug`: per-file command progress.

pub mod commands;
pub mod error;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
