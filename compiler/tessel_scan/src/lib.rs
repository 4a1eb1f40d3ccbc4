//! Single-pass region scanner for code mixed with quoted literals.
//!
//! Every character of the input is classified into exactly one of three
//! regions: free-form expression code, a plain quoted literal (`"..."` or
//! `'...'`), or an interpolating literal (`` `...` ``) which may embed
//! `${ ... }` expression segments, nested to any depth.
//!
//! The scanner does not tokenize. It hands each character to a caller
//! supplied callback for its region and lets the callback inspect or move the
//! cursor, or halt the scan with [`Signal::Stop`].
//!
//! # Usage
//!
//! ```
//! use tessel_scan::{analyze, Handlers};
//!
//! let mut code = String::new();
//! let mut text = String::new();
//! let state = analyze(
//!     "fn(\"string\")",
//!     Handlers::split(
//!         |s| code.extend(s.current()),
//!         |s| text.extend(s.current()),
//!     ),
//! );
//!
//! assert!(state.is_end());
//! assert_eq!(code, "fn()");
//! assert_eq!(text, "string");
//! ```
//!
//! # Malformed input
//!
//! Unbalanced quotes or braces never abort a scan. The terminal
//! [`ScanState`] keeps whatever mode and nesting it ended with; inspect it
//! with [`ScanState::residue`] or [`ScanState::ensure_balanced`].
//!
//! # Debugging
//!
//! Region transitions are emitted as `trace` events and each scan closes
//! with a `debug` event. Enable with `RUST_LOG=tessel_scan=trace`.

pub mod chars;
mod context;
mod driver;
mod mode;
mod residue;
mod state;
mod transition;

pub use driver::{analyze, analyze_expression, analyze_literal, Handler, Handlers, Signal, STOP};
pub use mode::Mode;
pub use residue::{Residue, Unbalanced};
pub use state::ScanState;
