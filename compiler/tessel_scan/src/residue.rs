//! Inspection of the nesting a scan left behind.
//!
//! The driver never rejects malformed input. Callers that care read the
//! [`Residue`] of the terminal state, or turn it into an [`Unbalanced`] error.

use crate::mode::Mode;

/// Nesting left open at the point a scan stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Residue {
    pub mode: Mode,
    /// Unmatched `{` count; negative after a stray `}`.
    pub nesting_depth: isize,
    /// `${` segments not yet closed.
    pub open_interpolations: usize,
    /// Quote of the literal still open, if any.
    pub open_quote: Option<char>,
}

impl Residue {
    /// Returns `true` if nothing is left open.
    pub fn is_balanced(&self) -> bool {
        self.ensure_balanced().is_ok()
    }

    /// Report the outermost problem: open literal first, then interpolation,
    /// then braces.
    pub fn ensure_balanced(&self) -> Result<(), Unbalanced> {
        if let Some(quote) = self.open_quote {
            return Err(Unbalanced::UnclosedLiteral {
                quote,
                mode: self.mode,
            });
        }
        if self.open_interpolations > 0 {
            return Err(Unbalanced::UnclosedInterpolation {
                count: self.open_interpolations,
            });
        }
        match self.nesting_depth {
            0 => Ok(()),
            depth if depth > 0 => Err(Unbalanced::UnclosedBrace { depth }),
            depth => Err(Unbalanced::StrayClosingBrace { depth }),
        }
    }
}

/// Why a scanned input is not balanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Unbalanced {
    #[error("unterminated {mode} opened by {quote:?}")]
    UnclosedLiteral { quote: char, mode: Mode },

    #[error("{count} interpolation(s) never closed")]
    UnclosedInterpolation { count: usize },

    #[error("{depth} unmatched opening brace(s)")]
    UnclosedBrace { depth: isize },

    #[error("closing brace without a matching opening brace (depth {depth})")]
    StrayClosingBrace { depth: isize },
}

#[cfg(test)]
mod tests;
