//! Scanning regions.

use std::fmt;

use crate::chars::{BACKTICK, DOUBLE_QUOTE, SINGLE_QUOTE};

/// The region the scanner is currently in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Free-form code outside any literal.
    #[default]
    Expression,
    /// Inside a `"..."` or `'...'` literal.
    Literal,
    /// Inside a `` `...` `` literal, outside any `${ ... }` segment.
    InterpolatingLiteral,
}

impl Mode {
    /// The mode a literal opened by `quote` scans in, or `None` if `quote`
    /// does not open a literal.
    pub const fn opened_by(quote: char) -> Option<Self> {
        match quote {
            BACKTICK => Some(Mode::InterpolatingLiteral),
            DOUBLE_QUOTE | SINGLE_QUOTE => Some(Mode::Literal),
            _ => None,
        }
    }

    /// Returns `true` for both literal modes.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self, Mode::Literal | Mode::InterpolatingLiteral)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Mode::Expression => "expression",
            Mode::Literal => "literal",
            Mode::InterpolatingLiteral => "interpolating literal",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
