//! Characters recognized by the region transition rules.
//!
//! Exposed so callbacks can make mode- and character-aware decisions without
//! repeating these literals.

/// Interpolation introducer; `${` opens an embedded expression.
pub const DOLLAR_SIGN: char = '$';
pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';
pub const DOUBLE_QUOTE: char = '"';
pub const SINGLE_QUOTE: char = '\'';
/// Quote of the interpolating literal.
pub const BACKTICK: char = '`';
/// Escape introducer inside literals.
pub const BACKSLASH: char = '\\';
pub const SPACE: char = ' ';
pub const TAB: char = '\t';
pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';

/// Every character that opens (and closes) a literal.
pub const QUOTES: [char; 3] = [DOUBLE_QUOTE, SINGLE_QUOTE, BACKTICK];

/// Characters skipped without a callback while in expression mode.
pub const IGNORED: [char; 4] = [LINE_FEED, CARRIAGE_RETURN, SPACE, TAB];

/// Returns `true` for any of the [`QUOTES`].
#[inline]
pub const fn is_quote(c: char) -> bool {
    matches!(c, DOUBLE_QUOTE | SINGLE_QUOTE | BACKTICK)
}

/// Returns `true` for any of the [`IGNORED`] characters.
#[inline]
pub const fn is_ignored(c: char) -> bool {
    matches!(c, LINE_FEED | CARRIAGE_RETURN | SPACE | TAB)
}
