//! Cursor and mode state over an immutable character sequence.
//!
//! A [`ScanState`] is what callbacks receive. It exposes lookahead and
//! lookbehind around the cursor, the current [`Mode`], and manual cursor
//! movement so a callback can consume a multi-character token in one call.
//!
//! # Out-of-range positions
//!
//! The cursor is signed and unclamped. [`back_n`](ScanState::back_n) may
//! move it below zero and [`advance_n`](ScanState::advance_n) past the end;
//! lookups at such positions return `None` rather than failing.

use std::borrow::Cow;

use crate::context::ScanContext;
use crate::mode::Mode;
use crate::residue::{Residue, Unbalanced};

/// Scan position, region mode and escape flag for one scan session.
///
/// Reusing a state across several [`analyze`](crate::analyze) calls continues
/// the same session: nesting bookkeeping carries over.
#[derive(Clone, Debug)]
pub struct ScanState<'src> {
    input: Cow<'src, [char]>,
    cursor: isize,
    mode: Mode,
    /// Set only for the single character after an unescaped `\` in a literal.
    escaping: bool,
    /// Created by the driver on first use; hidden from callbacks.
    context: Option<ScanContext>,
}

impl<'src> ScanState<'src> {
    /// Create a state over `text`, decoding it into characters once.
    pub fn new(text: &str) -> Self {
        Self::with_input(Cow::Owned(text.chars().collect()))
    }

    /// Create a state borrowing already-decoded characters.
    pub fn from_chars(chars: &'src [char]) -> Self {
        Self::with_input(Cow::Borrowed(chars))
    }

    fn with_input(input: Cow<'src, [char]>) -> Self {
        Self {
            input,
            cursor: 0,
            mode: Mode::Expression,
            escaping: false,
            context: None,
        }
    }

    /// The full input.
    #[inline]
    pub fn input(&self) -> &[char] {
        &self.input
    }

    /// Number of characters in the input.
    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// Move the cursor to an absolute position. Not validated.
    #[inline]
    pub fn set_cursor(&mut self, cursor: isize) {
        self.cursor = cursor;
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Overwrite the mode. Nesting bookkeeping is left untouched.
    #[inline]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Returns `true` while the current character is escaped by a preceding `\`.
    #[inline]
    pub fn is_escaping(&self) -> bool {
        self.escaping
    }

    #[inline]
    pub(crate) fn set_escaping(&mut self, escaping: bool) {
        self.escaping = escaping;
    }

    /// Returns `true` once the cursor is at or past the last character.
    ///
    /// A cursor moved below zero is out of range but not at the end.
    #[inline]
    pub fn is_end(&self) -> bool {
        usize::try_from(self.cursor).is_ok_and(|pos| pos >= self.input.len())
    }

    /// The character at absolute `index`, or `None` outside the input.
    #[inline]
    pub fn get(&self, index: isize) -> Option<char> {
        let index = usize::try_from(index).ok()?;
        self.input.get(index).copied()
    }

    /// The character at `cursor + offset`, or `None` outside the input.
    #[inline]
    pub fn at(&self, offset: isize) -> Option<char> {
        self.get(self.cursor.checked_add(offset)?)
    }

    #[inline]
    pub fn current(&self) -> Option<char> {
        self.at(0)
    }

    #[inline]
    pub fn previous(&self) -> Option<char> {
        self.at(-1)
    }

    #[inline]
    pub fn next(&self) -> Option<char> {
        self.at(1)
    }

    /// Returns `true` if the current character is `ch`.
    #[inline]
    pub fn is(&self, ch: char) -> bool {
        self.current() == Some(ch)
    }

    /// Returns `true` if the character at `cursor + offset` is `ch`.
    #[inline]
    pub fn is_at(&self, ch: char, offset: isize) -> bool {
        self.at(offset) == Some(ch)
    }

    #[inline]
    pub fn in_expression(&self) -> bool {
        self.mode == Mode::Expression
    }

    /// Returns `true` inside a plain `"..."` or `'...'` literal.
    #[inline]
    pub fn in_literal(&self) -> bool {
        self.mode == Mode::Literal
    }

    #[inline]
    pub fn in_interpolating_literal(&self) -> bool {
        self.mode == Mode::InterpolatingLiteral
    }

    /// Advance the cursor by one character.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.advance_n(1)
    }

    /// Advance the cursor by `steps` (negative moves back).
    #[inline]
    pub fn advance_n(&mut self, steps: isize) -> &mut Self {
        self.cursor = self.cursor.saturating_add(steps);
        self
    }

    /// Move the cursor back by one character.
    #[inline]
    pub fn back(&mut self) -> &mut Self {
        self.back_n(1)
    }

    /// Move the cursor back by `steps` (negative moves forward).
    #[inline]
    pub fn back_n(&mut self, steps: isize) -> &mut Self {
        self.cursor = self.cursor.saturating_sub(steps);
        self
    }

    /// Snapshot of the nesting bookkeeping left by the scan so far.
    pub fn residue(&self) -> Residue {
        let context = self.context.as_ref();
        Residue {
            mode: self.mode,
            nesting_depth: context.map_or(0, ScanContext::nesting_depth),
            open_interpolations: context.map_or(0, ScanContext::open_interpolations),
            open_quote: context.and_then(ScanContext::open_quote),
        }
    }

    /// Fail if the scan so far left a literal, interpolation or brace open.
    pub fn ensure_balanced(&self) -> Result<(), Unbalanced> {
        self.residue().ensure_balanced()
    }

    /// The scan context, created on first access.
    pub(crate) fn context_mut(&mut self) -> &mut ScanContext {
        self.context.get_or_insert_with(ScanContext::default)
    }
}

impl From<&str> for ScanState<'_> {
    fn from(text: &str) -> Self {
        ScanState::new(text)
    }
}

impl From<String> for ScanState<'_> {
    fn from(text: String) -> Self {
        ScanState::new(&text)
    }
}

impl<'src> From<&'src [char]> for ScanState<'src> {
    fn from(chars: &'src [char]) -> Self {
        ScanState::from_chars(chars)
    }
}
