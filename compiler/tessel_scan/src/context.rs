//! Nesting bookkeeping private to a scan session.

/// Brace nesting and interpolation boundaries for one [`ScanState`].
///
/// `nesting_depth` counts unmatched `{` seen in expression mode, including
/// the brace of each `${`. Every open interpolation pushes the depth it was
/// entered at; the `}` that brings the depth back to that value closes it.
///
/// [`ScanState`]: crate::ScanState
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ScanContext {
    nesting_depth: isize,
    boundaries: Vec<Boundary>,
    open_quote: Option<char>,
}

/// An open `${` segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Boundary {
    /// `nesting_depth` before the `${` brace was counted.
    depth: isize,
    /// Quote of the enclosing literal, restored when the segment closes.
    quote: Option<char>,
}

impl ScanContext {
    #[inline]
    pub(crate) fn nesting_depth(&self) -> isize {
        self.nesting_depth
    }

    #[inline]
    pub(crate) fn open_interpolations(&self) -> usize {
        self.boundaries.len()
    }

    /// The quote that opened the current literal.
    #[inline]
    pub(crate) fn open_quote(&self) -> Option<char> {
        self.open_quote
    }

    /// Record a `${`: remember where the interpolation starts, then nest.
    ///
    /// The enclosing literal's quote is set aside so literals opened inside
    /// the segment cannot clobber it.
    pub(crate) fn enter_interpolation(&mut self) {
        self.boundaries.push(Boundary {
            depth: self.nesting_depth,
            quote: self.open_quote.take(),
        });
        self.nesting_depth += 1;
    }

    pub(crate) fn open_brace(&mut self) {
        self.nesting_depth += 1;
    }

    /// Record a `}` in expression mode.
    ///
    /// Returns `true` if it closes the innermost interpolation.
    pub(crate) fn close_brace(&mut self) -> bool {
        self.nesting_depth -= 1;
        match self.boundaries.last() {
            Some(boundary) if boundary.depth == self.nesting_depth => {
                self.open_quote = boundary.quote;
                self.boundaries.pop();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn open_literal(&mut self, quote: char) {
        self.open_quote = Some(quote);
    }

    pub(crate) fn close_literal(&mut self) {
        self.open_quote = None;
    }
}

#[cfg(test)]
mod tests;
