//! Region transition rules.
//!
//! Evaluated once per step on the character under the cursor, before the
//! character is dispatched. A transition that consumes its delimiter moves
//! the cursor past it; the character after the delimiter is then dispatched
//! in the new mode without a second transition check.

use tracing::trace;

use crate::chars::{CLOSE_BRACE, DOLLAR_SIGN, OPEN_BRACE};
use crate::mode::Mode;
use crate::state::ScanState;

/// A region boundary crossed by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Transition {
    /// `${` inside an interpolating literal; both characters consumed.
    EnterInterpolation,
    /// `{` in expression mode.
    OpenBrace,
    /// `}` in expression mode that did not close an interpolation.
    CloseBrace,
    /// `}` closing the innermost interpolation; consumed.
    LeaveInterpolation,
    /// Opening quote; consumed.
    OpenLiteral,
    /// Closing quote matching the opening one; consumed.
    CloseLiteral,
}

/// Apply the first transition rule matching the current character.
pub(crate) fn apply(state: &mut ScanState<'_>) -> Option<Transition> {
    let current = state.current()?;
    let mode = state.mode();

    let transition = match current {
        DOLLAR_SIGN
            if mode == Mode::InterpolatingLiteral
                && state.is_at(OPEN_BRACE, 1)
                && !state.is_escaping() =>
        {
            state.context_mut().enter_interpolation();
            state.set_mode(Mode::Expression);
            state.advance_n(2);
            Transition::EnterInterpolation
        }
        OPEN_BRACE if mode == Mode::Expression => {
            state.context_mut().open_brace();
            Transition::OpenBrace
        }
        CLOSE_BRACE if mode == Mode::Expression => {
            if state.context_mut().close_brace() {
                state.set_mode(Mode::InterpolatingLiteral);
                state.advance();
                Transition::LeaveInterpolation
            } else {
                Transition::CloseBrace
            }
        }
        quote if mode == Mode::Expression => {
            let opened = Mode::opened_by(quote)?;
            state.context_mut().open_literal(quote);
            state.set_mode(opened);
            state.advance();
            Transition::OpenLiteral
        }
        quote
            if mode.is_literal()
                && !state.is_escaping()
                && state.residue().open_quote == Some(quote) =>
        {
            state.context_mut().close_literal();
            state.set_mode(Mode::Expression);
            state.advance();
            Transition::CloseLiteral
        }
        _ => return None,
    };

    let residue = state.residue();
    trace!(
        ?transition,
        ch = ?current,
        cursor = state.cursor(),
        mode = %residue.mode,
        depth = residue.nesting_depth,
        interpolations = residue.open_interpolations,
        "region transition"
    );
    Some(transition)
}
