//! The scanning loop.
//!
//! Each step applies the transition rules to the character under the
//! cursor, then hands the character to the callback for its region:
//!
//! - expression mode: whitespace in [`IGNORED`](crate::chars::IGNORED) is
//!   skipped silently, everything else goes to the expression callback;
//! - literal modes: an unescaped `\` is swallowed as an escape marker,
//!   everything else (including an escaped `\`) goes to the literal callback.
//!
//! Callbacks may move the cursor. The loop always re-reads the live cursor
//! and mode after a callback returns.

use tracing::{debug, debug_span};

use crate::chars::{is_ignored, BACKSLASH};
use crate::state::ScanState;
use crate::transition;

/// What a callback wants the scan to do next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Signal {
    #[default]
    Continue,
    /// Halt with the cursor parked on the current character.
    Stop,
}

/// Shorthand for [`Signal::Stop`].
pub const STOP: Signal = Signal::Stop;

impl Signal {
    #[inline]
    pub fn is_stop(self) -> bool {
        self == Signal::Stop
    }
}

/// Callbacks returning nothing never stop the scan.
impl From<()> for Signal {
    fn from((): ()) -> Self {
        Signal::Continue
    }
}

/// A boxed region callback.
pub type Handler<'h, 'src> = Box<dyn FnMut(&mut ScanState<'src>) -> Signal + 'h>;

fn boxed<'h, 'src, F, R>(mut f: F) -> Handler<'h, 'src>
where
    F: FnMut(&mut ScanState<'src>) -> R + 'h,
    R: Into<Signal>,
{
    Box::new(move |state| f(state).into())
}

/// The callbacks a scan dispatches to, selected by mode.
pub enum Handlers<'h, 'src> {
    /// One callback for every region; it can tell them apart through the
    /// state's mode predicates.
    Shared(Handler<'h, 'src>),
    Split {
        expression: Option<Handler<'h, 'src>>,
        /// Receives both plain and interpolating literal characters.
        literal: Option<Handler<'h, 'src>>,
    },
}

impl<'h, 'src> Handlers<'h, 'src> {
    /// Use `f` for every region.
    pub fn shared<F, R>(f: F) -> Self
    where
        F: FnMut(&mut ScanState<'src>) -> R + 'h,
        R: Into<Signal>,
    {
        Handlers::Shared(boxed(f))
    }

    /// Only intercept expression characters.
    pub fn expression<F, R>(f: F) -> Self
    where
        F: FnMut(&mut ScanState<'src>) -> R + 'h,
        R: Into<Signal>,
    {
        Handlers::Split {
            expression: Some(boxed(f)),
            literal: None,
        }
    }

    /// Only intercept literal characters.
    pub fn literal<F, R>(f: F) -> Self
    where
        F: FnMut(&mut ScanState<'src>) -> R + 'h,
        R: Into<Signal>,
    {
        Handlers::Split {
            expression: None,
            literal: Some(boxed(f)),
        }
    }

    pub fn split<E, ER, L, LR>(expression: E, literal: L) -> Self
    where
        E: FnMut(&mut ScanState<'src>) -> ER + 'h,
        ER: Into<Signal>,
        L: FnMut(&mut ScanState<'src>) -> LR + 'h,
        LR: Into<Signal>,
    {
        Handlers::Split {
            expression: Some(boxed(expression)),
            literal: Some(boxed(literal)),
        }
    }

    /// No callbacks; the scan only tracks regions.
    pub fn none() -> Self {
        Handlers::Split {
            expression: None,
            literal: None,
        }
    }

    fn on_expression(&mut self, state: &mut ScanState<'src>) -> Signal {
        match self {
            Handlers::Shared(handler)
            | Handlers::Split {
                expression: Some(handler),
                ..
            } => handler(state),
            Handlers::Split { expression: None, .. } => Signal::Continue,
        }
    }

    fn on_literal(&mut self, state: &mut ScanState<'src>) -> Signal {
        match self {
            Handlers::Shared(handler)
            | Handlers::Split {
                literal: Some(handler),
                ..
            } => handler(state),
            Handlers::Split { literal: None, .. } => Signal::Continue,
        }
    }
}

impl Default for Handlers<'_, '_> {
    fn default() -> Self {
        Handlers::none()
    }
}

/// Scan `input` to the end, or until a callback returns [`Signal::Stop`].
///
/// `input` is raw text, decoded characters, or the [`ScanState`] returned by
/// an earlier call, which resumes that session. Returns the terminal state.
pub fn analyze<'src>(
    input: impl Into<ScanState<'src>>,
    mut handlers: Handlers<'_, 'src>,
) -> ScanState<'src> {
    let mut state = input.into();
    let _span = debug_span!("analyze", len = state.len(), start = state.cursor()).entered();

    // First association creates the context even if nothing transitions.
    state.context_mut();

    let mut stopped = false;
    while !state.is_end() {
        transition::apply(&mut state);

        if state.is_end() {
            break;
        }

        let signal = if state.in_expression() {
            if state.current().is_some_and(is_ignored) {
                state.advance();
                continue;
            }
            handlers.on_expression(&mut state)
        } else if !state.is(BACKSLASH) || state.is_escaping() {
            handlers.on_literal(&mut state)
        } else {
            Signal::Continue
        };

        if signal.is_stop() {
            stopped = true;
            break;
        }

        let escaping = !state.in_expression() && state.is(BACKSLASH) && !state.is_escaping();
        state.set_escaping(escaping);
        state.advance();
    }

    debug!(
        cursor = state.cursor(),
        mode = %state.mode(),
        stopped,
        "scan finished"
    );
    state
}

/// Scan `input`, intercepting only expression characters.
pub fn analyze_expression<'src, F, R>(input: impl Into<ScanState<'src>>, handler: F) -> ScanState<'src>
where
    F: FnMut(&mut ScanState<'src>) -> R,
    R: Into<Signal>,
{
    analyze(input, Handlers::expression(handler))
}

/// Scan `input`, intercepting only literal characters.
pub fn analyze_literal<'src, F, R>(input: impl Into<ScanState<'src>>, handler: F) -> ScanState<'src>
where
    F: FnMut(&mut ScanState<'src>) -> R,
    R: Into<Signal>,
{
    analyze(input, Handlers::literal(handler))
}
