use crate::capture::Captures;
use crate::cursor::Cursor;
use crate::symbol::Symbol;
use std::fmt::Debug;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Core matching protocol shared by every node of a grammar
///
/// A node is immutable once built. Everything it needs to remember
/// between calls lives in a separate `State` value owned by the caller,
/// so one grammar can serve any number of independent parses.
///
/// # Reentry
///
/// When `attempt` is called with the cursor at the position where this
/// node last succeeded, the call asks for a *different* successful match
/// from that same start, not for the first one again. A node with no
/// further alternative resets its state and fails. Compound nodes rely on
/// this to backtrack into their children without an explicit choice
/// stack.
///
/// The set of matchers is closed: primitives (`Class`, `Literal`, `End`)
/// and combinators (`And`, `Or`, `Repeat`, `Capture`).
pub trait Matcher<T: Symbol>: sealed::Sealed {
    /// Per-parse backtracking state; `Default` is the freshly built state
    type State: Default + Debug;

    /// Try to match a prefix of the remaining input
    ///
    /// On success the cursor is moved past the consumed prefix and `true`
    /// is returned. On failure the cursor is left where it was and the
    /// state of this node's whole subtree is reset.
    fn attempt(&self, state: &mut Self::State, cursor: &mut Cursor<'_, T>) -> bool;

    /// Discard all retained backtracking and capture state
    fn reset(&self, state: &mut Self::State);

    /// Copy the spans captured by the current match into `captures`
    fn collect(&self, _state: &Self::State, _captures: &mut Captures<'_, T>) {}
}

/// State of a deterministic primitive: where it last succeeded
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Leaf {
    matched_at: Option<usize>,
}

impl Leaf {
    /// Apply the reentry rule for a node with at most one match per start
    ///
    /// `consumed` returns how many symbols match at the cursor, if any.
    pub(crate) fn attempt<T: Symbol>(
        &mut self,
        cursor: &mut Cursor<'_, T>,
        consumed: impl FnOnce(&Cursor<'_, T>) -> Option<usize>,
    ) -> bool {
        let start = cursor.position();
        if self.matched_at == Some(start) {
            // The only match from here was already handed out.
            self.reset();
            return false;
        }

        match consumed(&*cursor) {
            Some(count) => {
                self.matched_at = Some(start);
                cursor.advance(count);
                true
            }
            None => {
                self.reset();
                false
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        self.matched_at = None;
    }
}
