use crate::cursor::Cursor;
use crate::matcher::{Leaf, Matcher, sealed};
use crate::symbol::Symbol;

/// Zero-width assertion that succeeds only at the end of input
///
/// Grammars that must consume the whole input end in `end()`; the engine
/// itself accepts prefix matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct End;

impl sealed::Sealed for End {}

impl<T: Symbol> Matcher<T> for End {
    type State = Leaf;

    fn attempt(&self, state: &mut Leaf, cursor: &mut Cursor<'_, T>) -> bool {
        state.attempt(cursor, |cursor| cursor.is_end().then_some(0))
    }

    fn reset(&self, state: &mut Leaf) {
        state.reset();
    }
}

pub fn end() -> End {
    End
}
