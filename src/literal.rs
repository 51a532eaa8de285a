use crate::cursor::Cursor;
use crate::matcher::{Leaf, Matcher, sealed};
use crate::symbol::Symbol;

/// Matcher for an exact literal prefix of the remaining input
///
/// Either the whole literal matches or nothing does; there is no
/// partial-length alternative. An empty literal matches without consuming.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal<T> {
    expected: Vec<T>,
}

impl<T: Symbol> Literal<T> {
    pub fn new(expected: impl AsRef<[T]>) -> Self {
        Literal {
            expected: expected.as_ref().to_vec(),
        }
    }

    pub fn expected(&self) -> &[T] {
        &self.expected
    }
}

impl<T> sealed::Sealed for Literal<T> {}

impl<T: Symbol> Matcher<T> for Literal<T> {
    type State = Leaf;

    fn attempt(&self, state: &mut Leaf, cursor: &mut Cursor<'_, T>) -> bool {
        state.attempt(cursor, |cursor| {
            cursor
                .remaining()
                .starts_with(&self.expected)
                .then_some(self.expected.len())
        })
    }

    fn reset(&self, state: &mut Leaf) {
        state.reset();
    }
}

/// Convenience function to create a Literal matcher
///
/// Byte grammars can pass `&str` or byte strings directly:
/// `literal("://")`, `literal(b"://")`.
pub fn literal<T: Symbol>(expected: impl AsRef<[T]>) -> Literal<T> {
    Literal::new(expected)
}

/// Literal over `char` input
pub fn literal_chars(expected: &str) -> Literal<char> {
    Literal {
        expected: expected.chars().collect(),
    }
}
