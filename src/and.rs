use crate::capture::Captures;
use crate::cursor::Cursor;
use crate::matcher::{Matcher, sealed};
use crate::symbol::Symbol;

/// Sequence combinator: `left` matches a prefix, `right` matches what follows
///
/// When asked for another match at the same start, the right side is
/// exhausted first; only then does the left side move to its next
/// alternative, after which the right side starts over from scratch
/// against the new remainder. Every valid `(left, right)` split is thus
/// produced exactly once, rightmost choice varying fastest.
///
/// Chaining `.and()` nests to the left: `a.and(b).and(c)` is
/// `And(And(a, b), c)`.
#[derive(Debug, Clone)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    pub fn new(left: L, right: R) -> Self {
        And { left, right }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Split {
    start: usize,
    mid: usize,
}

#[derive(Debug, Default)]
pub struct AndState<L, R> {
    left: L,
    right: R,
    split: Option<Split>,
}

impl<L, R> sealed::Sealed for And<L, R> {}

impl<T, L, R> Matcher<T> for And<L, R>
where
    T: Symbol,
    L: Matcher<T>,
    R: Matcher<T>,
{
    type State = AndState<L::State, R::State>;

    fn attempt(&self, state: &mut Self::State, cursor: &mut Cursor<'_, T>) -> bool {
        let start = cursor.position();
        let mut probe = *cursor;

        match state.split {
            Some(split) if split.start == start => {
                probe.seek(split.mid);
                if self.right.attempt(&mut state.right, &mut probe) {
                    *cursor = probe;
                    return true;
                }
            }
            _ => {
                self.reset(state);
                if !self.left.attempt(&mut state.left, &mut probe) {
                    return false;
                }
                state.split = Some(Split {
                    start,
                    mid: probe.position(),
                });
                if self.right.attempt(&mut state.right, &mut probe) {
                    *cursor = probe;
                    return true;
                }
            }
        }

        // Right side is exhausted for the current split; move the left side.
        loop {
            probe.seek(start);
            if !self.left.attempt(&mut state.left, &mut probe) {
                self.reset(state);
                return false;
            }
            state.split = Some(Split {
                start,
                mid: probe.position(),
            });
            self.right.reset(&mut state.right);
            if self.right.attempt(&mut state.right, &mut probe) {
                *cursor = probe;
                return true;
            }
        }
    }

    fn reset(&self, state: &mut Self::State) {
        self.left.reset(&mut state.left);
        self.right.reset(&mut state.right);
        state.split = None;
    }

    fn collect(&self, state: &Self::State, captures: &mut Captures<'_, T>) {
        self.left.collect(&state.left, captures);
        self.right.collect(&state.right, captures);
    }
}

/// Convenience function to create an And matcher
pub fn and<T, L, R>(left: L, right: R) -> And<L, R>
where
    T: Symbol,
    L: Matcher<T>,
    R: Matcher<T>,
{
    And::new(left, right)
}

/// Extension trait to add .and() method support for matchers
pub trait AndExt<T: Symbol>: Matcher<T> + Sized {
    fn and<R>(self, right: R) -> And<Self, R>
    where
        R: Matcher<T>,
    {
        And::new(self, right)
    }
}

/// Implement AndExt for all matchers
impl<T: Symbol, M> AndExt<T> for M where M: Matcher<T> {}
