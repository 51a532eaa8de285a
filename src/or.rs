use crate::capture::Captures;
use crate::cursor::Cursor;
use crate::matcher::{Matcher, sealed};
use crate::symbol::Symbol;

/// Alternative combinator that tries `left` first, and `right` only if `left` fails
///
/// Branch preference is strictly left-biased on the first attempt and on
/// every reentry: another match is requested from the active branch before
/// switching, so all of `left`'s matches come out before any of `right`'s.
#[derive(Debug, Clone)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Or { left, right }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Active {
    start: usize,
    branch: Branch,
}

#[derive(Debug, Default)]
pub struct OrState<L, R> {
    left: L,
    right: R,
    active: Option<Active>,
}

impl<L, R> sealed::Sealed for Or<L, R> {}

impl<T, L, R> Matcher<T> for Or<L, R>
where
    T: Symbol,
    L: Matcher<T>,
    R: Matcher<T>,
{
    type State = OrState<L::State, R::State>;

    fn attempt(&self, state: &mut Self::State, cursor: &mut Cursor<'_, T>) -> bool {
        let start = cursor.position();
        let resumed = state
            .active
            .filter(|active| active.start == start)
            .map(|active| active.branch);

        match resumed {
            Some(Branch::Right) => {
                if self.right.attempt(&mut state.right, cursor) {
                    return true;
                }
                self.reset(state);
                return false;
            }
            Some(Branch::Left) => {
                if self.left.attempt(&mut state.left, cursor) {
                    return true;
                }
            }
            None => {
                self.reset(state);
                if self.left.attempt(&mut state.left, cursor) {
                    state.active = Some(Active {
                        start,
                        branch: Branch::Left,
                    });
                    return true;
                }
            }
        }

        // Left is exhausted (and has reset itself); switch branches.
        if self.right.attempt(&mut state.right, cursor) {
            state.active = Some(Active {
                start,
                branch: Branch::Right,
            });
            true
        } else {
            self.reset(state);
            false
        }
    }

    fn reset(&self, state: &mut Self::State) {
        self.left.reset(&mut state.left);
        self.right.reset(&mut state.right);
        state.active = None;
    }

    fn collect(&self, state: &Self::State, captures: &mut Captures<'_, T>) {
        match state.active.map(|active| active.branch) {
            Some(Branch::Left) => self.left.collect(&state.left, captures),
            Some(Branch::Right) => self.right.collect(&state.right, captures),
            None => {}
        }
    }
}

/// Extension trait to add .or() method support for matchers
pub trait OrExt<T: Symbol>: Matcher<T> + Sized {
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        R: Matcher<T>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all matchers
impl<T: Symbol, M> OrExt<T> for M where M: Matcher<T> {}

/// Convenience function to create an Or matcher
pub fn or<T, L, R>(left: L, right: R) -> Or<L, R>
where
    T: Symbol,
    L: Matcher<T>,
    R: Matcher<T>,
{
    Or::new(left, right)
}
