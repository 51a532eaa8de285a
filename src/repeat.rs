use crate::capture::Captures;
use crate::cursor::Cursor;
use crate::error::GrammarError;
use crate::matcher::{Matcher, sealed};
use crate::symbol::Symbol;
use std::iter;
use std::ops::{Bound, RangeBounds};
use tracing::trace;

/// Bounded repetition of a matcher, greedy by default
///
/// The first attempt runs the inner matcher as many times as it can (never
/// more than `max`) and returns the position for the largest count. Each
/// reentry at the same start hands out the next smaller count, down to
/// `min`, then fails. The inner matcher is never asked for alternatives of
/// its own; each repetition takes its first match.
///
/// Iteration is a loop, so stack depth does not grow with input length.
/// An inner matcher that succeeds without consuming stops the scan; such
/// an empty repetition is only counted when needed to reach `min`.
#[derive(Debug, Clone)]
pub struct Repeat<M> {
    matcher: M,
    min: usize,
    max: Option<usize>,
}

impl<M> Repeat<M> {
    /// Create a Repeat matcher for any count within `bounds`
    ///
    /// Fails if the range admits no count at all, e.g. `3..2`.
    pub fn new(matcher: M, bounds: impl RangeBounds<usize>) -> Result<Self, GrammarError> {
        let min = match bounds.start_bound() {
            Bound::Included(&min) => min,
            Bound::Excluded(&min) => min.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match bounds.end_bound() {
            Bound::Included(&max) => max.checked_add(1),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => None,
        };
        match end {
            Some(end) if end <= min => Err(GrammarError::EmptyRepetition { min, end }),
            end => Ok(Repeat {
                matcher,
                min,
                max: end.map(|end| end - 1),
            }),
        }
    }

    fn bounded(matcher: M, min: usize, max: Option<usize>) -> Self {
        Repeat { matcher, min, max }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound on the count, `None` when unbounded
    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

#[derive(Debug, Default)]
pub struct RepeatState<S> {
    inner: S,
    start: Option<usize>,
    /// Position reached after each count; `trail[0]` is the start
    trail: Vec<usize>,
    count: usize,
}

impl<M> Repeat<M> {
    /// Commit to `count` repetitions
    ///
    /// The inner matcher is reset and its last repetition replayed, so its
    /// state (captures included) belongs to this count and no other.
    fn settle<T>(
        &self,
        state: &mut RepeatState<M::State>,
        count: usize,
        cursor: &mut Cursor<'_, T>,
    ) -> bool
    where
        T: Symbol,
        M: Matcher<T>,
    {
        state.count = count;
        self.matcher.reset(&mut state.inner);
        if count > 0 {
            let mut replay = *cursor;
            replay.seek(state.trail[count - 1]);
            if !self.matcher.attempt(&mut state.inner, &mut replay)
                || replay.position() != state.trail[count]
            {
                <Self as Matcher<T>>::reset(self, state);
                return false;
            }
        }
        cursor.seek(state.trail[count]);
        true
    }
}

impl<M> sealed::Sealed for Repeat<M> {}

impl<T, M> Matcher<T> for Repeat<M>
where
    T: Symbol,
    M: Matcher<T>,
{
    type State = RepeatState<M::State>;

    fn attempt(&self, state: &mut Self::State, cursor: &mut Cursor<'_, T>) -> bool {
        let start = cursor.position();
        if state.start == Some(start) {
            return match state.count.checked_sub(1) {
                Some(count) if count >= self.min => self.settle(state, count, cursor),
                _ => {
                    self.reset(state);
                    false
                }
            };
        }

        self.reset(state);
        state.trail.push(start);

        if cursor.is_end() {
            if self.min > 0 {
                self.reset(state);
                return false;
            }
            state.start = Some(start);
            return true;
        }

        let mut probe = *cursor;
        while self.max.is_none_or(|max| state.trail.len() - 1 < max) {
            let before = probe.position();
            self.matcher.reset(&mut state.inner);
            if !self.matcher.attempt(&mut state.inner, &mut probe) {
                break;
            }
            if probe.position() == before {
                let needed = self.min.saturating_sub(state.trail.len() - 1);
                state.trail.extend(iter::repeat_n(before, needed));
                break;
            }
            state.trail.push(probe.position());
        }

        let reached = state.trail.len() - 1;
        trace!(min = self.min, max = ?self.max, reached, "repetition scan");
        if reached < self.min {
            self.reset(state);
            return false;
        }
        state.start = Some(start);
        self.settle(state, reached, cursor)
    }

    fn reset(&self, state: &mut Self::State) {
        self.matcher.reset(&mut state.inner);
        state.start = None;
        state.trail.clear();
        state.count = 0;
    }

    fn collect(&self, state: &Self::State, captures: &mut Captures<'_, T>) {
        if state.count > 0 {
            self.matcher.collect(&state.inner, captures);
        }
    }
}

/// Repeat `matcher` any number of times within `bounds`
pub fn repeat<M>(
    matcher: M,
    bounds: impl RangeBounds<usize>,
) -> Result<Repeat<M>, GrammarError> {
    Repeat::new(matcher, bounds)
}

/// Zero or more repetitions
pub fn many<M>(matcher: M) -> Repeat<M> {
    Repeat::bounded(matcher, 0, None)
}

/// One or more repetitions
pub fn some<M>(matcher: M) -> Repeat<M> {
    Repeat::bounded(matcher, 1, None)
}

/// Zero or one repetition
pub fn optional<M>(matcher: M) -> Repeat<M> {
    Repeat::bounded(matcher, 0, Some(1))
}

/// Extension trait to add repetition methods to matchers
pub trait RepeatExt<T: Symbol>: Matcher<T> + Sized {
    fn many(self) -> Repeat<Self> {
        many(self)
    }

    fn some(self) -> Repeat<Self> {
        some(self)
    }

    fn optional(self) -> Repeat<Self> {
        optional(self)
    }

    fn repeat(self, bounds: impl RangeBounds<usize>) -> Result<Repeat<Self>, GrammarError> {
        Repeat::new(self, bounds)
    }
}

/// Implement RepeatExt for all matchers
impl<T: Symbol, M> RepeatExt<T> for M where M: Matcher<T> {}
