use crate::cursor::Cursor;
use crate::matcher::{Matcher, sealed};
use crate::symbol::Symbol;
use std::collections::BTreeMap;
use std::ops::Range;

/// Captured spans of one successful match, keyed by slot name
#[derive(Debug, Clone, PartialEq)]
pub struct Captures<'code, T> {
    source: &'code [T],
    spans: BTreeMap<&'static str, Range<usize>>,
}

impl<'code, T: Symbol> Captures<'code, T> {
    pub fn new(source: &'code [T]) -> Self {
        Captures {
            source,
            spans: BTreeMap::new(),
        }
    }

    /// The symbols captured into `slot`
    ///
    /// `None` also when the span does not fit the source, which happens if
    /// the captures were collected over a different input than was parsed.
    pub fn get(&self, slot: &str) -> Option<&'code [T]> {
        self.spans
            .get(slot)
            .and_then(|span| self.source.get(span.clone()))
    }

    /// The text captured into `slot`
    pub fn text(&self, slot: &str) -> Option<String> {
        self.get(slot).map(T::slice_to_string)
    }

    pub fn span(&self, slot: &str) -> Option<Range<usize>> {
        self.spans.get(slot).cloned()
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.spans.contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate over slot names and their captured symbols, ordered by name
    ///
    /// Spans that do not fit the source are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'code [T])> + '_ {
        self.spans
            .iter()
            .filter_map(|(slot, span)| Some((*slot, self.source.get(span.clone())?)))
    }

    pub(crate) fn insert(&mut self, slot: &'static str, span: Range<usize>) {
        self.spans.insert(slot, span);
    }
}

/// Combinator that records the exact text matched by its child
///
/// Success, failure and reentry are passed through unchanged. The slot
/// holds the span of the child's current match; it is emptied when the
/// child fails, when the node is reset (including when an ancestor
/// abandons this branch while backtracking), and when the match is empty.
#[derive(Debug, Clone)]
pub struct Capture<M> {
    slot: &'static str,
    matcher: M,
}

impl<M> Capture<M> {
    pub fn new(slot: &'static str, matcher: M) -> Self {
        Capture { slot, matcher }
    }

    pub fn slot(&self) -> &'static str {
        self.slot
    }
}

#[derive(Debug, Default)]
pub struct CaptureState<S> {
    inner: S,
    span: Option<Range<usize>>,
}

impl<M> sealed::Sealed for Capture<M> {}

impl<T, M> Matcher<T> for Capture<M>
where
    T: Symbol,
    M: Matcher<T>,
{
    type State = CaptureState<M::State>;

    fn attempt(&self, state: &mut Self::State, cursor: &mut Cursor<'_, T>) -> bool {
        let start = cursor.position();
        if self.matcher.attempt(&mut state.inner, cursor) {
            let end = cursor.position();
            state.span = (end > start).then_some(start..end);
            true
        } else {
            state.span = None;
            false
        }
    }

    fn reset(&self, state: &mut Self::State) {
        self.matcher.reset(&mut state.inner);
        state.span = None;
    }

    fn collect(&self, state: &Self::State, captures: &mut Captures<'_, T>) {
        self.matcher.collect(&state.inner, captures);
        if let Some(span) = &state.span {
            captures.insert(self.slot, span.clone());
        }
    }
}

/// Convenience function to create a Capture matcher
pub fn capture<M>(slot: &'static str, matcher: M) -> Capture<M> {
    Capture::new(slot, matcher)
}

/// Extension trait to add .capture() method support for matchers
pub trait CaptureExt<T: Symbol>: Matcher<T> + Sized {
    fn capture(self, slot: &'static str) -> Capture<Self> {
        Capture::new(slot, self)
    }
}

/// Implement CaptureExt for all matchers
impl<T: Symbol, M> CaptureExt<T> for M where M: Matcher<T> {}
