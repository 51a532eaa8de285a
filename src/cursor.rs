use crate::symbol::Symbol;
use std::cmp::Ordering;
use std::ptr;

/// A position within one fixed input sequence
///
/// Cursors are cheap to copy. Matchers take a `&mut Cursor` and move it
/// forward only when they succeed. The end of the input is the end of the
/// slice the cursor was created from; to match against a sub-range, slice
/// the input first.
///
/// Two cursors compare equal when they point at the same position of the
/// same source. Cursors over different sources are unordered.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'code, T> {
    data: &'code [T],
    position: usize,
}

impl<'code, T: Symbol> Cursor<'code, T> {
    /// Create a cursor at the start of `data`
    pub fn new(data: &'code [T]) -> Self {
        Cursor { data, position: 0 }
    }

    /// Create a cursor at `position`, clamped to the end of `data`
    pub fn at(data: &'code [T], position: usize) -> Self {
        Cursor {
            data,
            position: position.min(data.len()),
        }
    }

    /// The symbol under the cursor, or `None` at the end of input
    pub fn value(&self) -> Option<T> {
        self.data.get(self.position).copied()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if the cursor is at the end of the input
    pub fn is_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// The unconsumed suffix of the input
    pub fn remaining(&self) -> &'code [T] {
        &self.data[self.position..]
    }

    /// The whole input this cursor walks over
    pub fn source(&self) -> &'code [T] {
        self.data
    }

    /// Move forward by `count` symbols, stopping at the end of input
    pub(crate) fn advance(&mut self, count: usize) {
        self.position = (self.position + count).min(self.data.len());
    }

    /// Jump to an absolute position previously reached on this source
    pub(crate) fn seek(&mut self, position: usize) {
        self.position = position.min(self.data.len());
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.data, other.data) && self.position == other.position
    }
}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.data, other.data) {
            self.position.partial_cmp(&other.position)
        } else {
            None
        }
    }
}
