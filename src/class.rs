use crate::cursor::Cursor;
use crate::matcher::{Leaf, Matcher, sealed};
use crate::symbol::Symbol;
use std::ops;

/// Character predicate that matches and consumes exactly one symbol
///
/// Classes compose with `|` (either class matches) and `!` (the class does
/// not match). Negation still consumes a symbol, so `!is(b'/')` fails at the
/// end of input.
///
/// ```
/// use backcomb::class::{is, one_of, word};
///
/// let host_char = !one_of(*b"/:?#");
/// let ident_char = word() | is(b'-');
/// ```
#[derive(Debug, Clone)]
pub enum Class<T> {
    /// Exactly this symbol
    Exact(T),
    /// Any symbol of the set
    Set(Vec<T>),
    /// Inclusive range
    Range(T, T),
    /// Space, tab, carriage return or newline
    Whitespace,
    /// ASCII alphanumeric or underscore
    Word,
    /// ASCII digit
    Digit,
    /// Any single symbol
    Any,
    /// Arbitrary test over one symbol
    Predicate(fn(T) -> bool),
    Not(Box<Class<T>>),
    Union(Box<Class<T>>, Box<Class<T>>),
}

impl<T: Symbol> Class<T> {
    /// Check whether `symbol` belongs to this class
    pub fn test(&self, symbol: T) -> bool {
        match self {
            Class::Exact(expected) => symbol == *expected,
            Class::Set(members) => members.contains(&symbol),
            Class::Range(low, high) => *low <= symbol && symbol <= *high,
            Class::Whitespace => symbol.is_whitespace(),
            Class::Word => symbol.is_word(),
            Class::Digit => symbol.is_digit(),
            Class::Any => true,
            Class::Predicate(predicate) => predicate(symbol),
            Class::Not(inner) => !inner.test(symbol),
            Class::Union(left, right) => left.test(symbol) || right.test(symbol),
        }
    }
}

impl<T> ops::BitOr for Class<T> {
    type Output = Class<T>;

    fn bitor(self, other: Class<T>) -> Class<T> {
        Class::Union(Box::new(self), Box::new(other))
    }
}

impl<T> ops::Not for Class<T> {
    type Output = Class<T>;

    fn not(self) -> Class<T> {
        match self {
            Class::Not(inner) => *inner,
            other => Class::Not(Box::new(other)),
        }
    }
}

impl<T> sealed::Sealed for Class<T> {}

impl<T: Symbol> Matcher<T> for Class<T> {
    type State = Leaf;

    fn attempt(&self, state: &mut Leaf, cursor: &mut Cursor<'_, T>) -> bool {
        state.attempt(cursor, |cursor| {
            cursor
                .value()
                .filter(|&symbol| self.test(symbol))
                .map(|_| 1)
        })
    }

    fn reset(&self, state: &mut Leaf) {
        state.reset();
    }
}

/// Match exactly `symbol`
pub fn is<T>(symbol: T) -> Class<T> {
    Class::Exact(symbol)
}

/// Match any member of `members`
pub fn one_of<T>(members: impl IntoIterator<Item = T>) -> Class<T> {
    Class::Set(members.into_iter().collect())
}

/// Match a symbol in the inclusive range `low..=high`
pub fn between<T>(low: T, high: T) -> Class<T> {
    Class::Range(low, high)
}

pub fn whitespace<T>() -> Class<T> {
    Class::Whitespace
}

pub fn word<T>() -> Class<T> {
    Class::Word
}

pub fn digit<T>() -> Class<T> {
    Class::Digit
}

pub fn any<T>() -> Class<T> {
    Class::Any
}

/// Wrap an arbitrary predicate as a one-symbol matcher
pub fn satisfy<T>(predicate: fn(T) -> bool) -> Class<T> {
    Class::Predicate(predicate)
}
