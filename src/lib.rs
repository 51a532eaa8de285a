//! # Backcomb - Backtracking Matcher Combinators
//!
//! Small building blocks for recognizing structured text: symbol classes,
//! literals and an end-of-input assertion, combined with sequence,
//! alternative, bounded repetition and capture.
//!
//! Matchers backtrack without a central choice stack. Each node keeps its
//! own backtracking state, and asking a node to match again at the start of
//! its previous success yields its next alternative match. Grammars are
//! immutable values; per-parse state lives in a [`Search`], so a grammar
//! can be reused and shared freely.
//!
//! The [`url`] module is a complete grammar built on top of the engine.

pub mod and;
pub mod capture;
pub mod class;
pub mod cursor;
pub mod end;
pub mod error;
pub mod grammar;
pub mod literal;
pub mod matcher;
pub mod or;
pub mod prelude;
pub mod repeat;
pub mod symbol;
pub mod url;

pub use and::{And, and};
pub use capture::{Capture, Captures, capture};
pub use class::Class;
pub use cursor::Cursor;
pub use end::{End, end};
pub use error::GrammarError;
pub use grammar::{Grammar, Match, Matches, Search};
pub use literal::{Literal, literal};
pub use matcher::Matcher;
pub use or::{Or, or};
pub use repeat::{Repeat, many, optional, repeat, some};
pub use symbol::Symbol;
