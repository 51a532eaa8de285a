//! Everything needed to assemble and run a grammar
//!
//! ```
//! use backcomb::prelude::*;
//!
//! let pair = Grammar::new(
//!     word().some().capture("key")
//!         .and(is(b'='))
//!         .and(any().many().capture("value"))
//!         .and(end()),
//! );
//! assert!(pair.is_match(b"lang=en"));
//! ```

pub use crate::and::{AndExt, and};
pub use crate::capture::{CaptureExt, Captures, capture};
pub use crate::class::{Class, any, between, digit, is, one_of, satisfy, whitespace, word};
pub use crate::cursor::Cursor;
pub use crate::end::end;
pub use crate::error::GrammarError;
pub use crate::grammar::{Grammar, Search};
pub use crate::literal::{literal, literal_chars};
pub use crate::matcher::Matcher;
pub use crate::or::{OrExt, or};
pub use crate::repeat::{RepeatExt, many, optional, repeat, some};
pub use crate::symbol::Symbol;
