//! The URL grammar, assembled from engine primitives
//!
//! Each piece has a named type so the whole grammar can be stored in a
//! [`UrlParser`](super::UrlParser) without boxing.

use crate::and::{And, AndExt};
use crate::capture::{Capture, CaptureExt};
use crate::class::{Class, any, digit, is, one_of, word};
use crate::end::{End, end};
use crate::literal::{Literal, literal};
use crate::or::{Or, OrExt};
use crate::repeat::{Repeat, RepeatExt, many, optional};

pub const PROTOCOL: &str = "protocol";
pub const USER: &str = "user";
pub const PASSWORD: &str = "password";
pub const HOST: &str = "host";
pub const PORT: &str = "port";
pub const PATH: &str = "path";
pub const QUERY: &str = "query";
pub const FRAGMENT: &str = "fragment";

type Byte = Class<u8>;
type Run = Repeat<Byte>;

pub type Protocol = And<Capture<Run>, Literal<u8>>;
pub type UserInfo = And<And<Capture<Run>, Repeat<And<Byte, Capture<Run>>>>, Byte>;
pub type Host = Capture<Run>;
pub type Port = And<Byte, Capture<Run>>;
pub type Segments = Repeat<Or<And<Run, Byte>, Run>>;
pub type Path = And<Byte, Capture<And<Segments, Repeat<Byte>>>>;
pub type Term = Or<And<And<Run, Byte>, Run>, Run>;
pub type Query = And<Byte, Capture<And<Term, Repeat<And<Byte, Term>>>>>;
pub type Fragment = And<Byte, Capture<Run>>;

pub type UrlGrammar = And<
    And<
        And<
            And<And<And<And<Protocol, Repeat<UserInfo>>, Host>, Repeat<Port>>, Repeat<Path>>,
            Repeat<Query>,
        >,
        Repeat<Fragment>,
    >,
    End,
>;

/// `scheme://`, the scheme made of word characters
pub fn protocol() -> Protocol {
    word().some().capture(PROTOCOL).and(literal("://"))
}

/// `user@` or `user:password@`
pub fn user_info() -> UserInfo {
    let user = (!one_of(*b":@")).some().capture(USER);
    let password = is(b':').and((!is(b'@')).some().capture(PASSWORD));
    user.and(optional(password)).and(is(b'@'))
}

pub fn host() -> Host {
    (!one_of(*b"/:?#")).some().capture(HOST)
}

pub fn port() -> Port {
    is(b':').and(digit().some().capture(PORT))
}

fn segment() -> Run {
    (!one_of(*b"/#?")).some()
}

/// `/` followed by slash separated segments; the captured path excludes
/// the leading slash but keeps a trailing one
pub fn path() -> Path {
    let segments = many(segment().and(is(b'/')).or(segment()));
    is(b'/').and(segments.and(optional(is(b'/'))).capture(PATH))
}

/// One `key=value` or bare `key` term; either side of `=` may be empty
fn term() -> Term {
    let key = (!one_of(*b"=&#")).many();
    let value = (!one_of(*b"&#")).many();
    key.and(is(b'=')).and(value).or((!one_of(*b"=&#")).some())
}

pub fn query() -> Query {
    let terms = term().and(many(is(b'&').and(term())));
    is(b'?').and(terms.capture(QUERY))
}

pub fn fragment() -> Fragment {
    is(b'#').and(any().some().capture(FRAGMENT))
}

pub fn url() -> UrlGrammar {
    protocol()
        .and(optional(user_info()))
        .and(host())
        .and(optional(port()))
        .and(optional(path()))
        .and(optional(query()))
        .and(optional(fragment()))
        .and(end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    fn slot(
        grammar: &Grammar<impl crate::Matcher<u8>>,
        input: &str,
        name: &str,
    ) -> Option<String> {
        grammar.parse(input.as_bytes()).and_then(|c| c.text(name))
    }

    #[test]
    fn test_protocol_requires_separator() {
        let grammar = Grammar::new(protocol());
        assert_eq!(slot(&grammar, "https://", PROTOCOL).as_deref(), Some("https"));
        assert!(!grammar.is_match(b"https:/"));
        assert!(!grammar.is_match(b"://"));
    }

    #[test]
    fn test_user_info_with_and_without_password() {
        let grammar = Grammar::new(user_info());
        let captures = grammar.parse(b"alice:secret@").unwrap();
        assert_eq!(captures.text(USER).as_deref(), Some("alice"));
        assert_eq!(captures.text(PASSWORD).as_deref(), Some("secret"));

        let captures = grammar.parse(b"bob@").unwrap();
        assert_eq!(captures.text(USER).as_deref(), Some("bob"));
        assert!(!captures.contains(PASSWORD));
    }

    #[test]
    fn test_user_info_needs_at_sign() {
        assert!(!Grammar::new(user_info()).is_match(b"host.com:8080/a"));
    }

    #[test]
    fn test_host_stops_at_delimiters() {
        let grammar = Grammar::new(host());
        let inputs = ["example.org/x", "example.org:1", "example.org?q", "example.org#f"];
        for input in inputs {
            assert_eq!(slot(&grammar, input, HOST).as_deref(), Some("example.org"));
        }
    }

    #[test]
    fn test_path_keeps_trailing_slash() {
        let grammar = Grammar::new(path().and(end()));
        assert_eq!(slot(&grammar, "/a/b", PATH).as_deref(), Some("a/b"));
        assert_eq!(slot(&grammar, "/a/b/", PATH).as_deref(), Some("a/b/"));
        assert!(grammar.is_match(b"/"));
        assert_eq!(slot(&grammar, "/", PATH), None);
    }

    #[test]
    fn test_query_terms() {
        let grammar = Grammar::new(query().and(end()));
        assert_eq!(slot(&grammar, "?a=1&b", QUERY).as_deref(), Some("a=1&b"));
        assert_eq!(slot(&grammar, "?=noKey", QUERY).as_deref(), Some("=noKey"));
        assert_eq!(slot(&grammar, "?k=", QUERY).as_deref(), Some("k="));
        assert!(!grammar.is_match(b"?"));
        assert!(!grammar.is_match(b"?a&"));
    }

    #[test]
    fn test_fragment_takes_the_rest() {
        let grammar = Grammar::new(fragment());
        assert_eq!(slot(&grammar, "#a?b#c", FRAGMENT).as_deref(), Some("a?b#c"));
        assert!(!grammar.is_match(b"#"));
    }
}
