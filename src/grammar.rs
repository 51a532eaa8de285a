use crate::capture::Captures;
use crate::cursor::Cursor;
use crate::matcher::Matcher;
use crate::symbol::Symbol;
use tracing::trace;

/// An assembled grammar, ready to be run against any number of inputs
///
/// The grammar itself is immutable; each parse keeps its backtracking
/// state in its own [`Search`]. A grammar can therefore be shared between
/// threads and used for concurrent parses.
///
/// ```
/// use backcomb::prelude::*;
///
/// let grammar = Grammar::new(word().some().capture("scheme").and(literal("://")));
/// let captures = grammar.parse(b"https://example.org").unwrap();
/// assert_eq!(captures.text("scheme").as_deref(), Some("https"));
/// ```
#[derive(Debug, Clone)]
pub struct Grammar<M> {
    root: M,
}

impl<M> Grammar<M> {
    pub fn new(root: M) -> Self {
        Grammar { root }
    }

    pub fn root(&self) -> &M {
        &self.root
    }

    /// Start a search with freshly reset state
    pub fn search<T>(&self) -> Search<'_, T, M>
    where
        T: Symbol,
        M: Matcher<T>,
    {
        Search {
            root: &self.root,
            state: M::State::default(),
        }
    }

    /// Match the grammar once at the start of `input`
    ///
    /// Returns the captures of the first successful match. Whether the match
    /// must cover the whole input is up to the grammar (see `end()`).
    pub fn parse<'code, T>(&self, input: &'code [T]) -> Option<Captures<'code, T>>
    where
        T: Symbol,
        M: Matcher<T>,
    {
        let mut search = self.search();
        let mut cursor = Cursor::new(input);
        let matched = search.attempt(&mut cursor);
        trace!(len = input.len(), matched, end = cursor.position(), "parse");
        matched.then(|| search.captures(input))
    }

    pub fn is_match<T>(&self, input: &[T]) -> bool
    where
        T: Symbol,
        M: Matcher<T>,
    {
        self.search().attempt(&mut Cursor::new(input))
    }

    /// Every match at the start of `input`, in backtracking order
    pub fn matches<'g, 'code, T>(&'g self, input: &'code [T]) -> Matches<'g, 'code, T, M>
    where
        T: Symbol,
        M: Matcher<T>,
    {
        Matches {
            search: self.search(),
            input,
            exhausted: false,
        }
    }
}

/// Mutable state of one parse against a [`Grammar`]
///
/// `attempt` follows the matcher protocol: calling it again with the
/// cursor back at the start of the previous success asks for the next
/// alternative match.
pub struct Search<'g, T, M>
where
    T: Symbol,
    M: Matcher<T>,
{
    root: &'g M,
    state: M::State,
}

impl<T, M> Search<'_, T, M>
where
    T: Symbol,
    M: Matcher<T>,
{
    pub fn attempt(&mut self, cursor: &mut Cursor<'_, T>) -> bool {
        self.root.attempt(&mut self.state, cursor)
    }

    /// Forget all backtracking and capture state
    pub fn reset(&mut self) {
        self.root.reset(&mut self.state);
    }

    /// Captures of the current match
    ///
    /// `source` must be the input the search was run on.
    pub fn captures<'code>(&self, source: &'code [T]) -> Captures<'code, T> {
        let mut captures = Captures::new(source);
        self.root.collect(&self.state, &mut captures);
        captures
    }
}

/// One successful match from [`Grammar::matches`]
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'code, T> {
    pub end: usize,
    pub captures: Captures<'code, T>,
}

/// Iterator over successive reentries at the start of one input
pub struct Matches<'g, 'code, T, M>
where
    T: Symbol,
    M: Matcher<T>,
{
    search: Search<'g, T, M>,
    input: &'code [T],
    exhausted: bool,
}

impl<'code, T, M> Iterator for Matches<'_, 'code, T, M>
where
    T: Symbol,
    M: Matcher<T>,
{
    type Item = Match<'code, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let mut cursor = Cursor::new(self.input);
        if !self.search.attempt(&mut cursor) {
            // A failed attempt resets the state, which would restart the search.
            self.exhausted = true;
            return None;
        }
        Some(Match {
            end: cursor.position(),
            captures: self.search.captures(self.input),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::capture::CaptureExt;
    use crate::class::{any, digit, is, word};
    use crate::end::end;
    use crate::literal::literal;
    use crate::or::OrExt;
    use crate::repeat::{RepeatExt, many};

    #[test]
    fn test_parse_with_captures() {
        let grammar = Grammar::new(
            word()
                .some()
                .capture("scheme")
                .and(literal("://"))
                .and(any().some().capture("rest"))
                .and(end()),
        );
        let captures = grammar.parse(b"ftp://files").unwrap();
        assert_eq!(captures.text("scheme").as_deref(), Some("ftp"));
        assert_eq!(captures.text("rest").as_deref(), Some("files"));
    }

    #[test]
    fn test_parse_rejects() {
        let grammar = Grammar::new(word().some().and(literal("://")));
        assert!(grammar.parse(b"not a url").is_none());
        assert!(!grammar.is_match(b"not a url"));
    }

    #[test]
    fn test_prefix_match_is_accepted_without_end() {
        let grammar = Grammar::new(digit().some());
        assert!(grammar.is_match(b"12ab"));
        assert!(!Grammar::new(digit().some().and(end())).is_match(b"12ab"));
    }

    #[test]
    fn test_matches_enumerates_in_order() {
        let grammar = Grammar::new(many(is(b'a')).capture("run"));
        let found: Vec<_> = grammar
            .matches(b"aaa")
            .map(|m| (m.end, m.captures.text("run")))
            .collect();
        assert_eq!(
            found,
            vec![
                (3, Some("aaa".to_string())),
                (2, Some("aa".to_string())),
                (1, Some("a".to_string())),
                (0, None),
            ]
        );
    }

    #[test]
    fn test_matches_is_fused() {
        let grammar = Grammar::new(is(b'a'));
        let mut matches = grammar.matches(b"a");
        assert!(matches.next().is_some());
        assert!(matches.next().is_none());
        assert!(matches.next().is_none());
    }

    #[test]
    fn test_search_reset_restarts() {
        let grammar = Grammar::new(many(is(b'a')));
        let data = b"aa";
        let mut search = grammar.search();

        let mut cursor = Cursor::new(&data[..]);
        assert!(search.attempt(&mut cursor));
        assert_eq!(cursor.position(), 2);

        let mut cursor = Cursor::new(&data[..]);
        assert!(search.attempt(&mut cursor));
        assert_eq!(cursor.position(), 1);

        search.reset();
        let mut cursor = Cursor::new(&data[..]);
        assert!(search.attempt(&mut cursor));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_reused_grammar_has_no_leaking_state() {
        let grammar = Grammar::new(
            literal("a")
                .capture("a")
                .or(literal("b").capture("b"))
                .and(end()),
        );
        let first = grammar.parse(b"a").unwrap();
        let second = grammar.parse(b"b").unwrap();
        assert!(first.contains("a") && !first.contains("b"));
        assert!(second.contains("b") && !second.contains("a"));
    }

    #[test]
    fn test_grammar_is_shareable_across_threads() {
        let grammar = Grammar::new(digit().some().capture("n").and(end()));
        std::thread::scope(|scope| {
            let handles: Vec<_> = ["1", "22", "333"]
                .into_iter()
                .map(|input| {
                    let grammar = &grammar;
                    scope.spawn(move || {
                        grammar
                            .parse(input.as_bytes())
                            .and_then(|c| c.text("n"))
                    })
                })
                .collect();
            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(
                results,
                vec![
                    Some("1".to_string()),
                    Some("22".to_string()),
                    Some("333".to_string())
                ]
            );
        });
    }

    #[test]
    fn test_captures_over_shorter_source() {
        let grammar = Grammar::new(any().some().capture("all"));
        let long = b"abcd";
        let mut search = grammar.search();
        assert!(search.attempt(&mut Cursor::new(&long[..])));

        let captures = search.captures(&long[..2]);
        assert!(captures.contains("all"));
        assert_eq!(captures.get("all"), None);
        assert_eq!(captures.iter().count(), 0);
    }

    #[test]
    fn test_char_input() {
        let input: Vec<char> = "naïve!".chars().collect();
        let grammar = Grammar::new((!is('!')).some().capture("word").and(is('!')));
        let captures = grammar.parse(&input[..]).unwrap();
        assert_eq!(captures.text("word").as_deref(), Some("naïve"));
    }
}
