//! Property-based tests for the matcher engine
//!
//! Inputs are drawn from a small alphabet so that the grammars below have
//! plenty of ways to match, fail and backtrack.

use backcomb::class::any;
use backcomb::prelude::*;
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'!')], 0..12)
}

fn leading_run(input: &[u8], symbol: u8) -> usize {
    input.iter().take_while(|&&s| s == symbol).count()
}

/// End positions of every match, plus the cursor position after each
/// failed attempt
fn drain<M: Matcher<u8>>(grammar: &Grammar<M>, input: &[u8]) -> (Vec<usize>, usize) {
    let mut search = grammar.search();
    let mut ends = Vec::new();
    loop {
        let mut cursor = Cursor::new(input);
        if !search.attempt(&mut cursor) {
            return (ends, cursor.position());
        }
        ends.push(cursor.position());
    }
}

proptest! {
    #[test]
    fn test_failure_never_consumes(input in input_strategy()) {
        let grammars = (
            Grammar::new(many(is(b'a')).and(literal("b!")).and(end())),
            Grammar::new(is(b'a').or(literal("ab")).and(many(any())).and(is(b'!'))),
            Grammar::new(some(!is(b'!')).capture("w").and(optional(is(b'!'))).and(end())),
        );
        prop_assert_eq!(drain(&grammars.0, &input).1, 0);
        prop_assert_eq!(drain(&grammars.1, &input).1, 0);
        prop_assert_eq!(drain(&grammars.2, &input).1, 0);
    }

    #[test]
    fn test_reset_matches_fresh_search(
        first in input_strategy(),
        second in input_strategy(),
        reentries in 0usize..4,
    ) {
        let grammar = Grammar::new(
            many(any())
                .capture("head")
                .and(is(b'b').capture("b"))
                .and(many(any()).capture("tail")),
        );

        let mut used = grammar.search();
        for _ in 0..=reentries {
            used.attempt(&mut Cursor::new(&first[..]));
        }
        used.reset();

        let mut fresh = grammar.search();
        let mut used_cursor = Cursor::new(&second[..]);
        let mut fresh_cursor = Cursor::new(&second[..]);
        prop_assert_eq!(used.attempt(&mut used_cursor), fresh.attempt(&mut fresh_cursor));
        prop_assert_eq!(used_cursor.position(), fresh_cursor.position());
        prop_assert_eq!(used.captures(&second[..]), fresh.captures(&second[..]));
    }

    #[test]
    fn test_repeat_counts_strictly_decrease(
        input in input_strategy(),
        min in 0usize..4,
        extra in 0usize..4,
    ) {
        let max = min + extra;
        let grammar = Grammar::new(is(b'a').repeat(min..=max).unwrap());
        let run = leading_run(&input, b'a');

        let (ends, _) = drain(&grammar, &input);
        let expected: Vec<usize> = if run < min {
            Vec::new()
        } else {
            (min..=run.min(max)).rev().collect()
        };
        prop_assert_eq!(ends, expected);
    }

    #[test]
    fn test_sequence_enumerates_every_split_once(n in 0usize..7) {
        let input = vec![b'a'; n];
        let grammar = Grammar::new(
            many(is(b'a')).capture("left").and(many(is(b'a')).capture("right")),
        );

        let splits: Vec<(usize, usize)> = grammar
            .matches(&input[..])
            .map(|m| {
                let len = |slot| m.captures.get(slot).map_or(0, <[u8]>::len);
                (len("left"), len("right"))
            })
            .collect();

        let expected: Vec<(usize, usize)> = (0..=n)
            .rev()
            .flat_map(|left| (0..=n - left).rev().map(move |right| (left, right)))
            .collect();
        prop_assert_eq!(splits, expected);
    }

    #[test]
    fn test_left_branch_exhausted_before_right(n in 0usize..6) {
        let input = vec![b'a'; n];
        let grammar = Grammar::new(
            many(is(b'a')).capture("left").or(many(is(b'a')).capture("right")),
        );

        let found: Vec<_> = grammar.matches(&input[..]).collect();
        prop_assert_eq!(found.len(), 2 * (n + 1));
        for (index, found) in found.iter().enumerate() {
            let (end, from_left) = if index <= n {
                (n - index, true)
            } else {
                (2 * n + 1 - index, false)
            };
            prop_assert_eq!(found.end, end);
            let other = if from_left { "right" } else { "left" };
            prop_assert!(!found.captures.contains(other));
        }
    }

    #[test]
    fn test_abandoned_capture_is_not_reported(input in input_strategy()) {
        let grammar = Grammar::new(
            literal("a").capture("bang").and(is(b'!')).and(end())
                .or(many(any()).capture("rest").and(end())),
        );
        let captures = grammar.parse(&input[..]).unwrap();
        let bang = input == b"a!";
        prop_assert_eq!(captures.contains("bang"), bang);
        prop_assert_eq!(captures.contains("rest"), !bang && !input.is_empty());
    }
}
