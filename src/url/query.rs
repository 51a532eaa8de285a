use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Key,
    Value,
}

#[derive(Debug, Default)]
struct Term {
    key: String,
    value: String,
    assigned: bool,
}

impl Term {
    fn flush(&mut self, queries: &mut BTreeMap<String, String>) {
        let term = std::mem::take(self);
        if !term.key.is_empty() || term.assigned {
            queries.insert(term.key, term.value);
        }
    }
}

/// Split a query string (without the leading `?`) into key/value pairs
///
/// Terms are separated by `&`; the first `=` of a term separates key from
/// value and any further `=` is dropped. A bare key maps to an empty value,
/// and a key seen twice keeps its last value.
pub fn parse_queries(query: &str) -> BTreeMap<String, String> {
    let mut queries = BTreeMap::new();
    let mut term = Term::default();
    let mut field = Field::Key;

    for symbol in query.chars() {
        match (symbol, field) {
            ('&', _) => {
                term.flush(&mut queries);
                field = Field::Key;
            }
            ('=', Field::Key) => {
                term.assigned = true;
                field = Field::Value;
            }
            ('=', Field::Value) => {}
            (symbol, Field::Key) => term.key.push(symbol),
            (symbol, Field::Value) => term.value.push(symbol),
        }
    }
    term.flush(&mut queries);
    queries
}
