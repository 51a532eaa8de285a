//! URL decomposition built on the matcher engine
//!
//! ```
//! use backcomb::url::UrlParser;
//!
//! let parser = UrlParser::new();
//! let url = parser.parse("http://user:pw@host.com:8080/a/b?x=1#frag").unwrap();
//! assert_eq!(url.host, "host.com");
//! assert_eq!(url.port, Some(8080));
//! ```

pub mod grammar;
pub mod query;

use crate::grammar::Grammar;
use grammar::{FRAGMENT, HOST, PASSWORD, PATH, PORT, PROTOCOL, QUERY, USER, UrlGrammar};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

pub use query::parse_queries;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("input is not a URL")]
    NoMatch,
    #[error("port {0} is out of range")]
    InvalidPort(String),
}

/// Components of a parsed URL
///
/// Absent components are empty, except the port which is `None` (rendered
/// as `-1` in JSON).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Url {
    pub protocol: String,
    pub host: String,
    pub user: String,
    pub password: String,
    #[serde(serialize_with = "port_or_sentinel")]
    pub port: Option<u16>,
    pub path: String,
    pub queries: BTreeMap<String, String>,
    pub fragment: String,
}

fn port_or_sentinel<S: Serializer>(
    port: &Option<u16>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match port {
        Some(port) => serializer.serialize_i32(i32::from(*port)),
        None => serializer.serialize_i32(-1),
    }
}

impl Url {
    /// Parse one URL with a freshly built grammar
    ///
    /// Use a [`UrlParser`] to parse many lines with one grammar.
    pub fn parse(input: &str) -> Result<Url, UrlError> {
        UrlParser::new().parse(input)
    }

    /// Pretty-printed JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Single-line JSON rendering
    pub fn to_json_compact(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Reusable URL parser
///
/// The grammar is built once in [`UrlParser::new`]; every call to
/// [`UrlParser::parse`] runs its own search, so one parser can be shared.
#[derive(Debug, Clone)]
pub struct UrlParser {
    grammar: Grammar<UrlGrammar>,
}

impl UrlParser {
    pub fn new() -> Self {
        UrlParser {
            grammar: Grammar::new(grammar::url()),
        }
    }

    pub fn parse(&self, input: &str) -> Result<Url, UrlError> {
        let Some(captures) = self.grammar.parse(input.as_bytes()) else {
            debug!(input, "rejected: no match");
            return Err(UrlError::NoMatch);
        };
        let text = |slot: &str| captures.text(slot).unwrap_or_default();

        let port = match captures.text(PORT) {
            Some(digits) => match digits.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    debug!(input, port = %digits, "rejected: port out of range");
                    return Err(UrlError::InvalidPort(digits));
                }
            },
            None => None,
        };

        Ok(Url {
            protocol: text(PROTOCOL),
            host: text(HOST),
            user: text(USER),
            password: text(PASSWORD),
            port,
            path: text(PATH),
            queries: captures
                .text(QUERY)
                .map(|query| parse_queries(&query))
                .unwrap_or_default(),
            fragment: text(FRAGMENT),
        })
    }
}

impl Default for UrlParser {
    fn default() -> Self {
        Self::new()
    }
}
