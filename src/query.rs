//! Query-string assembly for Gerstlix API requests.
//!
//! The API expects list parameters in bracket notation (`key[]=a&key[]=b`)
//! rather than comma-joined values or repeated bare keys, which the stock
//! form serializers do not produce. This module renders query strings by
//! hand: pairs keep their insertion order, keys and values are
//! percent-encoded and the brackets stay literal.

use urlencoding::encode;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum QueryValue {
    /// A scalar, rendered as `key=value`.
    Single(String),
    /// A list, rendered as `key[]=a&key[]=b`.
    List(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::List(values)
    }
}

impl From<Vec<u32>> for QueryValue {
    fn from(values: Vec<u32>) -> Self {
        QueryValue::List(values.iter().map(u32::to_string).collect())
    }
}

/// Ordered collection of query parameters.
///
/// Every API call builds its query string through this type, so all
/// requests share one encoding. Pairs are rendered in the order they were
/// pushed.
#[derive(Debug, Clone)]
pub(crate) struct QueryPairs {
    pairs: Vec<(&'static str, QueryValue)>,
}

impl QueryPairs {
    /// Creates an empty collection.
    pub(crate) fn new() -> Self {
        QueryPairs { pairs: Vec::new() }
    }

    /// Appends a parameter.
    pub(crate) fn push(&mut self, key: &'static str, value: impl Into<QueryValue>) {
        self.pairs.push((key, value.into()));
    }

    /// Inserts a parameter in front of every pair pushed so far.
    pub(crate) fn prepend(&mut self, key: &'static str, value: impl Into<QueryValue>) {
        self.pairs.insert(0, (key, value.into()));
    }

    /// Renders the pairs as a query string, without the leading `?`.
    pub(crate) fn to_query_string(&self) -> String {
        let mut parts = Vec::new();

        for (key, value) in &self.pairs {
            match value {
                QueryValue::Single(v) => parts.push(format!("{}={}", encode(key), encode(v))),
                QueryValue::List(values) => {
                    for v in values {
                        parts.push(format!("{}[]={}", encode(key), encode(v)));
                    }
                }
            }
        }

        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_pairs_keep_insertion_order() {
        let mut pairs = QueryPairs::new();
        pairs.push("token", "abcd");
        pairs.push("server", 1u32);

        assert_eq!(pairs.to_query_string(), "token=abcd&server=1");
    }

    #[test]
    fn test_list_values_use_bracket_notation() {
        let mut pairs = QueryPairs::new();
        pairs.push("ids", vec![1u32, 2]);

        assert_eq!(pairs.to_query_string(), "ids[]=1&ids[]=2");
    }

    #[test]
    fn test_list_values_mix_with_scalars() {
        let mut pairs = QueryPairs::new();
        pairs.push("token", "abcd");
        pairs.push("ids", vec!["a".to_owned(), "b".to_owned()]);
        pairs.push("server", 3u32);

        assert_eq!(
            pairs.to_query_string(),
            "token=abcd&ids[]=a&ids[]=b&server=3"
        );
    }

    #[test]
    fn test_prepend_puts_the_pair_first() {
        let mut pairs = QueryPairs::new();
        pairs.push("server", 1u32);
        pairs.prepend("token", "abcd");

        assert_eq!(pairs.to_query_string(), "token=abcd&server=1");
    }

    #[test]
    fn test_reserved_characters_are_percent_encoded() {
        let mut pairs = QueryPairs::new();
        pairs.push("player", "Kalcor & Co");

        assert_eq!(pairs.to_query_string(), "player=Kalcor%20%26%20Co");
    }

    #[test]
    fn test_empty_collection_renders_an_empty_string() {
        assert_eq!(QueryPairs::new().to_query_string(), "");
    }
}
