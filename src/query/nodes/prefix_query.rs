//! Prefix query - matches terms starting with a prefix
//!
//! A prefix query matches all terms that begin with the specified prefix.
//! The engine expands it more cheaply than a wildcard query with a trailing `*`.
//!
//! # Example
//!
//! ```rust
//! use squidex_dsl::query::{PrefixQuery, Query};
//!
//! // Match terms starting with "prog" (programming, progress, etc.)
//! let query = PrefixQuery::new("content", "prog");
//! assert_eq!(query.source()["prefix"]["content"], "prog");
//! ```

use crate::query::ast::Query;
use serde_json::{json, Value};

/// Query that matches terms starting with a prefix
#[derive(Clone, Debug, PartialEq)]
pub struct PrefixQuery {
    /// Field to search in
    pub field: String,
    /// Prefix to match
    pub prefix: String,
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl PrefixQuery {
    /// Create a new prefix query
    pub fn new(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prefix: prefix.into(),
            boost: None,
        }
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Query for PrefixQuery {
    fn source(&self) -> Value {
        let spec = match self.boost.filter(|b| b.is_finite()) {
            None => Value::String(self.prefix.clone()),
            Some(boost) => json!({ "value": self.prefix, "boost": boost }),
        };
        json!({ "prefix": { self.field.as_str(): spec } })
    }

    fn query_type(&self) -> &'static str {
        "prefix"
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}
