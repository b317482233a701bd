//! Term query - exact match on a field

use crate::query::ast::Query;
use serde_json::{json, Value};

/// Query that matches documents containing an exact term in a field
///
/// The term is not analyzed. Any JSON scalar is accepted so numeric and
/// boolean keyword fields can be matched as well as strings.
#[derive(Clone, Debug, PartialEq)]
pub struct TermQuery {
    /// Field to search in
    pub field: String,
    /// Exact term to match
    pub value: Value,
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl TermQuery {
    /// Create a new term query
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            boost: None,
        }
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Query for TermQuery {
    fn source(&self) -> Value {
        // { "term": { "user": "kimchy" } }
        // { "term": { "user": { "value": "kimchy", "boost": 2.0 } } }
        let spec = match self.boost.filter(|b| b.is_finite()) {
            None => self.value.clone(),
            Some(boost) => json!({ "value": self.value, "boost": boost }),
        };
        json!({ "term": { self.field.as_str(): spec } })
    }

    fn query_type(&self) -> &'static str {
        "term"
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}
