//! Match all query - matches every document in the index

use crate::query::ast::Query;
use serde_json::{Map, Value};

/// Query that matches all documents
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchAllQuery {
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl MatchAllQuery {
    /// Create a new match all query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Query for MatchAllQuery {
    fn source(&self) -> Value {
        let mut inner = Map::new();
        if let Some(boost) = self.boost.filter(|b| b.is_finite()) {
            inner.insert("boost".to_string(), Value::from(boost));
        }
        let mut query = Map::new();
        query.insert("match_all".to_string(), Value::Object(inner));
        Value::Object(query)
    }

    fn query_type(&self) -> &'static str {
        "match_all"
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}
