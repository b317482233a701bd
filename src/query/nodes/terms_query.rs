//! Terms query - matches documents containing any of the specified terms

use crate::query::ast::Query;
use serde_json::{Map, Value};

/// Query that matches documents containing any of the specified terms in a field
///
/// Equivalent to a boolean should of term queries, expressed as a single clause.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermsQuery {
    /// Field to search in
    pub field: String,
    /// Terms to match (document must contain at least one)
    pub terms: Vec<Value>,
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl TermsQuery {
    /// Create a new terms query
    pub fn new<I, T>(field: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            field: field.into(),
            terms: terms.into_iter().map(Into::into).collect(),
            boost: None,
        }
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Add a term to the query
    pub fn add_term(mut self, term: impl Into<Value>) -> Self {
        self.terms.push(term.into());
        self
    }
}

impl Query for TermsQuery {
    fn source(&self) -> Value {
        let mut inner = Map::new();
        inner.insert(self.field.clone(), Value::Array(self.terms.clone()));
        if let Some(boost) = self.boost.filter(|b| b.is_finite()) {
            inner.insert("boost".to_string(), Value::from(boost));
        }

        let mut query = Map::new();
        query.insert("terms".to_string(), Value::Object(inner));
        Value::Object(query)
    }

    fn query_type(&self) -> &'static str {
        "terms"
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}
