//! Match query - full-text search with analysis

use crate::query::ast::Query;
use crate::query::types::MatchOperator;
use serde_json::{Map, Value};

/// Query that performs full-text search on a field
///
/// The engine analyzes the input text (tokenized, lowercased, stemmed) and
/// searches the resulting terms using the specified operator.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchQuery {
    /// Field to search in
    pub field: String,
    /// Text to search for (will be analyzed)
    pub text: String,
    /// How to combine terms (AND/OR); unset leaves the engine default
    pub operator: Option<MatchOperator>,
    /// Boost factor for scoring
    pub boost: Option<f64>,
    /// Minimum number of terms that should match (for OR operator)
    pub minimum_should_match: Option<String>,
    /// Analyzer to use (if not specified, uses field's default analyzer)
    pub analyzer: Option<String>,
}

impl MatchQuery {
    /// Create a new match query
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
            operator: None,
            boost: None,
            minimum_should_match: None,
            analyzer: None,
        }
    }

    /// Set the operator to AND (all terms must match)
    pub fn with_and_operator(mut self) -> Self {
        self.operator = Some(MatchOperator::And);
        self
    }

    /// Set the operator to OR (at least one term must match)
    pub fn with_or_operator(mut self) -> Self {
        self.operator = Some(MatchOperator::Or);
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set minimum should match; an empty expression clears it
    pub fn with_minimum_should_match(mut self, msm: impl Into<String>) -> Self {
        let msm = msm.into();
        self.minimum_should_match = if msm.is_empty() { None } else { Some(msm) };
        self
    }

    /// Set the analyzer
    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Whether only the field and text are set, allowing the short form
    fn is_simple(&self) -> bool {
        self.operator.is_none()
            && self.boost.filter(|b| b.is_finite()).is_none()
            && self.minimum_should_match.is_none()
            && self.analyzer.is_none()
    }
}

impl Query for MatchQuery {
    fn source(&self) -> Value {
        // Short form: { "match": { "content": "rust programming" } }
        let spec = if self.is_simple() {
            Value::String(self.text.clone())
        } else {
            let mut spec = Map::new();
            spec.insert("query".to_string(), Value::String(self.text.clone()));
            if let Some(op) = self.operator {
                spec.insert("operator".to_string(), Value::from(op.as_str()));
            }
            if let Some(ref msm) = self.minimum_should_match {
                spec.insert("minimum_should_match".to_string(), Value::String(msm.clone()));
            }
            if let Some(ref analyzer) = self.analyzer {
                spec.insert("analyzer".to_string(), Value::String(analyzer.clone()));
            }
            if let Some(boost) = self.boost.filter(|b| b.is_finite()) {
                spec.insert("boost".to_string(), Value::from(boost));
            }
            Value::Object(spec)
        };

        let mut inner = Map::new();
        inner.insert(self.field.clone(), spec);
        let mut query = Map::new();
        query.insert("match".to_string(), Value::Object(inner));
        Value::Object(query)
    }

    fn query_type(&self) -> &'static str {
        "match"
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}
