//! Boolean query - combines multiple clauses with must, should, must_not semantics

use crate::query::ast::Query;
use crate::query::types::{MinimumShouldMatch, Occur};
use serde_json::{Map, Value};
use tracing::trace;

/// Boolean query combining multiple clauses
///
/// The boolean query supports three types of clauses:
/// - `must`: All clauses must match (AND). Contributes to score.
/// - `should`: At least one clause should match (OR). Contributes to score.
/// - `must_not`: No clause must match (NOT). Does not contribute to score.
///
/// A clause list with a single entry is rendered as that entry's object, a
/// longer list as an array in insertion order, and an empty list is omitted.
/// Modifiers are only rendered once set.
///
/// # Example
///
/// ```json
/// {
///   "bool": {
///     "must": { "term": { "user": "kimchy" } },
///     "must_not": {
///       "range": { "age": { "gte": 10, "lte": 20 } }
///     },
///     "should": [
///       { "term": { "tag": "wow" } },
///       { "term": { "tag": "elasticsearch" } }
///     ],
///     "minimum_should_match": "1",
///     "boost": 1.0
///   }
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoolQuery {
    must: Vec<Box<dyn Query>>,
    should: Vec<Box<dyn Query>>,
    must_not: Vec<Box<dyn Query>>,
    minimum_should_match: Option<MinimumShouldMatch>,
    boost: Option<f64>,
    disable_coord: Option<bool>,
}

impl BoolQuery {
    /// Create a new empty boolean query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a must clause
    pub fn must(self, query: impl Query + 'static) -> Self {
        self.clause(Occur::Must, query)
    }

    /// Add a should clause
    pub fn should(self, query: impl Query + 'static) -> Self {
        self.clause(Occur::Should, query)
    }

    /// Add a must_not clause
    pub fn must_not(self, query: impl Query + 'static) -> Self {
        self.clause(Occur::MustNot, query)
    }

    /// Add a must clause (boxed)
    pub fn must_boxed(self, query: Box<dyn Query>) -> Self {
        self.clause_boxed(Occur::Must, query)
    }

    /// Add a should clause (boxed)
    pub fn should_boxed(self, query: Box<dyn Query>) -> Self {
        self.clause_boxed(Occur::Should, query)
    }

    /// Add a must_not clause (boxed)
    pub fn must_not_boxed(self, query: Box<dyn Query>) -> Self {
        self.clause_boxed(Occur::MustNot, query)
    }

    /// Add a clause with the given occurrence
    pub fn clause(self, occur: Occur, query: impl Query + 'static) -> Self {
        self.clause_boxed(occur, Box::new(query))
    }

    /// Add a boxed clause with the given occurrence
    pub fn clause_boxed(mut self, occur: Occur, query: Box<dyn Query>) -> Self {
        self.clauses_mut(occur).push(query);
        self
    }

    /// Set minimum should match from an engine expression
    ///
    /// The expression is emitted exactly as given. A blank expression clears
    /// the setting.
    pub fn with_minimum_should_match(mut self, expr: impl AsRef<str>) -> Self {
        self.minimum_should_match = MinimumShouldMatch::parse(expr.as_ref());
        self
    }

    /// Set minimum should match to an exact clause count
    pub fn with_minimum_should_match_count(mut self, count: usize) -> Self {
        self.minimum_should_match = Some(MinimumShouldMatch::Count(count));
        self
    }

    /// Set boost factor
    ///
    /// NaN and infinite values have no JSON number form and are not emitted.
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Enable or disable coordination-based scoring of should clauses
    pub fn with_disable_coord(mut self, disable_coord: bool) -> Self {
        self.disable_coord = Some(disable_coord);
        self
    }

    /// Clauses registered under the given occurrence, in insertion order
    pub fn clauses(&self, occur: Occur) -> &[Box<dyn Query>] {
        match occur {
            Occur::Must => &self.must,
            Occur::MustNot => &self.must_not,
            Occur::Should => &self.should,
        }
    }

    fn clauses_mut(&mut self, occur: Occur) -> &mut Vec<Box<dyn Query>> {
        match occur {
            Occur::Must => &mut self.must,
            Occur::MustNot => &mut self.must_not,
            Occur::Should => &mut self.should,
        }
    }

    pub fn minimum_should_match(&self) -> Option<&MinimumShouldMatch> {
        self.minimum_should_match.as_ref()
    }

    pub fn boost(&self) -> Option<f64> {
        self.boost
    }

    pub fn disable_coord(&self) -> Option<bool> {
        self.disable_coord
    }

    /// Check if this query has no clauses
    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.should.is_empty() && self.must_not.is_empty()
    }

    /// Get total number of clauses
    pub fn clause_count(&self) -> usize {
        self.must.len() + self.should.len() + self.must_not.len()
    }
}

/// Render a clause list: omitted when empty, unwrapped when singular
fn render_clauses(clauses: &[Box<dyn Query>]) -> Option<Value> {
    match clauses {
        [] => None,
        [single] => Some(single.source()),
        many => Some(Value::Array(many.iter().map(|q| q.source()).collect())),
    }
}

impl Query for BoolQuery {
    fn source(&self) -> Value {
        trace!(
            must = self.must.len(),
            must_not = self.must_not.len(),
            should = self.should.len(),
            "rendering bool query"
        );

        let mut inner = Map::new();

        for occur in Occur::ALL {
            if let Some(rendered) = render_clauses(self.clauses(occur)) {
                inner.insert(occur.wire_key().to_string(), rendered);
            }
        }

        if let Some(ref msm) = self.minimum_should_match {
            inner.insert(
                "minimum_should_match".to_string(),
                Value::String(msm.to_string()),
            );
        }
        if let Some(boost) = self.boost.filter(|b| b.is_finite()) {
            inner.insert("boost".to_string(), Value::from(boost));
        }
        if let Some(disable_coord) = self.disable_coord {
            inner.insert("disable_coord".to_string(), Value::Bool(disable_coord));
        }

        let mut query = Map::new();
        query.insert("bool".to_string(), Value::Object(inner));
        Value::Object(query)
    }

    fn query_type(&self) -> &'static str {
        "bool"
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}
