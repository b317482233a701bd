//! Range query - matches documents with field values in a range

use crate::query::ast::Query;
use crate::query::types::{RangeBounds, RangeValue};
use serde_json::{Map, Value};

/// Query that matches documents with field values within a specified range
///
/// Works with numeric fields (Long, Double) and date or keyword fields
/// (String bounds such as `"now-1d"` are passed through to the engine).
#[derive(Clone, Debug, PartialEq)]
pub struct RangeQuery {
    /// Field to search in
    pub field: String,
    /// Range bounds (gte, gt, lte, lt)
    pub bounds: RangeBounds,
    /// Boost factor for scoring
    pub boost: Option<f64>,
}

impl RangeQuery {
    /// Create a new range query
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            bounds: RangeBounds::default(),
            boost: None,
        }
    }

    /// Set the greater-than-or-equal bound
    pub fn gte(mut self, value: i64) -> Self {
        self.bounds.gte = Some(RangeValue::Long(value));
        self
    }

    /// Set the greater-than bound
    pub fn gt(mut self, value: i64) -> Self {
        self.bounds.gt = Some(RangeValue::Long(value));
        self
    }

    /// Set the less-than-or-equal bound
    pub fn lte(mut self, value: i64) -> Self {
        self.bounds.lte = Some(RangeValue::Long(value));
        self
    }

    /// Set the less-than bound
    pub fn lt(mut self, value: i64) -> Self {
        self.bounds.lt = Some(RangeValue::Long(value));
        self
    }

    /// Set the greater-than-or-equal bound (float)
    pub fn gte_f64(mut self, value: f64) -> Self {
        self.bounds.gte = Some(RangeValue::Double(value));
        self
    }

    /// Set the greater-than bound (float)
    pub fn gt_f64(mut self, value: f64) -> Self {
        self.bounds.gt = Some(RangeValue::Double(value));
        self
    }

    /// Set the less-than-or-equal bound (float)
    pub fn lte_f64(mut self, value: f64) -> Self {
        self.bounds.lte = Some(RangeValue::Double(value));
        self
    }

    /// Set the less-than bound (float)
    pub fn lt_f64(mut self, value: f64) -> Self {
        self.bounds.lt = Some(RangeValue::Double(value));
        self
    }

    /// Set the greater-than-or-equal bound (date math or keyword)
    pub fn gte_str(mut self, value: impl Into<String>) -> Self {
        self.bounds.gte = Some(RangeValue::String(value.into()));
        self
    }

    /// Set the less-than-or-equal bound (date math or keyword)
    pub fn lte_str(mut self, value: impl Into<String>) -> Self {
        self.bounds.lte = Some(RangeValue::String(value.into()));
        self
    }

    /// Set the bounds from a RangeBounds struct
    pub fn with_bounds(mut self, bounds: RangeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Check if this is a point query (gte == lte)
    pub fn is_point_query(&self) -> bool {
        match (&self.bounds.gte, &self.bounds.lte) {
            (Some(gte), Some(lte)) => gte == lte,
            _ => false,
        }
    }
}

impl Query for RangeQuery {
    fn source(&self) -> Value {
        // { "range": { "age": { "gte": 10, "lte": 20 } } }
        let mut spec = self.bounds.to_map();
        if let Some(boost) = self.boost.filter(|b| b.is_finite()) {
            spec.insert("boost".to_string(), Value::from(boost));
        }

        let mut inner = Map::new();
        inner.insert(self.field.clone(), Value::Object(spec));
        let mut query = Map::new();
        query.insert("range".to_string(), Value::Object(inner));
        Value::Object(query)
    }

    fn query_type(&self) -> &'static str {
        "range"
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}
