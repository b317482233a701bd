//! Core types for the query builders

use crate::error::DslError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Occurrence of a clause inside a boolean query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    /// Clause must match and contributes to the score
    Must,
    /// Clause must not match
    MustNot,
    /// Clause should match; how many is governed by minimum_should_match
    Should,
}

impl Occur {
    /// All occurrences, in the order their keys are emitted
    pub const ALL: [Occur; 3] = [Occur::Must, Occur::MustNot, Occur::Should];

    /// Key used for this clause list inside a `bool` object
    pub fn wire_key(&self) -> &'static str {
        match self {
            Occur::Must => "must",
            Occur::MustNot => "must_not",
            Occur::Should => "should",
        }
    }
}

impl fmt::Display for Occur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

/// Operator for combining terms in a match query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchOperator {
    /// All terms must match (AND)
    And,
    /// At least one term must match (OR)
    #[default]
    Or,
}

impl MatchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::And => "and",
            MatchOperator::Or => "or",
        }
    }
}

/// Value type for range bounds
#[derive(Clone, Debug, PartialEq)]
pub enum RangeValue {
    /// 64-bit integer
    Long(i64),
    /// 64-bit floating point
    Double(f64),
    /// String (for dates, keywords)
    String(String),
}

impl RangeValue {
    /// Render as a JSON scalar; non-finite doubles become `null`
    pub fn to_value(&self) -> Value {
        match self {
            RangeValue::Long(v) => Value::from(*v),
            RangeValue::Double(v) => Value::from(*v),
            RangeValue::String(s) => Value::from(s.as_str()),
        }
    }
}

impl From<i64> for RangeValue {
    fn from(v: i64) -> Self {
        RangeValue::Long(v)
    }
}

impl From<f64> for RangeValue {
    fn from(v: f64) -> Self {
        RangeValue::Double(v)
    }
}

impl From<&str> for RangeValue {
    fn from(v: &str) -> Self {
        RangeValue::String(v.to_string())
    }
}

impl From<String> for RangeValue {
    fn from(v: String) -> Self {
        RangeValue::String(v)
    }
}

/// Range bounds for range queries
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeBounds {
    /// Greater than or equal to
    pub gte: Option<RangeValue>,
    /// Greater than
    pub gt: Option<RangeValue>,
    /// Less than or equal to
    pub lte: Option<RangeValue>,
    /// Less than
    pub lt: Option<RangeValue>,
}

impl RangeBounds {
    /// Whether no bound is set at all
    pub fn is_unbounded(&self) -> bool {
        self.gte.is_none() && self.gt.is_none() && self.lte.is_none() && self.lt.is_none()
    }

    /// Render the set bounds as a JSON object, in `gte, gt, lte, lt` order
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        let bounds = [
            ("gte", &self.gte),
            ("gt", &self.gt),
            ("lte", &self.lte),
            ("lt", &self.lt),
        ];
        for (key, bound) in bounds {
            if let Some(value) = bound {
                map.insert(key.to_string(), value.to_value());
            }
        }
        map
    }
}

/// Minimum should match expression
///
/// The engine interprets the expression; this type only classifies it and
/// keeps the caller's text, which is sent on the wire unchanged. Serde goes
/// through the same string form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MinimumShouldMatch {
    /// Exact count
    Count(usize),
    /// Percentage (e.g., "75%", "-25%")
    Percentage(String),
    /// Any other engine expression (e.g., "3<90%")
    Expression(String),
}

impl MinimumShouldMatch {
    /// Classify an expression string; returns `None` for a blank (unset) expression
    pub fn parse(expr: &str) -> Option<Self> {
        if expr.trim().is_empty() {
            return None;
        }
        if let Some(number) = expr.strip_suffix('%') {
            if is_plain_integer(number) {
                return Some(MinimumShouldMatch::Percentage(expr.to_string()));
            }
        }
        match expr.parse::<usize>() {
            // Only canonical counts; "007" or "+2" stay verbatim
            Ok(count) if count.to_string() == expr => Some(MinimumShouldMatch::Count(count)),
            _ => Some(MinimumShouldMatch::Expression(expr.to_string())),
        }
    }
}

fn is_plain_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for MinimumShouldMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimumShouldMatch::Count(n) => write!(f, "{}", n),
            MinimumShouldMatch::Percentage(s) | MinimumShouldMatch::Expression(s) => {
                f.write_str(s)
            }
        }
    }
}

impl From<usize> for MinimumShouldMatch {
    fn from(count: usize) -> Self {
        MinimumShouldMatch::Count(count)
    }
}

impl From<MinimumShouldMatch> for String {
    fn from(msm: MinimumShouldMatch) -> Self {
        msm.to_string()
    }
}

impl TryFrom<String> for MinimumShouldMatch {
    type Error = DslError;

    fn try_from(expr: String) -> Result<Self, Self::Error> {
        MinimumShouldMatch::parse(&expr).ok_or_else(|| {
            DslError::InvalidQuery("minimum_should_match must not be empty".to_string())
        })
    }
}
