//! Raw query - embeds a pre-built JSON query verbatim

use crate::error::DslError;
use crate::query::ast::Query;
use crate::Result;
use serde_json::Value;

/// Query wrapping an already rendered JSON query object
///
/// Lets callers mix query kinds this crate does not model into a boolean
/// query. The value is emitted exactly as given.
#[derive(Clone, Debug, PartialEq)]
pub struct RawQuery {
    source: Value,
}

impl RawQuery {
    /// Wrap an already built JSON value
    pub fn new(source: Value) -> Self {
        Self { source }
    }

    /// Parse a JSON string; it must hold a JSON object
    pub fn parse_str(json_str: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json_str)
            .map_err(|e| DslError::InvalidQuery(format!("Invalid JSON: {}", e)))?;
        if !value.is_object() {
            return Err(DslError::InvalidQuery(
                "Query must be a JSON object".to_string(),
            ));
        }
        Ok(Self::new(value))
    }
}

impl Query for RawQuery {
    fn source(&self) -> Value {
        self.source.clone()
    }

    fn query_type(&self) -> &'static str {
        "raw"
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}
