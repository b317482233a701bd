//! Query encoder for turning rendered queries into request bodies
//!
//! The encoder takes any `Query`, renders its source and hands the tree to
//! `serde_json`, optionally wrapping it in the `{"query": ...}` envelope a
//! search request expects.

use crate::config::EncoderSettings;
use crate::query::ast::Query;
use crate::Result;
use serde_json::{Map, Value};
use std::io::Write;
use tracing::debug;

/// Encoder producing JSON request bodies from queries
#[derive(Clone, Debug, Default)]
pub struct QueryEncoder {
    settings: EncoderSettings,
}

impl QueryEncoder {
    /// Create an encoder with the given settings
    pub fn new(settings: EncoderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EncoderSettings {
        &self.settings
    }

    /// Build the JSON body for a query without encoding it
    pub fn body(&self, query: &dyn Query) -> Value {
        let source = query.source();
        if self.settings.wrap_in_query {
            let mut body = Map::new();
            body.insert("query".to_string(), source);
            Value::Object(body)
        } else {
            source
        }
    }

    /// Encode a query as a JSON string
    pub fn to_string(&self, query: &dyn Query) -> Result<String> {
        let body = self.body(query);
        let encoded = if self.settings.pretty {
            serde_json::to_string_pretty(&body)?
        } else {
            serde_json::to_string(&body)?
        };
        debug!(
            query_type = query.query_type(),
            bytes = encoded.len(),
            "encoded query body"
        );
        Ok(encoded)
    }

    /// Encode a query as JSON bytes
    pub fn to_vec(&self, query: &dyn Query) -> Result<Vec<u8>> {
        let body = self.body(query);
        let encoded = if self.settings.pretty {
            serde_json::to_vec_pretty(&body)?
        } else {
            serde_json::to_vec(&body)?
        };
        debug!(
            query_type = query.query_type(),
            bytes = encoded.len(),
            "encoded query body"
        );
        Ok(encoded)
    }

    /// Encode a query into a writer
    pub fn to_writer<W: Write>(&self, query: &dyn Query, writer: W) -> Result<()> {
        let body = self.body(query);
        if self.settings.pretty {
            serde_json::to_writer_pretty(writer, &body)?;
        } else {
            serde_json::to_writer(writer, &body)?;
        }
        debug!(query_type = query.query_type(), "encoded query body to writer");
        Ok(())
    }
}
