//! Core query abstraction
//!
//! This module defines the `Query` trait that every query kind implements,
//! leaf or composite. Composites hold children as `Box<dyn Query>` and render
//! them through this trait alone.

use serde_json::Value;
use std::fmt::Debug;

/// Core trait for all query builders
///
/// A query renders itself into the engine's nested JSON representation.
/// Rendering is pure: every call returns a fresh `Value` describing the same
/// logical query.
pub trait Query: Send + Sync + Debug {
    /// Render this query as a JSON value suitable for embedding in a request
    fn source(&self) -> Value;

    /// Get the query type name (the top-level wire key) for debugging and logging
    fn query_type(&self) -> &'static str;

    /// Clone this query into a boxed trait object
    fn clone_box(&self) -> Box<dyn Query>;
}

impl Clone for Box<dyn Query> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
