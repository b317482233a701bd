//! Query DSL builders
//!
//! This module provides composable builders for the search engine's JSON
//! query DSL, supporting:
//! - Boolean queries (must, should, must_not) with arbitrary nesting
//! - Term and terms queries (exact match)
//! - Match queries (full-text search)
//! - Range and prefix queries
//! - Raw queries for anything not modelled here
//!
//! Every builder implements [`Query`], whose `source()` renders the
//! `serde_json::Value` sent to the engine.
//!
//! # Example
//!
//! ```json
//! {
//!   "bool": {
//!     "must": { "term": { "user": "kimchy" } },
//!     "should": [
//!       { "term": { "tag": "wow" } },
//!       { "term": { "tag": "elasticsearch" } }
//!     ],
//!     "minimum_should_match": "1"
//!   }
//! }
//! ```

pub mod ast;
pub mod encoder;
pub mod nodes;
pub mod types;

pub use ast::Query;
pub use encoder::QueryEncoder;
pub use nodes::{
    BoolQuery, MatchAllQuery, MatchQuery, PrefixQuery, RangeQuery, RawQuery, TermQuery,
    TermsQuery,
};
pub use types::*;
