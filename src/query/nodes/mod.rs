//! Concrete query builders
//!
//! This module provides implementations of the `Query` trait for
//! various query types.

mod bool_query;
mod match_all;
mod match_query;
mod prefix_query;
mod range_query;
mod raw_query;
mod term_query;
mod terms_query;

pub use bool_query::BoolQuery;
pub use match_all::MatchAllQuery;
pub use match_query::MatchQuery;
pub use prefix_query::PrefixQuery;
pub use range_query::RangeQuery;
pub use raw_query::RawQuery;
pub use term_query::TermQuery;
pub use terms_query::TermsQuery;
