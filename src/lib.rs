pub mod config;
pub mod error;
pub mod query;

pub use config::EncoderSettings;
pub use error::{DslError, Result};
pub use query::{BoolQuery, Occur, Query, QueryEncoder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
