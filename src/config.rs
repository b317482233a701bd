use serde::{Deserialize, Serialize};

/// Settings controlling how a rendered query is turned into a request body
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderSettings {
    /// Emit indented JSON instead of the compact form
    pub pretty: bool,
    /// Wrap the query source as `{"query": ...}`, the shape a search request body expects
    pub wrap_in_query: bool,
}

impl EncoderSettings {
    /// Settings producing a full search request body
    pub fn request_body() -> Self {
        Self {
            wrap_in_query: true,
            ..Default::default()
        }
    }

    /// Enable or disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable or disable the `{"query": ...}` wrapper
    pub fn with_wrap_in_query(mut self, wrap: bool) -> Self {
        self.wrap_in_query = wrap;
        self
    }
}
