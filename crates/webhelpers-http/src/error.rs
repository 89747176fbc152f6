//! Error types for the response writers.

use std::io;

/// Response writing errors.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The JSON error body could not be encoded.
    #[error("failed to serialize error body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The sink refused a header.
    #[error("failed to set header {name}: {source}")]
    Header {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The sink refused the status code.
    #[error("failed to write status {code}: {source}")]
    Status {
        code: u16,
        #[source]
        source: io::Error,
    },

    /// The sink failed while taking the body.
    #[error("failed to write {len} byte body: {source}")]
    Body {
        len: usize,
        #[source]
        source: io::Error,
    },
}

impl ResponseError {
    /// Whether the failure came from the sink rather than from encoding.
    pub fn is_sink_failure(&self) -> bool {
        !matches!(self, Self::Serialize(_))
    }
}

/// Result type for response writing.
pub type ResponseResult<T> = Result<T, ResponseError>;
