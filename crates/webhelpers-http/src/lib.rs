//! HTTP response writers.
//!
//! Three writers share one sequence: set `Content-Type`,
//! `Strict-Transport-Security` and `Vary`, write the status, write the body.
//! They talk to the outbound response through the [`ResponseSink`] trait, so
//! any server stack can host them.
//!
//! # Quick Start
//!
//! ```
//! use webhelpers_http::{write_json_response, RecordingSink};
//!
//! let mut sink = RecordingSink::new();
//! write_json_response(&mut sink, 200, br#"{"a":1}"#);
//!
//! assert_eq!(sink.status(), Some(200));
//! assert_eq!(sink.header("content-type"), Some("application/json"));
//! assert_eq!(sink.body(), br#"{"a":1}"#);
//! ```
//!
//! The free functions never report failures. Use [`ResponseWriter`] with
//! [`FailurePolicy::Propagate`] to get them back as [`ResponseError`].
//! [`WriterConfig`] carries only that policy; the headers are fixed.

pub mod config;
pub mod error;
pub mod sink;
pub mod writer;

pub use config::{FailurePolicy, WriterConfig};
pub use error::{ResponseError, ResponseResult};
pub use sink::{ErrorMessage, HttpResponseSink, RecordingSink, ResponseSink, SinkEvent};
pub use writer::{
    write_json_error_response, write_json_response, write_svg_response, ResponseWriter,
    CONTENT_TYPE_JSON, CONTENT_TYPE_SVG, HEADER_CONTENT_TYPE, HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_VARY, HSTS_VALUE, VARY_VALUE,
};
