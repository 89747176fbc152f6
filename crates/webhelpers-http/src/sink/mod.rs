//! The outbound side of a response.

use std::fmt;
use std::io;

mod http_response;
mod recording;

pub use http_response::HttpResponseSink;
pub use recording::{RecordingSink, SinkEvent};

/// A caller-owned handle on an outbound HTTP response.
///
/// Writers borrow the sink for a single call and never keep it. Headers must
/// be set before [`write_status`](ResponseSink::write_status); what happens on
/// misuse is up to the implementation.
pub trait ResponseSink {
    /// Set a header, replacing any earlier value for the same name.
    fn set_header(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Write the status line. Not validated against the HTTP status range.
    fn write_status(&mut self, code: u16) -> io::Result<()>;

    /// Append body bytes.
    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

/// Anything that can describe itself as a human readable error message.
pub trait ErrorMessage {
    fn message(&self) -> String;
}

impl<T: fmt::Display + ?Sized> ErrorMessage for T {
    fn message(&self) -> String {
        self.to_string()
    }
}
