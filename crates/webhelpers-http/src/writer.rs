//! The JSON, JSON error and SVG writers.
//!
//! Every writer sets `Content-Type`, `Strict-Transport-Security` and `Vary`,
//! then writes the status, then the body. Headers always go out before the
//! status. The JSON writers set `Content-Type` first; the SVG writer sets it
//! after the two fixed headers.

use serde::Serialize;

use crate::config::{FailurePolicy, WriterConfig};
use crate::error::{ResponseError, ResponseResult};
use crate::sink::{ErrorMessage, ResponseSink};

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
pub const HEADER_VARY: &str = "Vary";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_SVG: &str = "image/svg+xml";
pub const VARY_VALUE: &str = "Accept-Encoding";

/// HSTS policy sent with every response: 180 days plus one second.
pub const HSTS_VALUE: &str = "max-age=15552001";

type HeaderSet<'a> = [(&'static str, &'a str); 3];

fn json_headers() -> HeaderSet<'static> {
    [
        (HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON),
        (HEADER_STRICT_TRANSPORT_SECURITY, HSTS_VALUE),
        (HEADER_VARY, VARY_VALUE),
    ]
}

fn svg_headers() -> HeaderSet<'static> {
    [
        (HEADER_STRICT_TRANSPORT_SECURITY, HSTS_VALUE),
        (HEADER_VARY, VARY_VALUE),
        (HEADER_CONTENT_TYPE, CONTENT_TYPE_SVG),
    ]
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Response writer with an explicit failure policy.
#[derive(Debug, Clone, Default)]
pub struct ResponseWriter {
    config: WriterConfig,
}

impl ResponseWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Write a pre-serialized JSON body verbatim.
    pub fn json<S>(&self, sink: &mut S, code: u16, body: &[u8]) -> ResponseResult<()>
    where
        S: ResponseSink + ?Sized,
    {
        self.emit(sink, code, json_headers(), body)
    }

    /// Write `{"error": "<message>"}` built from `err`.
    ///
    /// The body is encoded before the sink is touched. With
    /// [`FailurePolicy::Propagate`] an encoding failure leaves the sink
    /// untouched; with [`FailurePolicy::Discard`] the response goes out with
    /// an empty body.
    ///
    /// `<`, `>` and `&` in the message are written as-is rather than as
    /// `\u003c`-style escapes; the decoded value is the same.
    pub fn json_error<S, E>(&self, sink: &mut S, code: u16, err: &E) -> ResponseResult<()>
    where
        S: ResponseSink + ?Sized,
        E: ErrorMessage + ?Sized,
    {
        let message = err.message();
        self.serialized(sink, code, &ErrorBody { error: &message })
    }

    /// Write an SVG document.
    pub fn svg<S>(&self, sink: &mut S, code: u16, body: &str) -> ResponseResult<()>
    where
        S: ResponseSink + ?Sized,
    {
        self.emit(sink, code, svg_headers(), body.as_bytes())
    }

    /// Encode `value` as the JSON body, then write it.
    fn serialized<S, T>(&self, sink: &mut S, code: u16, value: &T) -> ResponseResult<()>
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        let body = match serde_json::to_vec(value) {
            Ok(body) => body,
            Err(e) => {
                self.settle(Err(ResponseError::from(e)))?;
                Vec::new()
            }
        };
        self.emit(sink, code, json_headers(), &body)
    }

    fn emit<S>(
        &self,
        sink: &mut S,
        code: u16,
        headers: HeaderSet<'_>,
        body: &[u8],
    ) -> ResponseResult<()>
    where
        S: ResponseSink + ?Sized,
    {
        let mut content_type = "";
        for (name, value) in headers {
            if name == HEADER_CONTENT_TYPE {
                content_type = value;
            }
            self.settle(sink.set_header(name, value).map_err(|source| ResponseError::Header {
                name: name.to_string(),
                source,
            }))?;
        }

        self.settle(
            sink.write_status(code)
                .map_err(|source| ResponseError::Status { code, source }),
        )?;

        self.settle(sink.write_body(body).map_err(|source| ResponseError::Body {
            len: body.len(),
            source,
        }))?;

        tracing::trace!(
            status = code,
            content_type,
            body_len = body.len(),
            "response written"
        );
        Ok(())
    }

    fn settle(&self, step: ResponseResult<()>) -> ResponseResult<()> {
        match (step, self.config.failure_policy) {
            (Ok(()), _) => Ok(()),
            (Err(e), FailurePolicy::Propagate) => Err(e),
            (Err(e), FailurePolicy::Discard) => {
                tracing::debug!(error = %e, "discarding response failure");
                Ok(())
            }
        }
    }
}

/// Write a JSON response, ignoring any failure.
pub fn write_json_response<S>(sink: &mut S, code: u16, body: &[u8])
where
    S: ResponseSink + ?Sized,
{
    let _ = ResponseWriter::default().json(sink, code, body);
}

/// Write a JSON error response, ignoring any failure.
pub fn write_json_error_response<S, E>(sink: &mut S, code: u16, err: &E)
where
    S: ResponseSink + ?Sized,
    E: ErrorMessage + ?Sized,
{
    let _ = ResponseWriter::default().json_error(sink, code, err);
}

/// Write an SVG response, ignoring any failure.
pub fn write_svg_response<S>(sink: &mut S, code: u16, body: &str)
where
    S: ResponseSink + ?Sized,
{
    let _ = ResponseWriter::default().svg(sink, code, body);
}
