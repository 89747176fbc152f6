use std::io;

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Response, StatusCode};

use super::ResponseSink;

/// Sink that assembles an [`http::Response`].
///
/// Mirrors a typical server response writer: headers are frozen once the
/// status is written, and a body written without a status implies `200 OK`.
#[derive(Debug, Default)]
pub struct HttpResponseSink {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Vec<u8>,
}

impl HttpResponseSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_response(self) -> Response<Vec<u8>> {
        let mut response = Response::new(self.body);
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

fn invalid_input(err: impl std::error::Error + Send + Sync + 'static) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

impl ResponseSink for HttpResponseSink {
    fn set_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        if self.status.is_some() {
            return Err(io::Error::other(format!(
                "header {} set after status was written",
                name
            )));
        }
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(invalid_input)?;
        let value = HeaderValue::from_str(value).map_err(invalid_input)?;
        self.headers.insert(name, value);
        Ok(())
    }

    fn write_status(&mut self, code: u16) -> io::Result<()> {
        if let Some(existing) = self.status {
            return Err(io::Error::other(format!(
                "status already written ({})",
                existing.as_u16()
            )));
        }
        self.status = Some(StatusCode::from_u16(code).map_err(invalid_input)?);
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(body);
        Ok(())
    }
}
