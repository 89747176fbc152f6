use std::io;

use super::ResponseSink;

/// One call made against a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Header { name: String, value: String },
    Status(u16),
    Body(Vec<u8>),
}

/// Sink that records every call in order and never fails.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Last value set for `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            SinkEvent::Header { name: n, value } if n.eq_ignore_ascii_case(name) => {
                Some(value.as_str())
            }
            _ => None,
        })
    }

    /// First status written, if any.
    pub fn status(&self) -> Option<u16> {
        self.events.iter().find_map(|e| match e {
            SinkEvent::Status(code) => Some(*code),
            _ => None,
        })
    }

    /// All body chunks concatenated.
    pub fn body(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Body(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}

impl ResponseSink for RecordingSink {
    fn set_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Header {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn write_status(&mut self, code: u16) -> io::Result<()> {
        self.events.push(SinkEvent::Status(code));
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.events.push(SinkEvent::Body(body.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive_and_last_wins() {
        let mut sink = RecordingSink::new();
        sink.set_header("Vary", "Origin").unwrap();
        sink.set_header("vary", "Accept-Encoding").unwrap();
        assert_eq!(sink.header("VARY"), Some("Accept-Encoding"));
        assert_eq!(sink.header("Content-Type"), None);
    }

    #[test]
    fn body_concatenates_chunks() {
        let mut sink = RecordingSink::new();
        sink.write_status(201).unwrap();
        sink.write_body(b"<svg>").unwrap();
        sink.write_body(b"</svg>").unwrap();
        assert_eq!(sink.status(), Some(201));
        assert_eq!(sink.body(), b"<svg></svg>");
        assert_eq!(sink.events().len(), 3);
    }
}
