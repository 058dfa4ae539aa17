//! Minimal HTTP/1.1 framing - request line in, full response out

use crate::error::ServeError;

/// Parsed request line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    /// Raw request target, query string included
    pub target: String,
}

impl Request {
    /// Parse `METHOD TARGET HTTP/x.y`
    pub fn parse_line(line: &str) -> Result<Self, ServeError> {
        let mut parts = line.trim_end_matches(['\r', '\n']).split(' ');
        let (Some(method), Some(target), Some(version), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ServeError::BadRequest(format!("malformed request line: {line:?}")));
        };

        if method.is_empty() || !target.starts_with('/') || !version.starts_with("HTTP/") {
            return Err(ServeError::BadRequest(format!("malformed request line: {line:?}")));
        }

        Ok(Self {
            method: method.to_string(),
            target: target.to_string(),
        })
    }
}

pub fn strip_query(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    &target[..end]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self { status: 200, content_type, body }
    }

    pub fn from_error(err: &ServeError) -> Self {
        Self {
            status: err.status(),
            content_type: "text/html",
            body: err.body().as_bytes().to_vec(),
        }
    }

    pub fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "",
        }
    }

    /// Status line, headers and body, ready to write
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.reason(),
            self.content_type,
            self.body.len(),
        );
        let mut bytes = Vec::with_capacity(head.len() + self.body.len());
        bytes.extend_from_slice(head.as_bytes());
        bytes.extend_from_slice(&self.body);
        bytes
    }
}
