//! Error types
//!
//! [`ServeError`] is terminal for a single request only; it maps to a
//! status code and a small HTML body. [`ConfigError`] stops the server
//! before it binds.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    /// No file at the resolved path, or the path escapes the root
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Any other read failure (permissions, directory, I/O)
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Unparseable request head
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Request head not terminated within the size limit
    #[error("request head exceeds {0} bytes")]
    HeadTooLarge(usize),
}

impl ServeError {
    /// Classify a read error for `path`
    pub fn from_io(path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            ServeError::NotFound(path)
        } else {
            ServeError::Read { path, source: err }
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ServeError::NotFound(_) => 404,
            ServeError::Read { .. } => 500,
            ServeError::BadRequest(_) | ServeError::HeadTooLarge(_) => 400,
        }
    }

    /// HTML body sent to the client
    pub fn body(&self) -> &'static str {
        match self {
            ServeError::NotFound(_) => "<h1>404 - File Not Found</h1>",
            ServeError::Read { .. } => "<h1>500 - Server Error</h1>",
            ServeError::BadRequest(_) | ServeError::HeadTooLarge(_) => "<h1>400 - Bad Request</h1>",
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid port: {0:?}")]
    InvalidPort(String),

    #[error("unexpected argument: {0:?} (usage: punch-server [root] [port])")]
    UnexpectedArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = ServeError::from_io("a.html".into(), io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.status(), 404);
        assert!(err.body().contains("404"));
    }

    #[test]
    fn test_other_errors_are_500() {
        let err = ServeError::from_io("a.html".into(), io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.status(), 500);
        assert!(err.body().contains("500"));
        assert!(err.to_string().starts_with("failed to read a.html"));
    }

    #[test]
    fn test_oversized_head_is_bad_request() {
        let err = ServeError::HeadTooLarge(8192);
        assert_eq!(err.status(), 400);
        assert_eq!(err.to_string(), "request head exceeds 8192 bytes");
    }
}
