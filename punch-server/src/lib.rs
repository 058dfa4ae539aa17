//! Punch Server - static file server for the punch visualizer
//!
//! Maps request paths onto files under a root directory, infers the
//! content type from the extension and answers 404 for missing files,
//! 500 for any other read failure.

pub mod config;
pub mod error;
pub mod files;
pub mod http;
pub mod mime;
pub mod server;

pub use config::ServerConfig;
pub use error::{ConfigError, ServeError};
pub use files::StaticFiles;
pub use http::{Request, Response};
pub use server::{bind, serve};
