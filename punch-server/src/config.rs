//! Server configuration - positional CLI arguments with env fallbacks
//!
//! `punch-server [root] [port]`, falling back to `PUNCH_SERVER_ROOT` /
//! `PUNCH_SERVER_PORT`, then to the current directory and port 3000.

use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const ROOT_ENV: &str = "PUNCH_SERVER_ROOT";
pub const PORT_ENV: &str = "PUNCH_SERVER_PORT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    /// Read from the process arguments and environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Build from explicit arguments (program name already stripped) and an
    /// environment lookup
    pub fn from_sources(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut args = args.into_iter();
        let root_arg = args.next();
        let port_arg = args.next();
        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        let mut config = Self::default();
        if let Some(root) = root_arg.or_else(|| env(ROOT_ENV)) {
            config.root = PathBuf::from(root);
        }
        if let Some(port) = port_arg.or_else(|| env(PORT_ENV)) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_sources(Vec::new(), no_env).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_args_override_env() {
        let env = |key: &str| match key {
            ROOT_ENV => Some("/srv/env".to_string()),
            PORT_ENV => Some("9000".to_string()),
            _ => None,
        };
        let config = ServerConfig::from_sources(vec!["site".to_string()], env).unwrap();
        assert_eq!(config.root, PathBuf::from("site"));
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_sources(vec![".".to_string(), "http".to_string()], no_env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "http"));

        let err = ServerConfig::from_sources(vec![".".to_string(), "70000".to_string()], no_env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_extra_argument() {
        let args = ["a", "1", "b"].map(String::from);
        let err = ServerConfig::from_sources(args, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedArgument(ref a) if a == "b"));
    }
}
