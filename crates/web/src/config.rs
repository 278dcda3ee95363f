//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BILLBOOK_HOST` - Bind address (default: 127.0.0.1)
//! - `BILLBOOK_PORT` - Listen port (default: 3000)
//! - `BILLBOOK_DATA_FILE` - Path of the JSON store document (default: data/billbook.json)
//! - `BILLBOOK_STATIC_DIR` - Directory served under `/static` (default: crates/web/static)
//! - `BILLBOOK_UPLOAD_DIR` - Directory for uploaded images (default: `<static dir>/uploads`)
//! - `BILLBOOK_MAX_UPLOAD_BYTES` - Request body cap in bytes (default: 16 MiB)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Default request body cap: 16 MiB, matching the upload size limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Default directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "crates/web/static";

/// Default upload directory: the `uploads/` subdirectory of the static dir,
/// matching the `/static/uploads/...` public paths stored in the document.
fn default_upload_dir(static_dir: &std::path::Path) -> PathBuf {
    static_dir.join("uploads")
}

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Billbook application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path of the single JSON store document
    pub data_file: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Directory uploaded images are written to; must live under `static_dir`
    /// for the stored `/static/uploads/...` public paths to resolve
    pub upload_dir: PathBuf,
    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BILLBOOK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BILLBOOK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BILLBOOK_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BILLBOOK_PORT".to_string(), e.to_string()))?;
        let data_file =
            PathBuf::from(get_env_or_default("BILLBOOK_DATA_FILE", "data/billbook.json"));
        let static_dir =
            PathBuf::from(get_env_or_default("BILLBOOK_STATIC_DIR", DEFAULT_STATIC_DIR));
        // Unless overridden, uploads land inside the served static directory
        // so their public paths stay valid.
        let upload_dir = std::env::var("BILLBOOK_UPLOAD_DIR")
            .map_or_else(|_| default_upload_dir(&static_dir), PathBuf::from);
        let max_upload_bytes = match std::env::var("BILLBOOK_MAX_UPLOAD_BYTES") {
            Ok(raw) => raw.parse::<usize>().map_err(|e| {
                ConfigError::InvalidEnvVar("BILLBOOK_MAX_UPLOAD_BYTES".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            data_file,
            static_dir,
            upload_dir,
            max_upload_bytes,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            data_file: PathBuf::from("data/billbook.json"),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            upload_dir: default_upload_dir(&PathBuf::from(DEFAULT_STATIC_DIR)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_default_body_cap_is_16_mib() {
        assert_eq!(DEFAULT_MAX_UPLOAD_BYTES, 16 * 1024 * 1024);
    }

    #[test]
    fn test_upload_dir_defaults_inside_static_dir() {
        let config = test_config();
        assert!(config.upload_dir.starts_with(&config.static_dir));
        assert_eq!(
            default_upload_dir(std::path::Path::new("/srv/billbook/static")),
            PathBuf::from("/srv/billbook/static/uploads")
        );
    }
}
