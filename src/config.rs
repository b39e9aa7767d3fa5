//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export PORT=3000
//! export LOG_FORMAT=json
//! export DNS_TIMEOUT_MS=2000
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:$PORT`)
//! - `PORT` - Port used when `LISTEN` is not set (default: `3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DNS_TIMEOUT_MS` - Hostname check timeout in milliseconds (default: 5000)
//! - `PUBLIC_DIR` - Static assets served under `/public` (default: `public`)
//! - `VIEWS_DIR` - Directory holding `index.html` (default: `views`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::routes::AssetPaths;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DNS_TIMEOUT_MS: u64 = 5000;
const MAX_DNS_TIMEOUT_MS: u64 = 60_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound for a single hostname lookup; a timeout is reported as an
    /// invalid URL.
    pub dns_timeout_ms: u64,
    pub public_dir: String,
    pub views_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `DNS_TIMEOUT_MS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr()?;
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let dns_timeout_ms = match env::var("DNS_TIMEOUT_MS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("DNS_TIMEOUT_MS must be a number, got '{}'", v))?,
            Err(_) => DEFAULT_DNS_TIMEOUT_MS,
        };

        let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());
        let views_dir = env::var("VIEWS_DIR").unwrap_or_else(|_| "views".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            dns_timeout_ms,
            public_dir,
            views_dir,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`, with `PORT` defaulting to 3000
    fn load_listen_addr() -> Result<String> {
        if let Ok(listen) = env::var("LISTEN") {
            return Ok(listen);
        }

        let port: u16 = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(format!("0.0.0.0:{}", port))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - `dns_timeout_ms` is 0 or above 60000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.dns_timeout_ms == 0 || self.dns_timeout_ms > MAX_DNS_TIMEOUT_MS {
            anyhow::bail!(
                "DNS_TIMEOUT_MS must be between 1 and {}, got {}",
                MAX_DNS_TIMEOUT_MS,
                self.dns_timeout_ms
            );
        }

        Ok(())
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    pub fn assets(&self) -> AssetPaths {
        AssetPaths::new(&self.public_dir, &self.views_dir)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  DNS timeout: {}ms", self.dns_timeout_ms);
        tracing::info!("  Public dir: {}", self.public_dir);
        tracing::info!("  Views dir: {}", self.views_dir);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
