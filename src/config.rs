//! Configuration loading and constants.
//!
//! Loads the listener and logging settings from a TOML file and defines the
//! constants served by the info endpoint along with the Cache-Control values
//! for each route. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Build Info
// =============================================================================
// Served verbatim by GET /api/info. These change with a deploy, never at runtime.

/// Application display name
pub const APP_NAME: &str = "Spring Demo Gradle";

/// Application version string
pub const APP_VERSION: &str = "0.0.1-SNAPSHOT";

/// Build system that produced the artifact
pub const BUILD_TYPE: &str = "Gradle";

/// SBOM generation status
pub const FEATURE_SBOM: &str = "enabled";

/// Actuator endpoints status
pub const FEATURE_ACTUATOR: &str = "enabled";

/// Test tooling in use
pub const FEATURE_TESTING: &str = "JUnit5 + JaCoCo + PIT";

/// Liveness status reported by GET /api/health
pub const HEALTH_STATUS_UP: &str = "UP";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Info payload only changes on deploy
pub const HTTP_CACHE_INFO_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_INFO: &str = formatcp!("public, max-age={}", HTTP_CACHE_INFO_MAX_AGE);

/// Liveness probes must always reach the process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Server
// =============================================================================

/// Time allowed for in-flight connections to finish after SIGTERM/SIGINT (seconds)
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

/// Response header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "demo_service=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub tls: TlsConfig,
}

/// How the listener terminates TLS
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain HTTP, e.g. behind a TLS-terminating proxy
    #[default]
    None,
    /// PEM certificate and key supplied on disk
    Manual,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub mode: TlsMode,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    /// Read only the `[logging]` table so the subscriber can be set up before
    /// the full config is validated. Any failure falls back to the default.
    pub fn peek<P: AsRef<Path>>(path: P) -> Self {
        #[derive(Deserialize)]
        struct Partial {
            #[serde(default)]
            logging: LoggingConfig,
        }

        std::fs::read_to_string(path)
            .ok()
            .and_then(|contents| toml::from_str::<Partial>(&contents).ok())
            .map(|partial| partial.logging)
            .unwrap_or_default()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let tls = &self.http.tls;
        if tls.mode == TlsMode::Manual && (tls.cert_path.is_none() || tls.key_path.is_none()) {
            return Err(ConfigError::Validation(
                "http.tls.mode = \"manual\" requires both cert_path and key_path".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }

        self.socket_addr()?;
        Ok(())
    }

    /// Listener address built from `http.host` and `http.port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.host, self.http.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!("Invalid http.host or http.port: {}", e))
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
