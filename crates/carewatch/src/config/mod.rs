use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::monitors::cognitive::{FactorTable, FactorTableError};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the monitoring service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub screening: ScreeningConfig,
    pub alerts: AlertConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = LogFormat::from_str(
            &env::var("APP_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
        )?;

        let factor_table_path = env::var("CAREWATCH_FACTOR_TABLE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let destination =
            env::var("CAREWATCH_ALERT_CHAT").unwrap_or_else(|_| "warehouse-operators".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
            },
            screening: ScreeningConfig { factor_table_path },
            alerts: AlertConfig { destination },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Output layout for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Risk screening inputs that may be swapped per deployment.
#[derive(Debug, Clone, Default)]
pub struct ScreeningConfig {
    pub factor_table_path: Option<PathBuf>,
}

impl ScreeningConfig {
    /// Loads the configured factor table, or the reference table when none is set.
    pub fn factor_table(&self) -> Result<FactorTable, ConfigError> {
        match &self.factor_table_path {
            Some(path) => {
                FactorTable::from_path(path).map_err(|source| ConfigError::FactorTable {
                    path: path.clone(),
                    source,
                })
            }
            None => Ok(FactorTable::reference().clone()),
        }
    }
}

/// Destination label for outbound warehouse notifications.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    pub destination: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidLogFormat(String),
    FactorTable {
        path: PathBuf,
        source: FactorTableError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json', got '{value}'")
            }
            ConfigError::FactorTable { path, source } => write!(
                f,
                "CAREWATCH_FACTOR_TABLE '{}' could not be loaded: {}",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidLogFormat(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::FactorTable { source, .. } => Some(source),
        }
    }
}
