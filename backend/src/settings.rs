//! Server settings loaded via OrthoConfig.
//!
//! Values come from `TASKBOARD_*` environment variables, configuration files
//! and command-line flags, in OrthoConfig's usual precedence order.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ACCESS_LOG_PATH: &str = "logs/api.log";
const DEFAULT_ADMIN_TOKEN: &str = "admin-token";

/// Raised when a configured value cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("bind address {value:?} is not a socket address")]
    InvalidBindAddr { value: String },
}

impl From<SettingsError> for std::io::Error {
    fn from(err: SettingsError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

/// Configuration values controlling the HTTP listener and its adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASKBOARD")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: Option<String>,
    /// File receiving one line per request.
    #[ortho_config(default = PathBuf::from(DEFAULT_ACCESS_LOG_PATH))]
    pub access_log_path: Option<PathBuf>,
    /// Bearer token that resolves to the administrator.
    #[ortho_config(default = DEFAULT_ADMIN_TOKEN.to_owned())]
    pub admin_token: Option<String>,
}

impl ServerSettings {
    /// Return the configured listen address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|_| SettingsError::InvalidBindAddr {
            value: raw.to_owned(),
        })
    }

    /// Return the configured access log path, falling back to the default.
    pub fn access_log_path(&self) -> PathBuf {
        self.access_log_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ACCESS_LOG_PATH))
    }

    /// Return the configured administrator token, falling back to the default.
    pub fn admin_token(&self) -> &str {
        self.admin_token.as_deref().unwrap_or(DEFAULT_ADMIN_TOKEN)
    }
}
