// src/config.rs

use std::net::SocketAddr;

/// Base origin of the remote directory API when `NEARBY_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Search radius used when a nearby request leaves `distance` out.
    pub default_radius_km: f64,
    /// `None` leaves outgoing requests without a timeout.
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
}

impl AppConfig {
    /// Load from the process environment. Call `dotenvy::dotenv()` first if
    /// a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Parsing and validation, decoupled from the real environment so tests
    /// can feed a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let or_default = |var: &str, default: &str| -> String {
            lookup(var)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason,
        };

        // REACT_APP_API_BASE_URL is still honoured for older deployments.
        let base_var = ["NEARBY_API_BASE_URL", "REACT_APP_API_BASE_URL"]
            .into_iter()
            .find(|var| !or_default(*var, "").is_empty());
        let api_base_url = base_var
            .map(|var| or_default(var, ""))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        url::Url::parse(&api_base_url)
            .map_err(|e| invalid(base_var.unwrap_or("NEARBY_API_BASE_URL"), e.to_string()))?;

        let bind_addr = or_default("NEARBY_BIND_ADDR", "127.0.0.1:3000")
            .parse::<SocketAddr>()
            .map_err(|e| invalid("NEARBY_BIND_ADDR", e.to_string()))?;

        let max_workers = or_default("NEARBY_MAX_WORKERS", "8")
            .parse::<usize>()
            .map_err(|e| invalid("NEARBY_MAX_WORKERS", e.to_string()))?;
        if max_workers == 0 {
            return Err(invalid("NEARBY_MAX_WORKERS", "must be at least 1".into()));
        }

        let default_radius_km = or_default("NEARBY_DEFAULT_RADIUS_KM", "5")
            .parse::<f64>()
            .map_err(|e| invalid("NEARBY_DEFAULT_RADIUS_KM", e.to_string()))?;
        if !(default_radius_km.is_finite() && default_radius_km > 0.0) {
            return Err(invalid("NEARBY_DEFAULT_RADIUS_KM", "must be greater than 0".into()));
        }

        let request_timeout_secs = match lookup("NEARBY_REQUEST_TIMEOUT_SECS") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| invalid("NEARBY_REQUEST_TIMEOUT_SECS", e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            api_base_url,
            bind_addr,
            max_workers,
            default_radius_km,
            request_timeout_secs,
            log_level: or_default("NEARBY_LOG", "info"),
        })
    }
}
