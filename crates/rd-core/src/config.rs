//! Configuration types and loading

use serde::{Deserialize, Serialize};

use crate::error::RdError;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Utilization bands used by the allocation summary
    pub allocation: AllocationConfig,

    /// Deadline thresholds used by the escalation classifier
    pub escalation: EscalationConfig,

    /// Startup data
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct AllocationConfig {
    /// Utilization above this percentage counts as overallocated
    pub overallocated_threshold: i64,
    /// Utilization below this percentage counts as underallocated
    pub underallocated_threshold: i64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            overallocated_threshold: 90,
            underallocated_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct EscalationConfig {
    /// Nominal planned duration every task is measured against
    pub nominal_duration_days: i64,
    pub low_threshold_days: i64,
    pub medium_threshold_days: i64,
    pub high_threshold_days: i64,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            nominal_duration_days: 14,
            low_threshold_days: 7,
            medium_threshold_days: 3,
            high_threshold_days: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Load the demo stakeholders and tasks on startup
    pub demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                request_timeout_seconds: 30,
            },
            allocation: AllocationConfig::default(),
            escalation: EscalationConfig::default(),
            seed: SeedConfig { demo_data: true },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
    #[error("Inconsistent configuration: {0}")]
    Inconsistent(String),
}

impl From<ConfigError> for RdError {
    fn from(err: ConfigError) -> Self {
        RdError::Config(err.to_string())
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, starting from defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Server
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = parse_value("PORT", &port)?;
        }
        if let Some(timeout) = lookup("RD_REQUEST_TIMEOUT_SECONDS") {
            config.server.request_timeout_seconds =
                parse_value("RD_REQUEST_TIMEOUT_SECONDS", &timeout)?;
        }

        // Allocation bands
        if let Some(v) = lookup("RD_OVERALLOCATED_THRESHOLD") {
            config.allocation.overallocated_threshold =
                parse_value("RD_OVERALLOCATED_THRESHOLD", &v)?;
        }
        if let Some(v) = lookup("RD_UNDERALLOCATED_THRESHOLD") {
            config.allocation.underallocated_threshold =
                parse_value("RD_UNDERALLOCATED_THRESHOLD", &v)?;
        }

        // Escalation thresholds
        if let Some(v) = lookup("RD_NOMINAL_DURATION_DAYS") {
            config.escalation.nominal_duration_days = parse_value("RD_NOMINAL_DURATION_DAYS", &v)?;
        }
        if let Some(v) = lookup("RD_LOW_THRESHOLD_DAYS") {
            config.escalation.low_threshold_days = parse_value("RD_LOW_THRESHOLD_DAYS", &v)?;
        }
        if let Some(v) = lookup("RD_MEDIUM_THRESHOLD_DAYS") {
            config.escalation.medium_threshold_days = parse_value("RD_MEDIUM_THRESHOLD_DAYS", &v)?;
        }
        if let Some(v) = lookup("RD_HIGH_THRESHOLD_DAYS") {
            config.escalation.high_threshold_days = parse_value("RD_HIGH_THRESHOLD_DAYS", &v)?;
        }

        // Seed
        if let Some(v) = lookup("RD_DEMO_DATA") {
            config.seed.demo_data = v == "true" || v == "1" || v == "yes";
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject threshold combinations the classifier and summary cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.escalation;
        if e.nominal_duration_days <= 0 {
            return Err(ConfigError::Inconsistent(
                "nominal duration must be positive".into(),
            ));
        }
        if !(e.high_threshold_days < e.medium_threshold_days
            && e.medium_threshold_days < e.low_threshold_days)
        {
            return Err(ConfigError::Inconsistent(
                "escalation thresholds must satisfy high < medium < low".into(),
            ));
        }

        let a = &self.allocation;
        if a.underallocated_threshold > a.overallocated_threshold {
            return Err(ConfigError::Inconsistent(
                "underallocated threshold exceeds overallocated threshold".into(),
            ));
        }
        Ok(())
    }

    /// Get the server address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        use std::net::SocketAddr;
        let ip: std::net::IpAddr = self.server.host.parse().unwrap_or([0, 0, 0, 0].into());
        SocketAddr::new(ip, self.server.port)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.allocation.overallocated_threshold, 90);
        assert_eq!(config.escalation.nominal_duration_days, 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("RD_NOMINAL_DURATION_DAYS", "21"),
            ("RD_DEMO_DATA", "false"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.escalation.nominal_duration_days, 21);
        assert!(!config.seed.demo_data);
    }

    #[test]
    fn test_invalid_number_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("RD_MEDIUM_THRESHOLD_DAYS", "10")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Inconsistent(_)));
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig::default();
        let addr = config.server_addr();
        assert_eq!(addr.port(), 8080);
    }
}
