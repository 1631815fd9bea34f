//! Runtime configuration, read from the environment

use crate::api::DEFAULT_API_URL;

pub const DEFAULT_LOG_FILTER: &str = "employee_manager=info";

/// App configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST API, without the `/employees` suffix
    pub api_url: String,
    /// Fetch the list as soon as the window opens
    pub load_on_start: bool,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            load_on_start: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: lookup("EMPLOYEE_API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            load_on_start: lookup("EMPLOYEE_LOAD_ON_START")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.load_on_start),
            log_filter: lookup("EMPLOYEE_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("EMPLOYEE_API_URL", "http://10.0.0.5:9090/api/v1/"),
            ("EMPLOYEE_LOAD_ON_START", "Yes"),
            ("EMPLOYEE_LOG", "debug"),
        ]);
        assert_eq!(config.api_url, "http://10.0.0.5:9090/api/v1");
        assert!(config.load_on_start);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn unparseable_bool_falls_back() {
        let config = config_from(&[("EMPLOYEE_LOAD_ON_START", "sometimes")]);
        assert!(!config.load_on_start);
    }
}
