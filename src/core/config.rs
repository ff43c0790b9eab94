use std::env;

use crate::errors::ConfigError;

pub const OPENAI_KEY: &str = "OPENAI_KEY";
pub const OPENAI_ENDPOINT: &str = "OPENAI_ENDPOINT";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_API_VERSION: &str = "OPENAI_API_VERSION";

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_API_VERSION: &str = "2024-02-01";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub openai_key: String,
    pub openai_endpoint: String,
    pub openai_model: String,
    pub openai_api_version: String,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming every required variable that is
    /// unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Only unset required variables are missing; an empty key or endpoint is
    /// accepted and fails later at the upstream. Empty optional values fall
    /// back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming every required variable that is
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let key = lookup(OPENAI_KEY);
        let endpoint = lookup(OPENAI_ENDPOINT);

        match (key, endpoint) {
            (Some(openai_key), Some(openai_endpoint)) => Ok(Self {
                openai_key,
                openai_endpoint,
                openai_model: optional(OPENAI_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                openai_api_version: optional(OPENAI_API_VERSION)
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            }),
            (key, endpoint) => {
                let mut missing = Vec::new();
                if key.is_none() {
                    missing.push(OPENAI_KEY);
                }
                if endpoint.is_none() {
                    missing.push(OPENAI_ENDPOINT);
                }
                Err(ConfigError::Missing(missing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_applies_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (OPENAI_KEY, "key"),
            (OPENAI_ENDPOINT, "https://example.openai.azure.com"),
        ]))
        .unwrap();

        assert_eq!(config.openai_key, "key");
        assert_eq!(config.openai_endpoint, "https://example.openai.azure.com");
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.openai_api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_from_lookup_honours_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (OPENAI_KEY, "key"),
            (OPENAI_ENDPOINT, "https://example.openai.azure.com"),
            (OPENAI_MODEL, "gpt-4o-prod"),
            (OPENAI_API_VERSION, "2024-06-01"),
        ]))
        .unwrap();

        assert_eq!(config.openai_model, "gpt-4o-prod");
        assert_eq!(config.openai_api_version, "2024-06-01");
    }

    #[test]
    fn test_from_lookup_reports_every_missing_variable() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec![OPENAI_KEY, OPENAI_ENDPOINT]));

        let err = AppConfig::from_lookup(lookup_from(&[(OPENAI_KEY, "key")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec![OPENAI_ENDPOINT]));
    }

    #[test]
    fn test_from_lookup_accepts_empty_required_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (OPENAI_KEY, ""),
            (OPENAI_ENDPOINT, "https://example.openai.azure.com"),
        ]))
        .unwrap();
        assert_eq!(config.openai_key, "");

        let config = AppConfig::from_lookup(lookup_from(&[(OPENAI_KEY, "key"), (OPENAI_ENDPOINT, "")]))
            .unwrap();
        assert_eq!(config.openai_endpoint, "");
    }

    #[test]
    fn test_empty_optional_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (OPENAI_KEY, "key"),
            (OPENAI_ENDPOINT, "https://example.openai.azure.com"),
            (OPENAI_MODEL, ""),
        ]))
        .unwrap();
        assert_eq!(config.openai_model, DEFAULT_MODEL);
    }
}
