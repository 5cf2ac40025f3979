use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where and how API keys are confirmed remotely
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Validation endpoint; the stub validator is used when unset
    pub endpoint: Option<String>,
    /// Request timeout for the validation endpoint
    pub timeout_secs: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 10,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("KRUTAI")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.validation.endpoint, None);
        assert_eq!(config.validation.timeout_secs, 10);
    }

    #[test]
    fn test_partial_sources_fill_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [logging]
                format = "json"

                [validation]
                endpoint = "https://api.krutai.com/validate"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.validation.endpoint.as_deref(),
            Some("https://api.krutai.com/validate")
        );
        assert_eq!(config.validation.timeout_secs, 10);
    }

    fn env_vars(vars: &[(&str, &str)]) -> config::Environment {
        let source = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        AppConfig::environment().source(Some(source))
    }

    #[test]
    fn test_environment_overrides_validation() {
        let config = AppConfig::load_with(env_vars(&[
            ("KRUTAI__VALIDATION__ENDPOINT", "http://127.0.0.1:9/validate"),
            ("KRUTAI__VALIDATION__TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(
            config.validation.endpoint.as_deref(),
            Some("http://127.0.0.1:9/validate")
        );
        assert_eq!(config.validation.timeout_secs, 3);
    }

    #[test]
    fn test_malformed_timeout_is_an_error() {
        let result = AppConfig::load_with(env_vars(&[
            ("KRUTAI__VALIDATION__ENDPOINT", "http://127.0.0.1:9/validate"),
            ("KRUTAI__VALIDATION__TIMEOUT_SECS", "ten"),
        ]));

        assert!(result.is_err());
    }
}
