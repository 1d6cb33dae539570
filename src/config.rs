use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GeocodingParameters {
    pub host: String,
    pub country: String,
}

impl Default for GeocodingParameters {
    fn default() -> Self {
        Self {
            host: "https://api.zippopotam.us".to_string(),
            country: "us".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WeatherParameters {
    pub host: String,
}

impl Default for WeatherParameters {
    fn default() -> Self {
        Self { host: "https://api.open-meteo.com".to_string() }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stderr: bool,
    /// Request timeout in seconds, the http client default applies when absent
    pub request_timeout: Option<u64>,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LevelFilter::Warn,
            log_to_stderr: true,
            request_timeout: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub geocoding: GeocodingParameters,
    pub weather: WeatherParameters,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses configuration from toml text, missing sections and keys get their defaults
///
/// # Arguments
///
/// * 'toml' - the configuration text
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(toml)?;

    config.geocoding.host = config.geocoding.host.trim_end_matches('/').to_string();
    config.weather.host = config.weather.host.trim_end_matches('/').to_string();

    Ok(config)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FileError: {0}")]
    FileError(#[from] std::io::Error),
    #[error("ParseError: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.geocoding.host, "https://api.zippopotam.us");
        assert_eq!(config.geocoding.country, "us");
        assert_eq!(config.weather.host, "https://api.open-meteo.com");
        assert_eq!(config.general.log_level, LevelFilter::Warn);
        assert!(config.general.log_to_stderr);
        assert!(config.general.log_path.is_none());
        assert!(config.general.request_timeout.is_none());
    }

    #[test]
    fn partial_config_overrides_given_keys() {
        let config = parse_config(r#"
            [weather]
            host = "http://localhost:8080/"

            [general]
            log_level = "debug"
            request_timeout = 10
        "#).unwrap();

        assert_eq!(config.weather.host, "http://localhost:8080");
        assert_eq!(config.geocoding.country, "us");
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert_eq!(config.general.request_timeout, Some(10));
        assert!(config.general.log_to_stderr);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = parse_config("[general\nlog_level = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let err = load_config("/nonexistent/zip_weather/config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }
}
