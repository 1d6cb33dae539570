use std::env;
use log::info;
use thiserror::Error;
use crate::config::{load_config, Config, ConfigError};
use crate::logging::{setup_logger, LoggerError};
use crate::manager_geocoding::Geocoding;
use crate::manager_geocoding::errors::GeocodingError;
use crate::manager_weather::{Weather, WeatherError};

const DEFAULT_LOCATION: &str = "20148";

pub struct Mgr {
    pub geocoding: Geocoding,
    pub weather: Weather,
}

impl Mgr {
    /// Instantiates all managers from configuration
    ///
    /// # Arguments
    ///
    /// * 'config' - configuration to use
    pub fn new(config: &Config) -> Result<Mgr, InitializationError> {
        Ok(Mgr {
            geocoding: Geocoding::new(config)?,
            weather: Weather::new(config)?,
        })
    }
}

/// Command line arguments, all optional
#[derive(Debug, PartialEq)]
pub struct Args {
    pub config_path: Option<String>,
    pub location: String,
}

/// Parses '--config=<path>' and '--location=<postal code or JSON mapping>', other arguments are ignored
///
/// # Arguments
///
/// * 'args' - the command line arguments
pub fn parse_args(args: &[String]) -> Args {
    let value_of = |key: &str| args.iter().find_map(|a| a.strip_prefix(key)).map(str::to_string);

    Args {
        config_path: value_of("--config="),
        location: value_of("--location=").unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
    }
}

/// Initializes and returns command line arguments and a Mgr struct holding the initialized managers
///
pub fn init() -> Result<(Args, Mgr), InitializationError> {
    let args = parse_args(&env::args().collect::<Vec<String>>());

    // Load configuration, defaults apply when no file is given
    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    // Setup logging
    setup_logger(&config.general)?;

    info!("starting zip weather version: {}", env!("CARGO_PKG_VERSION"));

    let mgr = Mgr::new(&config)?;

    Ok((args, mgr))
}

/// Error depicting errors that occur during initialization
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] ConfigError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
    #[error("GeocodingSetupError: {0}")]
    GeocodingSetupError(#[from] GeocodingError),
    #[error("WeatherSetupError: {0}")]
    WeatherSetupError(#[from] WeatherError),
}
