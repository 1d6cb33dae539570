use log::{info, warn};
use serde_json::Value;
use thiserror::Error;
use crate::initialization::Mgr;
use crate::manager_geocoding::errors::GeocodingError;
use crate::manager_weather::WeatherError;
use crate::models::{parse_location_arg, LocationInput, WeatherResult};

/// Runs a weather lookup for a location given as text and prints the result to stdout
///
/// # Arguments
///
/// * 'mgr' - struct with configured managers
/// * 'location' - a postal code or a JSON mapping with latitude and longitude
pub fn run(mgr: &Mgr, location: &str) -> Result<(), WorkerError> {
    info!("fetching weather for location: {}", location);

    let result = match parse_location_arg(location) {
        Ok(input) => get_weather_data_json(mgr, &input)?,
        Err(e) => {
            warn!("invalid location input {}: {}", location, e);
            WeatherResult::invalid_input()
        }
    };

    if let WeatherResult::Error(record) = &result {
        warn!("weather lookup failed: {}", record.error);
    }

    println!("{}", result.to_pretty_json()?);

    Ok(())
}

/// Retrieves weather for a location, resolving a postal code to coordinates first when needed.
/// An unresolvable postal code gives an error record without contacting the weather service.
///
/// # Arguments
///
/// * 'mgr' - struct with configured managers
/// * 'input' - the location to get weather for
pub fn get_weather_data(mgr: &Mgr, input: &LocationInput) -> Result<WeatherResult, WorkerError> {
    let coordinates = match input {
        LocationInput::PostalCode(postal_code) => {
            match mgr.geocoding.get_coordinates(postal_code)? {
                Some(coordinates) => coordinates,
                None => return Ok(WeatherResult::invalid_postal_code()),
            }
        },
        LocationInput::Coordinates(coordinates) => *coordinates,
    };

    Ok(mgr.weather.get_weather(coordinates)?)
}

/// Same as `get_weather_data` but for untyped input, anything not shaped as a postal code
/// or a latitude/longitude mapping gives an error record without any network call
///
/// # Arguments
///
/// * 'mgr' - struct with configured managers
/// * 'input' - a JSON string or mapping
pub fn get_weather_data_json(mgr: &Mgr, input: &Value) -> Result<WeatherResult, WorkerError> {
    match LocationInput::from_json(input) {
        Ok(input) => get_weather_data(mgr, &input),
        Err(e) => {
            warn!("invalid location input {}: {}", input, e);
            Ok(WeatherResult::invalid_input())
        }
    }
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("GeocodingError: {0}")]
    GeocodingError(#[from] GeocodingError),
    #[error("WeatherError: {0}")]
    WeatherError(#[from] WeatherError),
    #[error("OutputError: {0}")]
    OutputError(#[from] serde_json::Error),
}
