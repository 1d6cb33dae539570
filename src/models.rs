use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use crate::errors::InputError;

pub const INVALID_POSTAL_CODE: &str = "Invalid zip code or unable to fetch coordinates.";
pub const INVALID_INPUT: &str = "Invalid input. Provide a zip code or a dictionary with latitude and longitude.";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A location to fetch weather for, either a postal code still to be resolved or
/// an explicit coordinate pair
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    PostalCode(String),
    Coordinates(Coordinates),
}

impl LocationInput {
    /// Interprets an untyped JSON value as a location input.
    /// A string is a postal code, an object needs numeric latitude and longitude keys.
    ///
    /// # Arguments
    ///
    /// * 'value' - the JSON value to interpret
    pub fn from_json(value: &Value) -> Result<LocationInput, InputError> {
        match value {
            Value::String(postal_code) => Ok(LocationInput::PostalCode(postal_code.clone())),
            Value::Object(map) => {
                let latitude = map.get("latitude")
                    .and_then(Value::as_f64)
                    .ok_or(InputError::MissingKey("latitude"))?;
                let longitude = map.get("longitude")
                    .and_then(Value::as_f64)
                    .ok_or(InputError::MissingKey("longitude"))?;

                Ok(LocationInput::Coordinates(Coordinates { latitude, longitude }))
            },
            other => Err(InputError::Shape(other.to_string())),
        }
    }
}

/// Turns a command line location into a JSON value.
/// Text starting with '{' must be a JSON mapping, anything else is taken as a postal code.
///
/// # Arguments
///
/// * 'arg' - the raw argument text
pub fn parse_location_arg(arg: &str) -> Result<Value, InputError> {
    let arg = arg.trim();
    if arg.starts_with('{') {
        Ok(serde_json::from_str(arg)?)
    } else {
        Ok(Value::String(arg.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub error: String,
}

/// Outcome of a weather lookup, the upstream body passed through as is or a locally built error
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum WeatherResult {
    Data(Value),
    Error(ErrorRecord),
}

impl WeatherResult {
    pub fn error(message: impl Into<String>) -> WeatherResult {
        WeatherResult::Error(ErrorRecord { error: message.into() })
    }

    pub fn invalid_postal_code() -> WeatherResult {
        WeatherResult::error(INVALID_POSTAL_CODE)
    }

    pub fn invalid_input() -> WeatherResult {
        WeatherResult::error(INVALID_INPUT)
    }

    /// Error record for a non successful weather service response
    ///
    /// # Arguments
    ///
    /// * 'status' - the http status code returned by the weather service
    pub fn status_error(status: u16) -> WeatherResult {
        WeatherResult::error(format!("Failed to fetch data. Status code: {}", status))
    }

    /// Renders the result as JSON text indented with four spaces
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
