pub mod errors;
mod models;

use std::time::Duration;
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use crate::config::Config;
use crate::models::Coordinates;
use crate::manager_geocoding::errors::GeocodingError;
use crate::manager_geocoding::models::PostalCodeLookup;

/// Struct for resolving postal codes into coordinates
pub struct Geocoding {
    client: Client,
    host: String,
    country: String,
}

impl Geocoding {
    /// Returns a geocoding struct ready for postal code lookups
    ///
    /// # Arguments
    ///
    /// * 'config' - configuration to use
    pub fn new(config: &Config) -> Result<Geocoding, GeocodingError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.general.request_timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Geocoding {
            client: builder.build()?,
            host: config.geocoding.host.clone(),
            country: config.geocoding.country.clone(),
        })
    }

    /// Retrieves the coordinates of the first place registered for a postal code.
    /// Any status other than 200, as well as a lookup without places, gives None.
    ///
    /// # Arguments
    ///
    /// * 'postal_code' - the postal code to look up, sent as is
    pub fn get_coordinates(&self, postal_code: &str) -> Result<Option<Coordinates>, GeocodingError> {
        let url = format!("{}/{}/{}", self.host, self.country, postal_code);
        debug!("geocoding request: {}", url);

        let response = self.client
            .get(url)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("geocoding of postal code {} failed with status {}", postal_code, status.as_u16());
            return Ok(None);
        }

        let json = response.text()?;
        let lookup: PostalCodeLookup = serde_json::from_str(&json)?;

        let Some(place) = lookup.places.first() else {
            warn!("no places found for postal code {}", postal_code);
            return Ok(None);
        };

        Ok(Some(Coordinates {
            latitude: parse_coordinate("latitude", &place.latitude)?,
            longitude: parse_coordinate("longitude", &place.longitude)?,
        }))
    }
}

/// Parses a coordinate given as text by the geocoding service
///
/// # Arguments
///
/// * 'name' - name of the coordinate, used in the error message
/// * 'value' - the text to parse
fn parse_coordinate(name: &str, value: &str) -> Result<f64, GeocodingError> {
    value.trim()
        .parse::<f64>()
        .map_err(|e| GeocodingError::CoordinateError(format!("{} '{}': {}", name, value, e)))
}
