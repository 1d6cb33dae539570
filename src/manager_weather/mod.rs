use std::time::Duration;
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;
use crate::config::Config;
use crate::models::{Coordinates, WeatherResult};

const FORECAST_PATH: &str = "/v1/forecast";
const HOURLY_FIELDS: [&str; 3] = ["temperature_2m", "wind_speed_10m", "relative_humidity_2m"];

/// Struct for fetching current and hourly weather
pub struct Weather {
    client: Client,
    host: String,
}

impl Weather {
    /// Returns a weather struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'config' - configuration to use
    pub fn new(config: &Config) -> Result<Weather, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.general.request_timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Weather {
            client: builder.build()?,
            host: config.weather.host.clone(),
        })
    }

    /// Retrieves current weather and the hourly forecast for the given coordinates.
    /// A 200 response body is returned untouched, any other status gives an error record.
    ///
    /// # Arguments
    ///
    /// * 'coordinates' - where to get the weather for
    pub fn get_weather(&self, coordinates: Coordinates) -> Result<WeatherResult, WeatherError> {
        let url = format!("{}{}", self.host, FORECAST_PATH);
        let latitude = coordinates.latitude.to_string();
        let longitude = coordinates.longitude.to_string();
        let hourly = HOURLY_FIELDS.join(",");
        let query = vec![
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("hourly", hourly.as_str()),
            ("current_weather", "true"),
        ];
        debug!("weather request: {} {:?}", url, query);

        let response = self.client
            .get(url)
            .query(&query)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("weather service returned status {}", status.as_u16());
            return Ok(WeatherResult::status_error(status.as_u16()));
        }

        let json = response.text()?;
        let data: Value = serde_json::from_str(&json)?;

        Ok(WeatherResult::Data(data))
    }
}

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("DocumentError: {0}")]
    DocumentError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};
    use crate::test_support::{config_for, dead_host, mock_server};
    use super::*;

    const NYC: Coordinates = Coordinates { latitude: 40.7128, longitude: -74.006 };

    #[test]
    fn passes_body_through_on_ok() {
        let (rt, server) = mock_server();
        let body = json!({"current_weather": {"temperature": 15.0}});
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/v1/forecast"))
                .and(query_param("latitude", "40.7128"))
                .and(query_param("longitude", "-74.006"))
                .and(query_param("hourly", "temperature_2m,wind_speed_10m,relative_humidity_2m"))
                .and(query_param("current_weather", "true"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
                .expect(1)
                .mount(&server)
        );

        let weather = Weather::new(&config_for(&server.uri())).unwrap();
        let result = weather.get_weather(NYC).unwrap();

        assert_eq!(result, WeatherResult::Data(body));
    }

    #[test]
    fn sends_exactly_four_query_parameters() {
        let (rt, server) = mock_server();
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/v1/forecast"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
                .mount(&server)
        );

        let weather = Weather::new(&config_for(&server.uri())).unwrap();
        weather.get_weather(NYC).unwrap();

        let requests = rt.block_on(server.received_requests()).unwrap();
        assert_eq!(requests.len(), 1);
        let mut keys: Vec<String> = requests[0].url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        keys.sort();
        assert_eq!(keys, vec!["current_weather", "hourly", "latitude", "longitude"]);
    }

    #[test]
    fn not_found_gives_status_error() {
        let (rt, server) = mock_server();
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/v1/forecast"))
                .respond_with(ResponseTemplate::new(404))
                .mount(&server)
        );

        let weather = Weather::new(&config_for(&server.uri())).unwrap();
        let result = weather.get_weather(NYC).unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"error": "Failed to fetch data. Status code: 404"})
        );
    }

    #[test]
    fn bad_request_body_is_not_passed_through() {
        let (rt, server) = mock_server();
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/v1/forecast"))
                .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": true, "reason": "bad latitude"})))
                .mount(&server)
        );

        let weather = Weather::new(&config_for(&server.uri())).unwrap();
        let result = weather.get_weather(Coordinates { latitude: 123.0, longitude: 0.0 }).unwrap();

        assert_eq!(result, WeatherResult::status_error(400));
    }

    #[test]
    fn malformed_ok_body_is_a_document_error() {
        let (rt, server) = mock_server();
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/v1/forecast"))
                .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
                .mount(&server)
        );

        let weather = Weather::new(&config_for(&server.uri())).unwrap();
        let err = weather.get_weather(NYC).unwrap_err();

        assert!(matches!(err, WeatherError::DocumentError(_)));
    }

    #[test]
    fn transport_failure_is_a_network_error() {
        let weather = Weather::new(&config_for(&dead_host())).unwrap();
        let err = weather.get_weather(NYC).unwrap_err();

        assert!(matches!(err, WeatherError::NetworkError(_)));
    }
}
