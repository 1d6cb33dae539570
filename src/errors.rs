use thiserror::Error;

/// Error depicting a failed program run, wraps whatever stopped initialization or the run itself
///
#[derive(Debug, Error)]
#[error("error while fetching weather: {0}")]
pub struct RunError(pub String);

/// Error depicting a location input that is neither a postal code nor a coordinate mapping
///
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unsupported input shape: {0}")]
    Shape(String),
    #[error("missing or non numeric key: {0}")]
    MissingKey(&'static str),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}
