use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodingError {
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("DocumentError: {0}")]
    DocumentError(#[from] serde_json::Error),
    #[error("CoordinateError: {0}")]
    CoordinateError(String),
}
