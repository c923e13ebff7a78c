use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed composing request body")]
    Encode(#[from] serde_json::Error),
    #[error("invalid api key")]
    ApiKey(#[from] InvalidHeaderValue),
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    #[error("failed reading response body")]
    ReadBody(#[source] reqwest::Error),
}
