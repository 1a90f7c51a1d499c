//! Error types for the shared draw logic

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid results page URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Cached result is unreadable: {0}")]
    Cache(#[from] serde_json::Error),

    #[error("Invalid spin config: {0}")]
    InvalidSpinConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
