//! Error types for the image backup tool

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Twitter API error: {0}")]
    Api(String),

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("Could not retrieve the tweet count for '{0}'; the username is probably invalid")]
    UnknownUser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
