//! Error types for the Hypixel Player Stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Hypixel API error: {cause}")]
    Api { cause: String },

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("invalid username: {name}")]
    InvalidUsername { name: String },
}
