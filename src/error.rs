use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),
}
