//! Error types for the basketball statistics toolkit

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Unknown stat category: {key}")]
    UnknownStatKey { key: String },

    #[error("Stat category {key} has no attempts column to gate on")]
    InvalidAttemptsFilter { key: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("No rows available for this league")]
    NoData,
}

impl From<anyhow::Error> for StatsError {
    fn from(err: anyhow::Error) -> Self {
        StatsError::Storage {
            message: err.to_string(),
        }
    }
}
