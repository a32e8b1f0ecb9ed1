//! Error types for TrueBudget

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid frequency: {0} (expected weekly, biweekly or monthly)")]
    InvalidFrequency(String),

    #[error("Invalid savings goal type: {0} (expected amount or percent)")]
    InvalidGoalType(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Advice service error: {0}")]
    Advice(String),
}

pub type Result<T> = std::result::Result<T, Error>;
