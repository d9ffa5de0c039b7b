//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown filter keyword: {0}")]
    UnknownFilter(String),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Mail relay error: {0}")]
    Relay(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
