//! エラー型定義 (mlb-stats)

use thiserror::Error;

/// mlb-stats のエラー型
#[derive(Error, Debug)]
pub enum StatsError {
    /// Non-success HTTP status from the Stats API
    #[error("MLB Stats API error: {status} {body}")]
    Api { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// An id lookup returned an empty result
    #[error("No data found: {0}")]
    NotFound(String),
}

impl From<StatsError> for mlb_core::Error {
    fn from(err: StatsError) -> Self {
        mlb_core::Error::Upstream(err.to_string())
    }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, StatsError>;
