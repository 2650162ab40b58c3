use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("ticket '{id}' has priority {value} outside the known 0-4 range")]
    DataIntegrity { id: String, value: i64 },

    #[error("invalid group key '{0}'")]
    InvalidGroupKey(String),

    #[error("invalid sort key '{0}'")]
    InvalidSortKey(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        BoardError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
