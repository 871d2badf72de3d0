use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("invalid sheets api base url '{0}'")]
    InvalidBaseUrl(String),
    #[error("sheets request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sheets api returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("no data found in range '{range}' of sheet {sheet_id}")]
    NoData { sheet_id: String, range: String },
    #[error("sheet {0} is not reachable")]
    Unavailable(String),
}
