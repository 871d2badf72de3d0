use reqwest::{Client, StatusCode};
use shared::{
    domain::Record,
    error::ApiError,
    protocol::{
        FetchDataQuery, UpdateDataRequest, UpdateDataResponse, FETCH_DATA_ROUTE,
        UPDATE_DATA_ROUTE,
    },
};
use thiserror::Error;
use tracing::{debug, info};

pub mod page;
pub mod table;
pub mod wizard;

pub use page::InventoryPage;
pub use table::{InventoryTable, SortDirection, SortState};
pub use wizard::{AddRecordWizard, RecordDraft, WizardAction, WizardError, WizardStep};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to inventory server failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("inventory server returned {status}: {error}")]
    Api { status: StatusCode, error: ApiError },
    #[error("inventory server returned {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// HTTP client for the fetch/update data endpoints.
#[derive(Clone)]
pub struct InventoryClient {
    http: Client,
    server_url: String,
}

impl InventoryClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_http_client(http: Client, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self { http, server_url }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn fetch_records(&self, sheet_id: Option<&str>) -> Result<Vec<Record>> {
        let query = FetchDataQuery {
            sheet_id: sheet_id.map(str::to_string),
        };
        let res = self
            .http
            .get(format!("{}{FETCH_DATA_ROUTE}", self.server_url))
            .query(&query)
            .send()
            .await?;
        let records: Vec<Record> = check_status(res).await?.json().await?;
        debug!(count = records.len(), "loaded records from server");
        Ok(records)
    }

    /// Sends the complete list; the server overwrites the sheet with it.
    pub async fn update_records(
        &self,
        sheet_id: Option<&str>,
        records: &[Record],
    ) -> Result<UpdateDataResponse> {
        let body = UpdateDataRequest {
            sheet_id: sheet_id.map(str::to_string),
            data: records.to_vec(),
        };
        let res = self
            .http
            .post(format!("{}{UPDATE_DATA_ROUTE}", self.server_url))
            .json(&body)
            .send()
            .await?;
        let resp: UpdateDataResponse = check_status(res).await?.json().await?;
        info!(count = records.len(), message = %resp.message, "pushed records to server");
        Ok(resp)
    }
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiError>(&body) {
        Ok(error) => Err(ClientError::Api { status, error }),
        Err(_) => Err(ClientError::UnexpectedStatus { status, body }),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
