use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::domain::Record;
use tracing::{debug, error, info};
use url::Url;

pub mod error;
mod memory;
pub mod rows;

pub use error::SheetsError;
pub use memory::MemoryStore;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_READ_RANGE: &str = "Sheet1";
pub const DEFAULT_WRITE_RANGE: &str = "Sheet1!A2:G";
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

pub type Result<T> = std::result::Result<T, SheetsError>;

/// Whole-sheet read and overwrite of inventory records.
///
/// Reads never fail from the caller's point of view: any problem is logged
/// and an empty list comes back. Writes report their failure.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_records(&self, sheet_id: &str) -> Vec<Record>;
    async fn update_records(&self, sheet_id: &str, records: &[Record]) -> Result<UpdateSummary>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetsCredential {
    ApiKey(String),
    BearerToken(String),
}

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub base_url: String,
    pub read_range: String,
    pub write_range: String,
    pub credential: Option<SheetsCredential>,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            read_range: DEFAULT_READ_RANGE.into(),
            write_range: DEFAULT_WRITE_RANGE.into(),
            credential: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    #[serde(default)]
    pub updated_range: Option<String>,
    #[serde(default)]
    pub updated_rows: u64,
    #[serde(default)]
    pub updated_columns: u64,
    #[serde(default)]
    pub updated_cells: u64,
}

#[derive(Debug, Deserialize)]
struct ValueRangeResponse {
    #[serde(default)]
    values: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    range: &'a str,
    major_dimension: &'static str,
    values: Vec<Vec<String>>,
}

/// Client for the Google Sheets v4 values API.
#[derive(Clone)]
pub struct SheetsClient {
    http: Client,
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: SheetsConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// Reads the configured range and maps every row after the header.
    pub async fn try_fetch_records(&self, sheet_id: &str) -> Result<Vec<Record>> {
        let url = self.values_url(sheet_id, &self.config.read_range)?;
        let response = self.authorize(self.http.get(url)).send().await?;
        let response = ensure_success(response).await?;
        let body: ValueRangeResponse = response.json().await?;

        let rows = body
            .values
            .filter(|rows| !rows.is_empty())
            .ok_or_else(|| SheetsError::NoData {
                sheet_id: sheet_id.to_string(),
                range: self.config.read_range.clone(),
            })?;
        let records = rows::records_from_rows(&rows);
        debug!(sheet_id, count = records.len(), "fetched records from sheet");
        Ok(records)
    }

    /// Overwrites the configured write range with `records`, one row each.
    pub async fn try_update_records(
        &self,
        sheet_id: &str,
        records: &[Record],
    ) -> Result<UpdateSummary> {
        let mut url = self.values_url(sheet_id, &self.config.write_range)?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", VALUE_INPUT_OPTION);
        let body = ValueRangeBody {
            range: &self.config.write_range,
            major_dimension: "ROWS",
            values: records.iter().map(rows::row_from_record).collect(),
        };

        let response = self
            .authorize(self.http.put(url))
            .json(&body)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let summary: UpdateSummary = response.json().await?;
        info!(
            sheet_id,
            rows = records.len(),
            updated_cells = summary.updated_cells,
            "wrote records to sheet"
        );
        Ok(summary)
    }

    fn values_url(&self, sheet_id: &str, range: &str) -> Result<Url> {
        let invalid = || SheetsError::InvalidBaseUrl(self.config.base_url.clone());
        let mut url = Url::parse(&self.config.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", sheet_id, "values", range]);
        if let Some(SheetsCredential::ApiKey(key)) = &self.config.credential {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.credential {
            Some(SheetsCredential::BearerToken(token)) => request.bearer_auth(token),
            _ => request,
        }
    }
}

#[async_trait]
impl RecordStore for SheetsClient {
    async fn fetch_records(&self, sheet_id: &str) -> Vec<Record> {
        match self.try_fetch_records(sheet_id).await {
            Ok(records) => records,
            Err(error) => {
                error!(sheet_id, %error, "error fetching data from sheet");
                Vec::new()
            }
        }
    }

    async fn update_records(&self, sheet_id: &str, records: &[Record]) -> Result<UpdateSummary> {
        self.try_update_records(sheet_id, records)
            .await
            .map_err(|error| {
                error!(sheet_id, %error, "error updating data in sheet");
                error
            })
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SheetsError::Status { status, body })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
