use serde::{Deserialize, Serialize};

use crate::domain::Record;

pub const FETCH_DATA_ROUTE: &str = "/api/fetchData";
pub const UPDATE_DATA_ROUTE: &str = "/api/updateData";
pub const UPDATE_SUCCEEDED: &str = "Data updated successfully";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchDataQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDataRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<String>,
    pub data: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDataResponse {
    pub message: String,
}

impl UpdateDataResponse {
    pub fn succeeded() -> Self {
        Self {
            message: UPDATE_SUCCEEDED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_accepts_missing_sheet_id() {
        let req: UpdateDataRequest = serde_json::from_str(r#"{"data": []}"#).expect("json");
        assert!(req.sheet_id.is_none());
        assert!(req.data.is_empty());
    }

    #[test]
    fn update_request_reads_camel_case_sheet_id() {
        let req: UpdateDataRequest =
            serde_json::from_str(r#"{"sheetId": "abc", "data": []}"#).expect("json");
        assert_eq!(req.sheet_id.as_deref(), Some("abc"));
    }
}
