use std::sync::Arc;

use sheets::RecordStore;
use shared::{
    domain::Record,
    error::ApiError,
    protocol::{UpdateDataRequest, UpdateDataResponse},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn RecordStore>,
    pub default_sheet_id: Option<String>,
}

impl ApiContext {
    pub fn new(store: Arc<dyn RecordStore>, default_sheet_id: Option<String>) -> Self {
        Self {
            store,
            default_sheet_id,
        }
    }

    /// Requested sheet id, or the configured default when the request names none.
    pub fn resolve_sheet_id(&self, requested: Option<&str>) -> Option<String> {
        requested
            .filter(|id| !id.trim().is_empty())
            .or(self.default_sheet_id.as_deref())
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string)
    }
}

pub async fn fetch_data(ctx: &ApiContext, sheet_id: Option<&str>) -> Result<Vec<Record>, ApiError> {
    // A read with nowhere to read from is a failed read: empty, not an error.
    let Some(sheet_id) = ctx.resolve_sheet_id(sheet_id) else {
        error!("fetch requested without a sheet id and no default is configured");
        return Ok(Vec::new());
    };
    let records = ctx.store.fetch_records(&sheet_id).await;
    info!(%sheet_id, count = records.len(), "served records");
    Ok(records)
}

pub async fn update_data(
    ctx: &ApiContext,
    req: UpdateDataRequest,
) -> Result<UpdateDataResponse, ApiError> {
    let Some(sheet_id) = ctx.resolve_sheet_id(req.sheet_id.as_deref()) else {
        error!("update requested without a sheet id and no default is configured");
        return Err(ApiError::update_failed());
    };
    ctx.store
        .update_records(&sheet_id, &req.data)
        .await
        .map_err(|e| {
            error!(%sheet_id, error = %e, "update failed");
            ApiError::update_failed()
        })?;
    info!(%sheet_id, count = req.data.len(), "updated records");
    Ok(UpdateDataResponse::succeeded())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheets::MemoryStore;
    use shared::{
        domain::placeholder_records,
        error::UPDATE_FAILED,
        protocol::UPDATE_SUCCEEDED,
    };

    async fn setup(default_sheet_id: Option<&str>) -> (ApiContext, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_records("default-sheet", &placeholder_records()).await);
        (
            ApiContext::new(store.clone(), default_sheet_id.map(str::to_string)),
            store,
        )
    }

    #[tokio::test]
    async fn fetch_falls_back_to_default_sheet() {
        let (ctx, _) = setup(Some("default-sheet")).await;
        let records = fetch_data(&ctx, None).await.expect("records");
        assert_eq!(records, placeholder_records());

        let records = fetch_data(&ctx, Some("")).await.expect("records");
        assert_eq!(records.len(), 3);
    }

    #[tokio::test]
    async fn fetch_prefers_requested_sheet() {
        let (ctx, store) = setup(Some("default-sheet")).await;
        store.seed("other", &placeholder_records()[..1]).await;
        let records = fetch_data(&ctx, Some("other")).await.expect("records");
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn fetch_of_unknown_sheet_is_an_empty_success() {
        let (ctx, _) = setup(Some("default-sheet")).await;
        let records = fetch_data(&ctx, Some("nope")).await.expect("records");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn missing_sheet_id_everywhere_reads_empty_and_fails_updates() {
        let (ctx, _) = setup(None).await;
        let records = fetch_data(&ctx, None).await.expect("records");
        assert!(records.is_empty());
        let records = fetch_data(&ctx, Some("  ")).await.expect("records");
        assert!(records.is_empty());

        let err = update_data(
            &ctx,
            UpdateDataRequest {
                sheet_id: None,
                data: Vec::new(),
            },
        )
        .await
        .expect_err("should fail");
        assert_eq!(err.error, UPDATE_FAILED);
    }

    #[tokio::test]
    async fn update_overwrites_the_sheet_and_reports_success() {
        let (ctx, store) = setup(Some("default-sheet")).await;
        let data = placeholder_records()[1..].to_vec();
        let resp = update_data(
            &ctx,
            UpdateDataRequest {
                sheet_id: Some("fresh".into()),
                data: data.clone(),
            },
        )
        .await
        .expect("update");
        assert_eq!(resp.message, UPDATE_SUCCEEDED);
        assert_eq!(store.fetch_records("fresh").await, data);
    }

    #[tokio::test]
    async fn store_failure_becomes_generic_update_error() {
        let (ctx, store) = setup(Some("default-sheet")).await;
        store.set_fail_updates(true);
        let err = update_data(
            &ctx,
            UpdateDataRequest {
                sheet_id: None,
                data: placeholder_records(),
            },
        )
        .await
        .expect_err("should fail");
        assert_eq!(err, ApiError::update_failed());
    }
}
