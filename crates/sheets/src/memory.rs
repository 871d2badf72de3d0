use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use serde_json::Value;
use shared::domain::Record;
use tokio::sync::RwLock;
use tracing::warn;

use crate::{
    rows::{self, header_row},
    RecordStore, Result, SheetsError, UpdateSummary, DEFAULT_WRITE_RANGE,
};

/// In-process stand-in for a spreadsheet: a header row followed by data rows,
/// overwritten from row 2 the way the values API does it.
#[derive(Default)]
pub struct MemoryStore {
    sheets: RwLock<HashMap<String, Vec<Vec<String>>>>,
    fail_updates: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(sheet_id: &str, records: &[Record]) -> Self {
        let store = Self::new();
        store.seed(sheet_id, records).await;
        store
    }

    /// Replaces the sheet's contents with a header row plus `records`.
    pub async fn seed(&self, sheet_id: &str, records: &[Record]) {
        let mut sheet = vec![header_row()];
        sheet.extend(records.iter().map(rows::row_from_record));
        self.sheets.write().await.insert(sheet_id.to_string(), sheet);
    }

    pub fn set_fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    pub async fn raw_rows(&self, sheet_id: &str) -> Option<Vec<Vec<String>>> {
        self.sheets.read().await.get(sheet_id).cloned()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_records(&self, sheet_id: &str) -> Vec<Record> {
        let sheets = self.sheets.read().await;
        let Some(sheet) = sheets.get(sheet_id).filter(|rows| !rows.is_empty()) else {
            warn!(sheet_id, "no data found in memory sheet");
            return Vec::new();
        };
        let cells: Vec<Vec<Value>> = sheet
            .iter()
            .map(|row| row.iter().cloned().map(Value::String).collect())
            .collect();
        rows::records_from_rows(&cells)
    }

    async fn update_records(&self, sheet_id: &str, records: &[Record]) -> Result<UpdateSummary> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(SheetsError::Unavailable(sheet_id.to_string()));
        }

        let mut sheets = self.sheets.write().await;
        let sheet = sheets
            .entry(sheet_id.to_string())
            .or_insert_with(|| vec![header_row()]);
        for (offset, record) in records.iter().enumerate() {
            let row = rows::row_from_record(record);
            match sheet.get_mut(offset + 1) {
                Some(existing) => *existing = row,
                None => sheet.push(row),
            }
        }

        Ok(UpdateSummary {
            updated_range: Some(format!("{DEFAULT_WRITE_RANGE}{}", records.len() + 1)),
            updated_rows: records.len() as u64,
            updated_columns: if records.is_empty() {
                0
            } else {
                rows::COLUMN_COUNT as u64
            },
            updated_cells: (records.len() * rows::COLUMN_COUNT) as u64,
        })
    }
}
