//! Positional mapping between sheet rows (columns A-G) and records.

use serde_json::Value;
use shared::domain::{Record, RecordColumn};

pub const COLUMN_COUNT: usize = RecordColumn::ALL.len();

/// Row 1 of the sheet: the table headers in column order.
pub fn header_row() -> Vec<String> {
    RecordColumn::ALL
        .iter()
        .map(|column| column.header().to_string())
        .collect()
}

/// Maps the rows of a read range to records. The first row is the header.
pub fn records_from_rows(rows: &[Vec<Value>]) -> Vec<Record> {
    rows.iter().skip(1).map(|row| record_from_row(row)).collect()
}

pub fn record_from_row(row: &[Value]) -> Record {
    let cell = |index: usize| row.get(index).map(cell_text).unwrap_or_default();
    Record {
        id: cell(0),
        date_added: cell(1),
        owner: cell(2),
        co_owners: split_co_owner_cell(&cell(3)),
        series: cell(4),
        model: cell(5),
        broken_parts: cell(6),
    }
}

pub fn row_from_record(record: &Record) -> Vec<String> {
    vec![
        record.id.clone(),
        record.date_added.clone(),
        record.owner.clone(),
        record.co_owners.join(", "),
        record.series.clone(),
        record.model.clone(),
        record.broken_parts.clone(),
    ]
}

fn split_co_owner_cell(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

// Formatted reads return strings, but unformatted ones can carry numbers.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
