use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SERIES_OPTIONS: [&str; 3] = ["A1", "B2", "C3"];
pub const MODEL_OPTIONS: [&str; 3] = ["X100", "Y200", "Z300"];

/// One inventory entry as it travels over the wire and through the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub date_added: String,
    pub owner: String,
    pub co_owners: Vec<String>,
    pub series: String,
    pub model: String,
    pub broken_parts: String,
}

impl Record {
    pub fn co_owners_display(&self) -> String {
        self.co_owners.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordColumn {
    Id,
    DateAdded,
    Owner,
    CoOwners,
    Series,
    Model,
    BrokenParts,
}

impl RecordColumn {
    pub const ALL: [RecordColumn; 7] = [
        RecordColumn::Id,
        RecordColumn::DateAdded,
        RecordColumn::Owner,
        RecordColumn::CoOwners,
        RecordColumn::Series,
        RecordColumn::Model,
        RecordColumn::BrokenParts,
    ];

    pub fn header(self) -> &'static str {
        match self {
            RecordColumn::Id => "ID",
            RecordColumn::DateAdded => "Date Added",
            RecordColumn::Owner => "Owner",
            RecordColumn::CoOwners => "Co-owners",
            RecordColumn::Series => "Series",
            RecordColumn::Model => "Model",
            RecordColumn::BrokenParts => "Broken Parts",
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            RecordColumn::Id => "id",
            RecordColumn::DateAdded => "dateAdded",
            RecordColumn::Owner => "owner",
            RecordColumn::CoOwners => "coOwners",
            RecordColumn::Series => "series",
            RecordColumn::Model => "model",
            RecordColumn::BrokenParts => "brokenParts",
        }
    }

    /// Cell text for this column, co-owners joined the way the table shows them.
    pub fn display_value(self, record: &Record) -> String {
        match self {
            RecordColumn::CoOwners => record.co_owners_display(),
            other => other.text(record).unwrap_or_default().to_string(),
        }
    }

    /// Natural ordering of the column's values: lexicographic for text,
    /// element-wise for the co-owner list.
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            RecordColumn::CoOwners => a.co_owners.cmp(&b.co_owners),
            other => other.text(a).cmp(&other.text(b)),
        }
    }

    fn text(self, record: &Record) -> Option<&str> {
        match self {
            RecordColumn::Id => Some(&record.id),
            RecordColumn::DateAdded => Some(&record.date_added),
            RecordColumn::Owner => Some(&record.owner),
            RecordColumn::CoOwners => None,
            RecordColumn::Series => Some(&record.series),
            RecordColumn::Model => Some(&record.model),
            RecordColumn::BrokenParts => Some(&record.broken_parts),
        }
    }
}

impl fmt::Display for RecordColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Error)]
#[error("unknown column '{0}'")]
pub struct UnknownColumn(pub String);

impl FromStr for RecordColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        RecordColumn::ALL
            .into_iter()
            .find(|column| column.field_name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// Records shown before any sheet is connected.
pub fn placeholder_records() -> Vec<Record> {
    vec![
        Record {
            id: "f12345".into(),
            date_added: "2024-07-01".into(),
            owner: "123456".into(),
            co_owners: vec!["654321".into(), "234567".into()],
            series: "A1".into(),
            model: "X100".into(),
            broken_parts: "None".into(),
        },
        Record {
            id: "f67890".into(),
            date_added: "2024-07-02".into(),
            owner: "789012".into(),
            co_owners: vec!["890123".into()],
            series: "B2".into(),
            model: "Y200".into(),
            broken_parts: "Screen".into(),
        },
        Record {
            id: "f34567".into(),
            date_added: "2024-07-03".into(),
            owner: "345678".into(),
            co_owners: Vec::new(),
            series: "C3".into(),
            model: "Z300".into(),
            broken_parts: "Keyboard".into(),
        },
    ]
}
