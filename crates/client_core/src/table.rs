//! Searchable, sortable view over the in-memory record list.

use shared::domain::{Record, RecordColumn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: RecordColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: RecordColumn::Id,
            direction: SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    records: Vec<Record>,
    search_term: String,
    sort: SortState,
}

impl InventoryTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: Record) -> &Record {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// A header click: the same column flips direction, a new one starts ascending.
    pub fn toggle_sort(&mut self, column: RecordColumn) -> SortState {
        self.sort = if self.sort.column == column {
            SortState {
                column,
                direction: self.sort.direction.flipped(),
            }
        } else {
            SortState {
                column,
                direction: SortDirection::Ascending,
            }
        };
        self.sort
    }

    /// Records whose id or owner contains the search term, ignoring case.
    pub fn filtered(&self) -> Vec<&Record> {
        let term = self.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|record| matches_term(record, &term))
            .collect()
    }

    /// Filtered records in the current sort order. Ties keep list order.
    pub fn view(&self) -> Vec<&Record> {
        let mut rows = self.filtered();
        let SortState { column, direction } = self.sort;
        rows.sort_by(|a, b| {
            let ordering = column.compare(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }
}

fn matches_term(record: &Record, lowered_term: &str) -> bool {
    record.id.to_lowercase().contains(lowered_term)
        || record.owner.to_lowercase().contains(lowered_term)
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
