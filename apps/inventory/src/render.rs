//! Plain-text rendering of the inventory table.

use client_core::{SortDirection, SortState};
use shared::domain::{Record, RecordColumn};

const COLUMN_GAP: &str = "  ";

pub fn render_table(rows: &[&Record], sort: SortState) -> String {
    let headers: Vec<String> = RecordColumn::ALL
        .iter()
        .map(|column| {
            if *column == sort.column {
                let arrow = match sort.direction {
                    SortDirection::Ascending => "^",
                    SortDirection::Descending => "v",
                };
                format!("{} {arrow}", column.header())
            } else {
                column.header().to_string()
            }
        })
        .collect();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|record| {
            RecordColumn::ALL
                .iter()
                .map(|column| column.display_value(record))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    if cells.is_empty() {
        out.push_str("(no matching records)\n");
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::InventoryTable;
    use shared::domain::placeholder_records;

    #[test]
    fn marks_sorted_column_and_joins_co_owners() {
        let mut table = InventoryTable::new(placeholder_records());
        table.toggle_sort(RecordColumn::Owner);
        table.toggle_sort(RecordColumn::Owner);
        let text = render_table(&table.view(), table.sort());

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("Owner v"));
        assert!(lines[0].starts_with("ID "));
        assert!(lines[2].starts_with("f67890"));
        assert!(text.contains("654321, 234567"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn empty_view_says_so() {
        let text = render_table(&[], SortState::default());
        assert!(text.contains("ID ^"));
        assert!(text.ends_with("(no matching records)\n"));
    }
}
