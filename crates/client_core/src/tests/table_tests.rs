use super::*;
use shared::domain::placeholder_records;

fn record(id: &str, owner: &str, series: &str) -> Record {
    Record {
        id: id.into(),
        date_added: "2024-07-01".into(),
        owner: owner.into(),
        co_owners: Vec::new(),
        series: series.into(),
        model: "X100".into(),
        broken_parts: String::new(),
    }
}

fn ids(rows: &[&Record]) -> Vec<String> {
    rows.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn empty_search_shows_everything_sorted_by_id() {
    let table = InventoryTable::new(placeholder_records());
    assert_eq!(ids(&table.view()), vec!["f12345", "f34567", "f67890"]);
    assert_eq!(table.sort(), SortState::default());
}

#[test]
fn search_matches_id_or_owner_ignoring_case() {
    let mut table = InventoryTable::new(vec![
        record("f12345", "999999", "A1"),
        record("f55555", "123450", "B2"),
        record("f00000", "000000", "C3"),
    ]);

    table.set_search_term("F1");
    assert_eq!(ids(&table.filtered()), vec!["f12345"]);

    table.set_search_term("2345");
    assert_eq!(ids(&table.filtered()), vec!["f12345", "f55555"]);

    table.set_search_term("B2");
    assert!(table.filtered().is_empty());
}

#[test]
fn every_search_term_partitions_the_records_exactly() {
    let table_records = vec![
        record("f12345", "123456", "A1"),
        record("f67890", "789012", "B2"),
        record("f34567", "345678", "C3"),
        record("fABCDE", "abc123", "A1"),
    ];
    let mut table = InventoryTable::new(table_records.clone());

    for term in ["", "f", "F", "23", "456", "789", "abc", "ABC", "zzz", "f3", "8"] {
        table.set_search_term(term);
        let shown = table.filtered();
        let needle = term.to_lowercase();
        for candidate in &table_records {
            let hit = candidate.id.to_lowercase().contains(&needle)
                || candidate.owner.to_lowercase().contains(&needle);
            assert_eq!(
                shown.iter().any(|r| *r == candidate),
                hit,
                "term {term:?} record {}",
                candidate.id
            );
        }
    }
}

#[test]
fn clicking_the_same_header_twice_returns_to_ascending() {
    let mut table = InventoryTable::new(placeholder_records());

    let state = table.toggle_sort(RecordColumn::Owner);
    assert_eq!(state.direction, SortDirection::Ascending);
    assert_eq!(ids(&table.view()), vec!["f12345", "f34567", "f67890"]);

    let state = table.toggle_sort(RecordColumn::Owner);
    assert_eq!(state.direction, SortDirection::Descending);
    assert_eq!(ids(&table.view()), vec!["f67890", "f34567", "f12345"]);

    let state = table.toggle_sort(RecordColumn::Owner);
    assert_eq!(state.direction, SortDirection::Ascending);
    assert_eq!(ids(&table.view()), vec!["f12345", "f34567", "f67890"]);
}

#[test]
fn switching_columns_resets_to_ascending() {
    let mut table = InventoryTable::new(placeholder_records());
    table.toggle_sort(RecordColumn::Id);
    assert_eq!(table.sort().direction, SortDirection::Descending);

    let state = table.toggle_sort(RecordColumn::BrokenParts);
    assert_eq!(state.column, RecordColumn::BrokenParts);
    assert_eq!(state.direction, SortDirection::Ascending);
    assert_eq!(ids(&table.view()), vec!["f34567", "f12345", "f67890"]);
}

#[test]
fn equal_keys_keep_insertion_order_in_both_directions() {
    let mut table = InventoryTable::new(vec![
        record("f00003", "111111", "A1"),
        record("f00001", "222222", "B2"),
        record("f00002", "333333", "A1"),
        record("f00004", "444444", "B2"),
    ]);

    table.toggle_sort(RecordColumn::Series);
    assert_eq!(
        ids(&table.view()),
        vec!["f00003", "f00002", "f00001", "f00004"]
    );

    table.toggle_sort(RecordColumn::Series);
    assert_eq!(
        ids(&table.view()),
        vec!["f00001", "f00004", "f00003", "f00002"]
    );
}

#[test]
fn view_follows_data_changes() {
    let mut table = InventoryTable::new(placeholder_records());
    table.set_search_term("f9");
    assert!(table.view().is_empty());

    table.push(record("f99999", "123123", "A1"));
    assert_eq!(ids(&table.view()), vec!["f99999"]);

    table.replace_records(Vec::new());
    assert!(table.view().is_empty());
    assert!(table.is_empty());
}
