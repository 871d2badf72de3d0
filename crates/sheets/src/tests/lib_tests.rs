use super::*;
use serde_json::json;
use shared::domain::placeholder_records;

fn client(credential: Option<SheetsCredential>) -> SheetsClient {
    SheetsClient::new(SheetsConfig {
        credential,
        ..SheetsConfig::default()
    })
}

#[test]
fn read_url_targets_values_endpoint_with_api_key() {
    let url = client(Some(SheetsCredential::ApiKey("k-123".into())))
        .values_url("sheet-abc", DEFAULT_READ_RANGE)
        .expect("url");
    assert_eq!(
        url.as_str(),
        "https://sheets.googleapis.com/v4/spreadsheets/sheet-abc/values/Sheet1?key=k-123"
    );
}

#[test]
fn write_range_is_kept_as_a_single_path_segment() {
    let url = client(None)
        .values_url("sheet-abc", DEFAULT_WRITE_RANGE)
        .expect("url");
    assert_eq!(
        url.path(),
        "/v4/spreadsheets/sheet-abc/values/Sheet1!A2:G"
    );
    assert!(url.query().is_none());
}

#[test]
fn bearer_credential_stays_out_of_the_url() {
    let url = client(Some(SheetsCredential::BearerToken("tok".into())))
        .values_url("s", DEFAULT_READ_RANGE)
        .expect("url");
    assert!(url.query().is_none());
}

#[test]
fn base_url_with_trailing_slash_does_not_double_up() {
    let client = SheetsClient::new(SheetsConfig {
        base_url: "http://127.0.0.1:9000/".into(),
        ..SheetsConfig::default()
    });
    let url = client.values_url("s", "Sheet1").expect("url");
    assert_eq!(url.as_str(), "http://127.0.0.1:9000/v4/spreadsheets/s/values/Sheet1");
}

#[test]
fn unusable_base_url_is_rejected() {
    let client = SheetsClient::new(SheetsConfig {
        base_url: "not a url".into(),
        ..SheetsConfig::default()
    });
    assert!(matches!(
        client.values_url("s", "Sheet1"),
        Err(SheetsError::InvalidBaseUrl(_))
    ));
}

#[test]
fn header_row_is_dropped_and_cells_map_by_position() {
    let rows = vec![
        vec![json!("ID"), json!("Date Added"), json!("Owner")],
        vec![
            json!("f12345"),
            json!("2024-07-01"),
            json!("123456"),
            json!("654321, 234567"),
            json!("A1"),
            json!("X100"),
            json!("None"),
        ],
    ];
    let records = rows::records_from_rows(&rows);
    assert_eq!(records, vec![placeholder_records().remove(0)]);
}

#[test]
fn short_rows_fill_missing_cells_with_empty_text() {
    let record = rows::record_from_row(&[json!("f00001"), json!("2024-01-01"), json!("111111")]);
    assert_eq!(record.owner, "111111");
    assert!(record.co_owners.is_empty());
    assert_eq!(record.series, "");
    assert_eq!(record.broken_parts, "");
}

#[test]
fn numeric_cells_are_rendered_as_text() {
    let record = rows::record_from_row(&[json!("f00001"), json!("2024-01-01"), json!(123456)]);
    assert_eq!(record.owner, "123456");
}

#[test]
fn co_owner_cell_splits_on_commas_and_trims() {
    let record = rows::record_from_row(&[
        json!("f00001"),
        json!(""),
        json!("111111"),
        json!("222222,333333 , 444444"),
    ]);
    assert_eq!(record.co_owners, vec!["222222", "333333", "444444"]);
}

#[test]
fn record_row_joins_co_owners_with_comma_space() {
    let row = rows::row_from_record(&placeholder_records()[0]);
    assert_eq!(row.len(), rows::COLUMN_COUNT);
    assert_eq!(row[3], "654321, 234567");
}

#[tokio::test]
async fn memory_store_reads_back_what_was_seeded() {
    let store = MemoryStore::with_records("s", &placeholder_records()).await;
    assert_eq!(store.fetch_records("s").await, placeholder_records());
    assert!(store.fetch_records("missing").await.is_empty());
}

#[tokio::test]
async fn memory_store_overwrites_from_row_two_and_keeps_tail_rows() {
    let store = MemoryStore::with_records("s", &placeholder_records()).await;
    let replacement = vec![placeholder_records().remove(2)];

    let summary = store
        .update_records("s", &replacement)
        .await
        .expect("update");
    assert_eq!(summary.updated_rows, 1);
    assert_eq!(summary.updated_range.as_deref(), Some("Sheet1!A2:G2"));

    let records = store.fetch_records("s").await;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "f34567");
    assert_eq!(records[1].id, "f67890");

    let raw = store.raw_rows("s").await.expect("rows");
    assert_eq!(raw[0], rows::header_row());
}

#[test]
fn header_row_follows_table_columns() {
    let header = rows::header_row();
    assert_eq!(header.len(), rows::COLUMN_COUNT);
    assert_eq!(header[0], "ID");
    assert_eq!(header[3], "Co-owners");
    assert_eq!(header[6], "Broken Parts");
}

#[tokio::test]
async fn memory_store_can_be_told_to_fail_updates() {
    let store = MemoryStore::new();
    store.set_fail_updates(true);
    let err = store
        .update_records("s", &placeholder_records())
        .await
        .expect_err("should fail");
    assert!(matches!(err, SheetsError::Unavailable(_)));
}
