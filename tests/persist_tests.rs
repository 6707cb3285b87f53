// CSV persistence tests
// Header, quoting, multi-line fields, and tolerance of bad rows.

use std::fs;

use inventory_store::Record;
use inventory_store::persist::{self, CsvReader, HEADER, SyncMode};
use tempfile::TempDir;

fn sample() -> Vec<Record> {
    vec![
        Record::new(1, "Hammer", "Tools", 5, 9.99, "Acme"),
        Record::new(2, "Desk, standing", "Furniture", 1, 249.5, "Bob's \"Best\" Desks"),
        Record::new(3, "Label\nprinter", "Office", 0, 0.0, "Acme"),
    ]
}

// =============================================================================
// Test 1: Missing file loads as empty
// =============================================================================
#[test]
fn missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let records = persist::load(&dir.path().join("absent.csv")).unwrap();
    assert!(records.is_empty());
}

// =============================================================================
// Test 2: Saved file starts with the header and has one row per record
// =============================================================================
#[test]
fn saved_file_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("inventory.csv");
    let written = persist::save(&path, &sample()[..1], SyncMode::Flush).unwrap();
    assert_eq!(written, 1);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, format!("{HEADER}\n1,Hammer,Tools,5,9.99,Acme\n"));
}

// =============================================================================
// Test 3: Commas, quotes and newlines are quoted and read back intact
// =============================================================================
#[test]
fn special_characters_survive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    let records = sample();
    persist::save(&path, &records, SyncMode::Fsync).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"Desk, standing\""));
    assert!(text.contains("\"Bob's \"\"Best\"\" Desks\""));

    let loaded = persist::load(&path).unwrap();
    let loaded: Vec<Record> = loaded.into_iter().collect();
    assert_eq!(loaded, records);
}

// =============================================================================
// Test 4: Malformed rows are skipped, the rest still loads
// =============================================================================
#[test]
fn malformed_rows_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    fs::write(
        &path,
        "itemId,name,category,quantity,price,supplier\n\
         1,Hammer,Tools,5,9.99,Acme\n\
         two,Saw,Tools,2,19.50,Acme\n\
         3,Drill,Tools\n\
         4,Glue,Office,-1,2.00,Acme\n\
         5,Tape,Office,3,abc,Acme\n\
         0,Zero,Office,1,1.00,Acme\n\
         7,,Tools,5,2.50,Acme\n\
         8,Level,Tools,1,4.00,\"  \"\n\
         9,Gauge,Tools,1,NaN,Acme\n\
         \n\
         6,Desk,Furniture,1,150.00,Acme\n",
    )
    .unwrap();

    let ids: Vec<u32> = persist::load(&path)
        .unwrap()
        .into_iter()
        .map(|record| record.id)
        .collect();
    assert_eq!(ids, [1, 6]);
}

// =============================================================================
// Test 5: Unquoted fields are trimmed, quoted fields are kept verbatim
// =============================================================================
#[test]
fn trimming_rules() {
    let reader = CsvReader::new(" 7 , Hammer ,Tools, 5 ,9.99,\"  Acme  \"\r\n".to_string());
    let rows: Vec<_> = reader.records().collect();
    assert_eq!(rows.len(), 1);
    let (line, record) = &rows[0];
    assert_eq!(*line, 1);
    let record = record.as_ref().unwrap();
    assert_eq!(record.id, 7);
    assert_eq!(record.name, "Hammer");
    assert_eq!(record.supplier, "  Acme  ");
}

// =============================================================================
// Test 6: A file without a header still loads
// =============================================================================
#[test]
fn header_is_optional() {
    let reader = CsvReader::new("1,Hammer,Tools,5,9.99,Acme\n".to_string());
    let records: Vec<_> = reader.records().map(|(_, r)| r.unwrap()).collect();
    assert_eq!(records[0].name, "Hammer");
}

// =============================================================================
// Test 7: Multi-line field keeps line numbers of later rows right
// =============================================================================
#[test]
fn line_numbers_track_multiline_fields() {
    let data = format!("{HEADER}\n1,\"two\nlines\",Tools,1,1.0,Acme\nbad row\n");
    let reader = CsvReader::new(data);
    let rows: Vec<_> = reader.records().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, 2);
    assert_eq!(rows[0].1.as_ref().unwrap().name, "two\nlines");
    assert_eq!(rows[1].0, 4);
    assert!(rows[1].1.is_err());
}

// =============================================================================
// Test 8: An unterminated quote is a corrupt row, not a panic
// =============================================================================
#[test]
fn unterminated_quote() {
    let reader = CsvReader::new("1,\"Hammer,Tools,5,9.99,Acme\n".to_string());
    let rows: Vec<_> = reader.records().collect();
    assert_eq!(rows.len(), 1);
    assert!(matches!(
        rows[0].1,
        Err(inventory_store::Error::Corruption(_))
    ));
}

// =============================================================================
// Test 9: Saving over an existing file replaces it entirely
// =============================================================================
#[test]
fn save_truncates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.csv");
    persist::save(&path, &sample(), SyncMode::Flush).unwrap();
    persist::save(&path, &sample()[..1], SyncMode::Flush).unwrap();
    assert_eq!(persist::load(&path).unwrap().len(), 1);
}

// =============================================================================
// Test 10: A row with a blank text field is corrupt, not a half-valid record
// =============================================================================
#[test]
fn blank_text_field_is_corruption() {
    let reader = CsvReader::new("1,,Tools,5,2.5,Acme\n".to_string());
    let rows: Vec<_> = reader.records().collect();
    assert_eq!(rows.len(), 1);
    match &rows[0].1 {
        Err(inventory_store::Error::Corruption(reason)) => {
            assert!(reason.contains("name"), "reason: {reason}")
        }
        other => panic!("expected corruption, got {other:?}"),
    }
}
