use inventory_manager::{export_csv, InventoryController, JsonFileStore, NewProduct};
use tempfile::tempdir;

fn sample_controller(dir: &std::path::Path) -> InventoryController {
    let mut controller =
        InventoryController::new(Box::new(JsonFileStore::new(dir.join("inventory.json"))));
    controller
        .add(
            NewProduct::new("Widget", 10, "2.50")
                .with_category("Parts")
                .with_description("Blue, round")
                .with_min_stock(2)
                .with_max_stock(20),
        )
        .unwrap();
    controller.add(NewProduct::new("Anvil", 0, "bad")).unwrap();
    controller
}

// Tests for export_csv

#[test]
fn test_export_csv_writes_header_and_rows() {
    let dir = tempdir().unwrap();
    let controller = sample_controller(dir.path());
    let path = dir.path().join("export.csv");

    let rows = export_csv(&path, controller.get_all().values()).unwrap();
    assert_eq!(rows, 2);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "name");
    assert_eq!(&headers[1], "sku");
    assert_eq!(&headers[8], "status");

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);

    // Name order: Anvil, Widget
    assert_eq!(&records[0][0], "Anvil");
    assert_eq!(&records[0][4], "bad");
    assert_eq!(&records[0][5], "0.00");
    assert_eq!(&records[0][8], "Out of Stock");

    assert_eq!(&records[1][0], "Widget");
    assert_eq!(&records[1][2], "Parts");
    assert_eq!(&records[1][3], "10");
    assert_eq!(&records[1][5], "25.00");
    assert_eq!(&records[1][7], "20");
    assert_eq!(&records[1][9], "Blue, round");
}

#[test]
fn test_export_csv_empty_selection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("export.csv");

    let rows = export_csv(&path, std::iter::empty()).unwrap();
    assert_eq!(rows, 0);
    assert!(path.exists());
}

#[test]
fn test_export_csv_bad_path_fails() {
    let dir = tempdir().unwrap();
    let controller = sample_controller(dir.path());
    let path = dir.path().join("missing").join("export.csv");

    assert!(export_csv(&path, controller.get_all().values()).is_err());
}
