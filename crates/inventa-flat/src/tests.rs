//! Tests for the flat-row codec.

use inventa_core::asset::{Asset, Condition};

use crate::{
  Error, QrPayload, REPORT_TITLE, export_flat, read_csv, render_report,
  write_csv,
};

fn asset(id: i64, name: &str, quantity: i64, condition: Condition) -> Asset {
  Asset {
    id,
    code: format!("INV-{id:03}"),
    name: name.into(),
    quantity,
    condition,
    location: "Room A".into(),
    category: "Furniture".into(),
    origin: "Purchase".into(),
    year: "2020".into(),
    photo: Some("chair.png".into()),
  }
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[test]
fn export_refuses_empty_input() {
  assert!(matches!(export_flat(&[]), Err(Error::EmptyExport)));
}

#[test]
fn export_strips_id_and_photo() {
  let rows = export_flat(&[asset(1, "Chair", 30, Condition::Good)]).unwrap();
  assert_eq!(rows.len(), 1);

  let csv = write_csv(&rows).unwrap();
  let text = String::from_utf8(csv).unwrap();
  assert!(!text.contains("chair.png"));
  assert!(!text.to_lowercase().contains("id"));
  assert!(text.starts_with("code,name,quantity,condition,location,category,origin,year\n"));
  assert!(text.contains("INV-001,Chair,30,Good,Room A,Furniture,Purchase,2020"));
}

// ─── Import ──────────────────────────────────────────────────────────────────

#[test]
fn import_accepts_canonical_headers_case_insensitively() {
  let data = b"Code,NAME,Quantity,Condition,Location,Category,Origin,Year\n\
               B-1,Bench,4,Minor damage,Hall,Furniture,Grant,2019\n";

  let records = read_csv(data).unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].name, "Bench");
  assert_eq!(records[0].quantity, 4);
  assert_eq!(records[0].condition, Condition::MinorDamage);
  assert_eq!(records[0].id, None);
}

#[test]
fn import_accepts_legacy_headers_and_labels() {
  let data = b"kode,nama,jumlah,kondisi,lokasi,kategori,asal,tahun\n\
               K-1,Meja,7,Rusak Berat,Kelas 2,Mebel,Hibah,2018\n";

  let records = read_csv(data).unwrap();
  assert_eq!(records[0].code, "K-1");
  assert_eq!(records[0].quantity, 7);
  assert_eq!(records[0].condition, Condition::MajorDamage);
  assert_eq!(records[0].location, "Kelas 2");
}

#[test]
fn import_honours_an_id_column() {
  let data = b"id,name,quantity\n42,Globe,1\n,Map,2\n";

  let records = read_csv(data).unwrap();
  assert_eq!(records[0].id, Some(42));
  assert_eq!(records[1].id, None);
}

#[test]
fn import_defaults_missing_cells() {
  // No quantity or condition column at all; import stays permissive.
  let data = b"name\nChair\n";

  let records = read_csv(data).unwrap();
  assert_eq!(records[0].quantity, 0);
  assert_eq!(records[0].condition, Condition::Good);
  assert_eq!(records[0].code, "");
}

#[test]
fn import_rejects_unknown_condition_labels() {
  let data = b"name,condition\nChair,pristine\n";

  let err = read_csv(data).unwrap_err();
  assert!(matches!(err, Error::UnknownCondition(value) if value == "pristine"));
}

#[test]
fn import_rejects_garbage_quantities() {
  let data = b"name,quantity\nChair,many\n";

  let err = read_csv(data).unwrap_err();
  assert!(matches!(err, Error::InvalidNumber { column: "quantity", .. }));
}

// ─── Round trip ──────────────────────────────────────────────────────────────

#[test]
fn export_then_import_preserves_all_eight_fields_in_order() {
  let assets = vec![
    asset(1, "Chair", 30, Condition::Good),
    asset(2, "Desk", 12, Condition::MinorDamage),
    asset(3, "Cabinet", 2, Condition::MajorDamage),
  ];

  let rows = export_flat(&assets).unwrap();
  let bytes = write_csv(&rows).unwrap();
  let imported = read_csv(&bytes).unwrap();

  assert_eq!(imported.len(), assets.len());
  for (record, original) in imported.iter().zip(&assets) {
    assert_eq!(record.code, original.code);
    assert_eq!(record.name, original.name);
    assert_eq!(record.quantity, original.quantity);
    assert_eq!(record.condition, original.condition);
    assert_eq!(record.location, original.location);
    assert_eq!(record.category, original.category);
    assert_eq!(record.origin, original.origin);
    assert_eq!(record.year, original.year);
    // id and photo are not part of the flat shape.
    assert_eq!(record.id, None);
  }
}

// ─── Document report ─────────────────────────────────────────────────────────

#[test]
fn report_has_title_and_all_rows() {
  let rows = export_flat(&[
    asset(1, "Chair", 30, Condition::Good),
    asset(2, "Desk", 12, Condition::MinorDamage),
  ])
  .unwrap();

  let report = render_report(&rows);
  assert!(report.starts_with(REPORT_TITLE));
  assert!(report.contains("Chair"));
  assert!(report.contains("Desk"));
  assert!(report.contains("Minor damage"));
}

// ─── QR payload ──────────────────────────────────────────────────────────────

#[test]
fn qr_payload_is_compact_id_code_name() {
  let payload = QrPayload::from(&asset(5, "Chair", 30, Condition::Good));
  let json = payload.to_json().unwrap();
  assert_eq!(json, r#"{"id":5,"code":"INV-005","name":"Chair"}"#);
}
