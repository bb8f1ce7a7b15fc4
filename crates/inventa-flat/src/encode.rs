//! CSV encoding and decoding of flat rows.
//!
//! Import is lenient about shape: headers are matched case-insensitively
//! against the canonical names and their legacy aliases, unknown columns
//! are ignored, and missing cells fall back to empty/zero. No name or
//! quantity validation is applied — bulk import installs the file as-is.
//! The one thing import refuses is a condition label outside the
//! enumeration.

use inventa_core::asset::{Condition, ImportedAsset};

use crate::{
  error::{Error, Result},
  row::{COLUMNS, FlatRow},
};

/// Legacy header spellings accepted on import, positionally matching
/// [`COLUMNS`].
const HEADER_ALIASES: [&str; 8] = [
  "kode",
  "nama",
  "jumlah",
  "kondisi",
  "lokasi",
  "kategori",
  "asal",
  "tahun",
];

const COL_CODE: usize = 0;
const COL_NAME: usize = 1;
const COL_QUANTITY: usize = 2;
const COL_CONDITION: usize = 3;
const COL_LOCATION: usize = 4;
const COL_CATEGORY: usize = 5;
const COL_ORIGIN: usize = 6;
const COL_YEAR: usize = 7;

// ─── Encode ──────────────────────────────────────────────────────────────────

/// Encode `rows` as a CSV document: the canonical header followed by one
/// line per row.
pub fn write_csv(rows: &[FlatRow]) -> Result<Vec<u8>> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(COLUMNS)?;
  for row in rows {
    writer.write_record(row.cells())?;
  }
  writer
    .into_inner()
    .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))
}

// ─── Decode ──────────────────────────────────────────────────────────────────

/// Decode an import file into record drafts.
///
/// An optional `id` column is honoured when present; rows without one are
/// assigned fresh ids by the repository on install.
pub fn read_csv(data: &[u8]) -> Result<Vec<ImportedAsset>> {
  let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
  let index = HeaderIndex::new(reader.headers()?);

  let mut records = Vec::new();
  for record in reader.records() {
    records.push(parse_record(&index, &record?)?);
  }
  Ok(records)
}

/// Position of each recognized column in the import file's header.
struct HeaderIndex {
  by_column: [Option<usize>; 8],
  id:        Option<usize>,
}

impl HeaderIndex {
  fn new(headers: &csv::StringRecord) -> Self {
    let mut by_column = [None; 8];
    let mut id = None;

    for (pos, raw) in headers.iter().enumerate() {
      let header = raw.trim().to_lowercase();
      if header == "id" {
        id = Some(pos);
        continue;
      }
      for (column, canonical) in COLUMNS.iter().enumerate() {
        if header == *canonical || header == HEADER_ALIASES[column] {
          by_column[column] = Some(pos);
        }
      }
    }

    Self { by_column, id }
  }

  fn cell<'r>(&self, record: &'r csv::StringRecord, column: usize) -> &'r str {
    self.by_column[column]
      .and_then(|pos| record.get(pos))
      .unwrap_or("")
      .trim()
  }
}

fn parse_record(
  index: &HeaderIndex,
  record: &csv::StringRecord,
) -> Result<ImportedAsset> {
  let quantity_raw = index.cell(record, COL_QUANTITY);
  let quantity = if quantity_raw.is_empty() {
    0
  } else {
    quantity_raw.parse().map_err(|_| Error::InvalidNumber {
      column: "quantity",
      value:  quantity_raw.to_owned(),
    })?
  };

  let condition_raw = index.cell(record, COL_CONDITION);
  let condition = if condition_raw.is_empty() {
    Condition::default()
  } else {
    Condition::parse_label(condition_raw)
      .ok_or_else(|| Error::UnknownCondition(condition_raw.to_owned()))?
  };

  let id = match index.id.and_then(|pos| record.get(pos)).map(str::trim) {
    Some(raw) if !raw.is_empty() => {
      Some(raw.parse().map_err(|_| Error::InvalidNumber {
        column: "id",
        value:  raw.to_owned(),
      })?)
    }
    _ => None,
  };

  Ok(ImportedAsset {
    id,
    code: index.cell(record, COL_CODE).to_owned(),
    name: index.cell(record, COL_NAME).to_owned(),
    quantity,
    condition,
    location: index.cell(record, COL_LOCATION).to_owned(),
    category: index.cell(record, COL_CATEGORY).to_owned(),
    origin: index.cell(record, COL_ORIGIN).to_owned(),
    year: index.cell(record, COL_YEAR).to_owned(),
  })
}
