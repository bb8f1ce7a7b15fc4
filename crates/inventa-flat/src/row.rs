//! The flat 8-column record shape shared by import, export, and the report
//! generators.

use inventa_core::asset::{Asset, Condition};

use crate::error::{Error, Result};

/// Column labels, in the fixed export order.
pub const COLUMNS: [&str; 8] = [
  "code",
  "name",
  "quantity",
  "condition",
  "location",
  "category",
  "origin",
  "year",
];

/// One exportable row: the eight canonical fields, nothing else. The
/// internal `id` and the presentation-only photo never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
  pub code:      String,
  pub name:      String,
  pub quantity:  i64,
  pub condition: Condition,
  pub location:  String,
  pub category:  String,
  pub origin:    String,
  pub year:      String,
}

impl From<&Asset> for FlatRow {
  fn from(asset: &Asset) -> Self {
    Self {
      code:      asset.code.clone(),
      name:      asset.name.clone(),
      quantity:  asset.quantity,
      condition: asset.condition,
      location:  asset.location.clone(),
      category:  asset.category.clone(),
      origin:    asset.origin.clone(),
      year:      asset.year.clone(),
    }
  }
}

impl FlatRow {
  /// Cell values in column order, for tabular encoders.
  pub fn cells(&self) -> [String; 8] {
    [
      self.code.clone(),
      self.name.clone(),
      self.quantity.to_string(),
      self.condition.label().to_owned(),
      self.location.clone(),
      self.category.clone(),
      self.origin.clone(),
      self.year.clone(),
    ]
  }
}

/// Flatten `assets` for export. Refuses to produce an empty report.
pub fn export_flat(assets: &[Asset]) -> Result<Vec<FlatRow>> {
  if assets.is_empty() {
    return Err(Error::EmptyExport);
  }
  Ok(assets.iter().map(FlatRow::from).collect())
}
