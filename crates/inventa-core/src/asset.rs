//! Asset record types — the unit of the inventory.
//!
//! One record per tracked physical item (furniture, lab equipment, …).
//! Records are mutated in place; the `id` is assigned once at creation and
//! never changes.

use serde::{Deserialize, Serialize};

// ─── Condition ───────────────────────────────────────────────────────────────

/// The enumerated physical state of an asset.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
  #[default]
  Good,
  MinorDamage,
  MajorDamage,
}

impl Condition {
  /// All conditions, in declared order. Summaries iterate this so every
  /// condition appears even when no record matches it.
  pub const ALL: [Condition; 3] =
    [Self::Good, Self::MinorDamage, Self::MajorDamage];

  /// The human-readable label used in exports and reports.
  pub fn label(self) -> &'static str {
    match self {
      Self::Good => "Good",
      Self::MinorDamage => "Minor damage",
      Self::MajorDamage => "Major damage",
    }
  }

  /// Parse a label as found in import files. Accepts the English labels and
  /// the legacy Indonesian ones, case-insensitively. Anything else is
  /// rejected so import can never introduce a value outside the enumeration.
  pub fn parse_label(s: &str) -> Option<Self> {
    match s.trim().to_lowercase().as_str() {
      "good" | "baik" => Some(Self::Good),
      "minor damage" | "rusak ringan" => Some(Self::MinorDamage),
      "major damage" | "rusak berat" => Some(Self::MajorDamage),
      _ => None,
    }
  }
}

impl std::fmt::Display for Condition {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Asset ───────────────────────────────────────────────────────────────────

/// One tracked physical item.
///
/// The eight user-facing fields plus the internal `id` form the canonical,
/// persisted shape. `photo` is presentation-only: it is skipped by serde and
/// therefore never reaches the snapshot or any export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
  pub id:        i64,
  /// User-supplied label; not required to be unique.
  pub code:      String,
  pub name:      String,
  pub quantity:  i64,
  pub condition: Condition,
  pub location:  String,
  pub category:  String,
  /// Acquisition source, free text.
  pub origin:    String,
  /// Free-form; not validated as a numeric year.
  pub year:      String,
  /// Opaque image payload reference (path or data URL).
  #[serde(skip)]
  pub photo:     Option<String>,
}

// ─── Drafts ──────────────────────────────────────────────────────────────────

/// Input to create/update. Validation happens in the repository, not here.
#[derive(Debug, Clone, Default)]
pub struct AssetDraft {
  pub code:      String,
  pub name:      String,
  pub quantity:  i64,
  pub condition: Condition,
  pub location:  String,
  pub category:  String,
  pub origin:    String,
  pub year:      String,
  pub photo:     Option<String>,
}

impl AssetDraft {
  pub(crate) fn into_asset(self, id: i64) -> Asset {
    Asset {
      id,
      code: self.code,
      name: self.name,
      quantity: self.quantity,
      condition: self.condition,
      location: self.location,
      category: self.category,
      origin: self.origin,
      year: self.year,
      photo: self.photo,
    }
  }
}

/// A record parsed from an external tabular source.
///
/// `id` is kept when the source carried one; otherwise the repository
/// assigns a fresh one on install. There is no photo: bulk import always
/// regenerates it as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedAsset {
  pub id:        Option<i64>,
  pub code:      String,
  pub name:      String,
  pub quantity:  i64,
  pub condition: Condition,
  pub location:  String,
  pub category:  String,
  pub origin:    String,
  pub year:      String,
}

impl ImportedAsset {
  pub(crate) fn into_asset(self, id: i64) -> Asset {
    Asset {
      id,
      code: self.code,
      name: self.name,
      quantity: self.quantity,
      condition: self.condition,
      location: self.location,
      category: self.category,
      origin: self.origin,
      year: self.year,
      photo: None,
    }
  }
}
