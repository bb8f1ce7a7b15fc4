//! The compact payload encoded into each record's QR code.

use inventa_core::asset::Asset;
use serde::{Deserialize, Serialize};

/// Exactly the three fields an external QR renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
  pub id:   i64,
  pub code: String,
  pub name: String,
}

impl From<&Asset> for QrPayload {
  fn from(asset: &Asset) -> Self {
    Self {
      id:   asset.id,
      code: asset.code.clone(),
      name: asset.name.clone(),
    }
  }
}

impl QrPayload {
  /// Compact JSON, the wire form handed to the renderer.
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}
