//! Pure views over the repository's current snapshot.
//!
//! Nothing here mutates state; every function recomputes from the full
//! record list it is handed. The record counts involved are small enough
//! that no incremental cache is kept.

use crate::asset::{Asset, Condition};

// ─── Summary rows ────────────────────────────────────────────────────────────

/// One row of the condition summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionCount {
  pub condition: Condition,
  pub count:     usize,
}

/// One row of a grouped quantity summary (by category or by location).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityTotal {
  pub key:            String,
  pub total_quantity: i64,
}

// ─── Search ──────────────────────────────────────────────────────────────────

/// Case-insensitive substring filter on `name` or `category`.
///
/// An empty term matches everything; ordering is preserved from the input.
pub fn search<'a>(assets: &'a [Asset], term: &str) -> Vec<&'a Asset> {
  let needle = term.to_lowercase();
  assets
    .iter()
    .filter(|a| {
      a.name.to_lowercase().contains(&needle)
        || a.category.to_lowercase().contains(&needle)
    })
    .collect()
}

// ─── Summaries ───────────────────────────────────────────────────────────────

/// Record counts per condition. Always exactly three entries, in declared
/// enum order, zero counts included.
pub fn summary_by_condition(assets: &[Asset]) -> Vec<ConditionCount> {
  Condition::ALL
    .into_iter()
    .map(|condition| ConditionCount {
      condition,
      count: assets.iter().filter(|a| a.condition == condition).count(),
    })
    .collect()
}

/// Total quantity per distinct non-empty category, in order of first
/// appearance.
pub fn summary_by_category(assets: &[Asset]) -> Vec<QuantityTotal> {
  group_quantities(assets, |a: &Asset| a.category.as_str())
}

/// Total quantity per distinct non-empty location, in order of first
/// appearance.
pub fn summary_by_location(assets: &[Asset]) -> Vec<QuantityTotal> {
  group_quantities(assets, |a: &Asset| a.location.as_str())
}

fn group_quantities(
  assets: &[Asset],
  key: impl Fn(&Asset) -> &str,
) -> Vec<QuantityTotal> {
  let mut groups: Vec<QuantityTotal> = Vec::new();
  for asset in assets {
    let k = key(asset);
    if k.is_empty() {
      continue;
    }
    match groups.iter_mut().find(|g| g.key == k) {
      Some(group) => group.total_quantity += asset.quantity,
      None => groups.push(QuantityTotal {
        key:            k.to_owned(),
        total_quantity: asset.quantity,
      }),
    }
  }
  groups
}

#[cfg(test)]
mod tests {
  use super::*;

  fn asset(
    name: &str,
    quantity: i64,
    condition: Condition,
    category: &str,
    location: &str,
  ) -> Asset {
    Asset {
      id: 0,
      code: String::new(),
      name: name.into(),
      quantity,
      condition,
      location: location.into(),
      category: category.into(),
      origin: String::new(),
      year: String::new(),
      photo: None,
    }
  }

  // ── Search ──────────────────────────────────────────────────────────────

  #[test]
  fn empty_term_returns_all_in_order() {
    let assets = vec![
      asset("Chair", 1, Condition::Good, "Furniture", ""),
      asset("Desk", 1, Condition::Good, "Furniture", ""),
    ];

    let hits = search(&assets, "");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].name, "Chair");
    assert_eq!(hits[1].name, "Desk");
  }

  #[test]
  fn search_matches_name_or_category_case_insensitively() {
    let assets = vec![
      asset("Chair", 1, Condition::Good, "Furniture", ""),
      asset("Microscope", 1, Condition::Good, "Lab", ""),
      asset("Bench", 1, Condition::Good, "lab furniture", ""),
    ];

    let hits = search(&assets, "LAB");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].name, "Microscope");

    let hits = search(&assets, "chair");
    assert_eq!(hits.len(), 1);
  }

  // ── Condition summary ───────────────────────────────────────────────────

  #[test]
  fn condition_summary_on_empty_repository() {
    let rows = summary_by_condition(&[]);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.count == 0));
    assert_eq!(rows[0].condition, Condition::Good);
    assert_eq!(rows[1].condition, Condition::MinorDamage);
    assert_eq!(rows[2].condition, Condition::MajorDamage);
  }

  #[test]
  fn condition_summary_counts_sum_to_total() {
    let assets = vec![
      asset("Chair", 30, Condition::Good, "Furniture", "Room A"),
      asset("Desk", 10, Condition::MinorDamage, "Furniture", "Room A"),
      asset("Board", 2, Condition::Good, "", ""),
    ];

    let rows = summary_by_condition(&assets);
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[1].count, 1);
    assert_eq!(rows[2].count, 0);
    assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), assets.len());
  }

  // ── Quantity summaries ──────────────────────────────────────────────────

  #[test]
  fn category_summary_groups_and_sums() {
    let assets = vec![
      asset("Chair", 10, Condition::Good, "Furniture", ""),
      asset("Desk", 5, Condition::Good, "Furniture", ""),
    ];

    let rows = summary_by_category(&assets);
    assert_eq!(
      rows,
      vec![QuantityTotal { key: "Furniture".into(), total_quantity: 15 }]
    );
  }

  #[test]
  fn category_summary_skips_empty_and_keeps_first_appearance_order() {
    let assets = vec![
      asset("Globe", 1, Condition::Good, "Teaching aids", ""),
      asset("Misc", 9, Condition::Good, "", ""),
      asset("Chair", 10, Condition::Good, "Furniture", ""),
      asset("Map", 3, Condition::Good, "Teaching aids", ""),
    ];

    let rows = summary_by_category(&assets);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "Teaching aids");
    assert_eq!(rows[0].total_quantity, 4);
    assert_eq!(rows[1].key, "Furniture");
  }

  #[test]
  fn category_grouping_is_case_sensitive() {
    let assets = vec![
      asset("Chair", 1, Condition::Good, "Furniture", ""),
      asset("Desk", 1, Condition::Good, "furniture", ""),
    ];

    assert_eq!(summary_by_category(&assets).len(), 2);
  }

  #[test]
  fn location_summary_groups_on_location() {
    let assets = vec![
      asset("Chair", 10, Condition::Good, "Furniture", "Room A"),
      asset("Desk", 5, Condition::Good, "Furniture", "Room B"),
      asset("Board", 1, Condition::Good, "Furniture", "Room A"),
    ];

    let rows = summary_by_location(&assets);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "Room A");
    assert_eq!(rows[0].total_quantity, 11);
    assert_eq!(rows[1].total_quantity, 5);
  }
}
