//! The asset repository — owner of the canonical record list.
//!
//! Every successful mutation updates the in-memory list and then writes the
//! full snapshot through the configured [`SnapshotStore`]. The write is
//! best-effort: a failure never rolls the mutation back, it is carried to
//! the caller inside [`Mutation`].

use chrono::Utc;

use crate::{
  asset::{Asset, AssetDraft, ImportedAsset},
  auth::{Action, Role, authorize},
  error::{Error, Result},
  store::{Mutation, SnapshotStore},
};

/// The canonical, ordered collection of asset records.
pub struct Repository<S: SnapshotStore> {
  assets: Vec<Asset>,
  store:  S,
}

impl<S: SnapshotStore> Repository<S> {
  /// Load the last snapshot from `store`, or start empty if none exists.
  pub fn open(store: S) -> Result<Self, S::Error> {
    let assets = store.load_assets()?.unwrap_or_default();
    Ok(Self { assets, store })
  }

  /// All records in insertion order — the canonical ordering every
  /// downstream view derives from.
  pub fn assets(&self) -> &[Asset] { &self.assets }

  pub fn len(&self) -> usize { self.assets.len() }

  pub fn is_empty(&self) -> bool { self.assets.is_empty() }

  pub fn get(&self, id: i64) -> Option<&Asset> {
    self.assets.iter().find(|a| a.id == id)
  }

  // ── Mutations ───────────────────────────────────────────────────────────

  /// Validate `draft` and append it under a fresh unique id.
  pub fn create(
    &mut self,
    draft: AssetDraft,
    requester: Role,
  ) -> Result<Mutation<Asset>> {
    self.check(Action::CreateUpdate, requester)?;
    validate(&draft)?;

    let asset = draft.into_asset(self.next_id());
    self.assets.push(asset.clone());
    Ok(Mutation::new(asset, self.persist()))
  }

  /// Validate `draft` and replace the record with `id` in place. Position
  /// and id are preserved.
  pub fn update(
    &mut self,
    id: i64,
    draft: AssetDraft,
    requester: Role,
  ) -> Result<Mutation<Asset>> {
    self.check(Action::CreateUpdate, requester)?;
    validate(&draft)?;

    let slot = self
      .assets
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or(Error::NotFound(id))?;
    *slot = draft.into_asset(id);
    let asset = slot.clone();
    Ok(Mutation::new(asset, self.persist()))
  }

  /// Remove the record with `id`. Admin only. The caller is expected to
  /// have obtained the user's confirmation already.
  pub fn delete(&mut self, id: i64, requester: Role) -> Result<Mutation<()>> {
    self.check(Action::Delete, requester)?;

    let idx = self
      .assets
      .iter()
      .position(|a| a.id == id)
      .ok_or(Error::NotFound(id))?;
    self.assets.remove(idx);
    Ok(Mutation::new((), self.persist()))
  }

  /// Replace the whole collection with an imported set.
  ///
  /// Records keep their id when the source carried one; the rest get fresh
  /// ids. Per-record name/quantity validation is deliberately not applied:
  /// bulk import installs the source file verbatim.
  pub fn replace_all(&mut self, records: Vec<ImportedAsset>) -> Mutation<usize> {
    let given_max = records.iter().filter_map(|r| r.id).max().unwrap_or(0);
    let mut next = Utc::now().timestamp_millis().max(given_max + 1);

    self.assets = records
      .into_iter()
      .map(|record| {
        let id = record.id.unwrap_or_else(|| {
          let id = next;
          next += 1;
          id
        });
        record.into_asset(id)
      })
      .collect();

    Mutation::new(self.assets.len(), self.persist())
  }

  // ── Internals ───────────────────────────────────────────────────────────

  /// Fresh unique id: wall-clock millis, bumped past the current maximum so
  /// bursts within one millisecond (and imported future-dated ids) cannot
  /// collide.
  fn next_id(&self) -> i64 {
    let max = self.assets.iter().map(|a| a.id).max().unwrap_or(0);
    Utc::now().timestamp_millis().max(max + 1)
  }

  fn check(&self, action: Action, role: Role) -> Result<()> {
    if authorize(action, role) {
      Ok(())
    } else {
      Err(Error::Unauthorized { role, action })
    }
  }

  fn persist(&self) -> Result<(), S::Error> {
    self.store.save_assets(&self.assets)
  }
}

fn validate(draft: &AssetDraft) -> Result<()> {
  if draft.name.trim().is_empty() {
    return Err(Error::EmptyName);
  }
  if draft.quantity == 0 {
    return Err(Error::ZeroQuantity);
  }
  Ok(())
}
