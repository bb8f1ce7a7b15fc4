//! The `SnapshotStore` trait and an in-memory implementation.
//!
//! The trait is implemented by storage backends (`inventa-store-json` for
//! the on-disk store). The repository and session depend on this
//! abstraction, not on any concrete backend. All methods are synchronous:
//! the engine is single-threaded and every mutation runs to completion
//! before the next one is accepted.

use std::cell::RefCell;
use std::convert::Infallible;

use crate::{asset::Asset, auth::Role};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the persisted state: one opaque blob for the asset
/// collection, one for the active session's role.
///
/// Snapshots are whole-state — `save_assets` always receives the full
/// collection and replaces whatever was stored before.
pub trait SnapshotStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the last asset snapshot. `None` if nothing has been stored yet.
  fn load_assets(&self) -> Result<Option<Vec<Asset>>, Self::Error>;

  /// Replace the stored snapshot with `assets`.
  fn save_assets(&self, assets: &[Asset]) -> Result<(), Self::Error>;

  /// Read the persisted session role. `None` if no session is stored.
  fn load_session(&self) -> Result<Option<Role>, Self::Error>;

  fn save_session(&self, role: Role) -> Result<(), Self::Error>;

  fn clear_session(&self) -> Result<(), Self::Error>;
}

// ─── Mutation outcome ────────────────────────────────────────────────────────

/// A boxed store error carried out of a successful mutation.
pub type PersistError = Box<dyn std::error::Error + Send + Sync>;

/// The outcome of a successful state mutation.
///
/// In-memory state is always updated first; the snapshot write that follows
/// is best-effort. When the write fails, the failure rides along here
/// instead of rolling the mutation back, so the caller can surface it as a
/// warning.
#[derive(Debug)]
pub struct Mutation<T> {
  pub value:         T,
  pub persist_error: Option<PersistError>,
}

impl<T> Mutation<T> {
  /// Pair a mutated value with the outcome of its snapshot write.
  pub fn new<E>(value: T, persisted: Result<(), E>) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self {
      value,
      persist_error: persisted.err().map(|e| Box::new(e) as PersistError),
    }
  }
}

// ─── In-memory store ─────────────────────────────────────────────────────────

/// A store that keeps everything in process memory — the ephemeral
/// counterpart of the on-disk backend, and the default store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
  assets:  RefCell<Option<Vec<Asset>>>,
  session: RefCell<Option<Role>>,
}

impl SnapshotStore for MemoryStore {
  type Error = Infallible;

  fn load_assets(&self) -> Result<Option<Vec<Asset>>, Infallible> {
    Ok(self.assets.borrow().clone())
  }

  fn save_assets(&self, assets: &[Asset]) -> Result<(), Infallible> {
    *self.assets.borrow_mut() = Some(assets.to_vec());
    Ok(())
  }

  fn load_session(&self) -> Result<Option<Role>, Infallible> {
    Ok(*self.session.borrow())
  }

  fn save_session(&self, role: Role) -> Result<(), Infallible> {
    *self.session.borrow_mut() = Some(role);
    Ok(())
  }

  fn clear_session(&self) -> Result<(), Infallible> {
    *self.session.borrow_mut() = None;
    Ok(())
  }
}
