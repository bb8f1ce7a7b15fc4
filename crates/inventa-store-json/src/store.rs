//! [`JsonStore`] — the on-disk implementation of [`SnapshotStore`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use inventa_core::{asset::Asset, auth::Role, store::SnapshotStore};

use crate::error::{Error, Result};

const ASSETS_FILE: &str = "assets.json";
const SESSION_FILE: &str = "session.json";

/// A snapshot store backed by two JSON files in a single data directory:
/// `assets.json` holds the full canonical collection, `session.json` the
/// active role. Both are read whole and written whole.
#[derive(Debug, Clone)]
pub struct JsonStore {
  assets_path:  PathBuf,
  session_path: PathBuf,
}

impl JsonStore {
  /// Open a store rooted at `dir`, creating the directory if needed.
  pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
      .map_err(|source| Error::Io { path: dir.to_path_buf(), source })?;
    Ok(Self {
      assets_path:  dir.join(ASSETS_FILE),
      session_path: dir.join(SESSION_FILE),
    })
  }

  fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let bytes = match fs::read(path) {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(source) => return Err(Error::Io { path: path.to_path_buf(), source }),
    };
    let value = serde_json::from_slice(&bytes)
      .map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
    Ok(Some(value))
  }

  fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)
      .map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
    fs::write(path, bytes)
      .map_err(|source| Error::Io { path: path.to_path_buf(), source })
  }
}

impl SnapshotStore for JsonStore {
  type Error = Error;

  fn load_assets(&self) -> Result<Option<Vec<Asset>>> {
    Self::read_json(&self.assets_path)
  }

  fn save_assets(&self, assets: &[Asset]) -> Result<()> {
    Self::write_json(&self.assets_path, &assets)
  }

  fn load_session(&self) -> Result<Option<Role>> {
    Self::read_json(&self.session_path)
  }

  fn save_session(&self, role: Role) -> Result<()> {
    Self::write_json(&self.session_path, &role)
  }

  fn clear_session(&self) -> Result<()> {
    match fs::remove_file(&self.session_path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(source) => {
        Err(Error::Io { path: self.session_path.clone(), source })
      }
    }
  }
}
