//! Error types for `inventa-core`.

use thiserror::Error;

use crate::auth::{Action, Role};

#[derive(Debug, Error)]
pub enum Error {
  #[error("asset name must not be empty")]
  EmptyName,

  #[error("asset quantity must not be zero")]
  ZeroQuantity,

  #[error("asset not found: {0}")]
  NotFound(i64),

  #[error("{role} is not permitted to {action}")]
  Unauthorized { role: Role, action: Action },

  #[error("invalid credentials")]
  InvalidCredentials,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
