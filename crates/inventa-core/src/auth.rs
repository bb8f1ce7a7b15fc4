//! Roles, the fixed credential table, and the access matrix.
//!
//! There are exactly three accounts and no registration flow. Every gated
//! operation funnels through [`authorize`]; nothing else decides access.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  store::{Mutation, SnapshotStore},
};

// ─── Roles and actions ───────────────────────────────────────────────────────

/// The identity a logged-in user acts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  Operator,
  Supervisor,
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Admin => "admin",
      Self::Operator => "operator",
      Self::Supervisor => "supervisor",
    })
  }
}

/// An operation gated by the access matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  View,
  CreateUpdate,
  Delete,
  Export,
  Import,
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::View => "view records",
      Self::CreateUpdate => "create or update records",
      Self::Delete => "delete records",
      Self::Export => "export records",
      Self::Import => "import records",
    })
  }
}

// ─── Credentials ─────────────────────────────────────────────────────────────

/// The fixed credential table. Login succeeds only on an exact match.
const CREDENTIALS: [(&str, &str, Role); 3] = [
  ("admin", "admin", Role::Admin),
  ("operator", "operator", Role::Operator),
  ("supervisor", "supervisor", Role::Supervisor),
];

/// Look a username/password pair up in the credential table.
pub fn check_credentials(username: &str, password: &str) -> Result<Role> {
  CREDENTIALS
    .iter()
    .find(|(u, p, _)| *u == username && *p == password)
    .map(|(_, _, role)| *role)
    .ok_or(Error::InvalidCredentials)
}

/// The access matrix.
///
/// | Action        | admin | operator | supervisor |
/// |---------------|-------|----------|------------|
/// | view          | yes   | yes      | yes        |
/// | create/update | yes   | yes      | no         |
/// | delete        | yes   | no       | no         |
/// | export        | yes   | yes      | yes        |
/// | import        | yes   | yes      | yes        |
pub fn authorize(action: Action, role: Role) -> bool {
  match action {
    Action::View | Action::Export | Action::Import => true,
    Action::CreateUpdate => matches!(role, Role::Admin | Role::Operator),
    Action::Delete => matches!(role, Role::Admin),
  }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// The process-wide active session. At most one role is active at a time;
/// the role is mirrored to the store so a restart resumes it.
#[derive(Debug, Default)]
pub struct Session {
  role: Option<Role>,
}

impl Session {
  /// Rebuild the session from the persisted role blob, if any.
  pub fn resume<S: SnapshotStore>(store: &S) -> Result<Self, S::Error> {
    Ok(Self { role: store.load_session()? })
  }

  /// Validate credentials and activate (and persist) the matched role.
  /// The session blob write is best-effort, like every other persist.
  pub fn login<S: SnapshotStore>(
    &mut self,
    store: &S,
    username: &str,
    password: &str,
  ) -> Result<Mutation<Role>> {
    let role = check_credentials(username, password)?;
    self.role = Some(role);
    Ok(Mutation::new(role, store.save_session(role)))
  }

  /// Clear the active session unconditionally.
  pub fn logout<S: SnapshotStore>(&mut self, store: &S) -> Mutation<()> {
    self.role = None;
    Mutation::new((), store.clear_session())
  }

  pub fn current_role(&self) -> Option<Role> { self.role }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::MemoryStore;

  #[test]
  fn login_with_known_credentials() {
    let store = MemoryStore::default();
    let mut session = Session::default();

    let outcome = session.login(&store, "operator", "operator").unwrap();
    assert_eq!(outcome.value, Role::Operator);
    assert!(outcome.persist_error.is_none());
    assert_eq!(session.current_role(), Some(Role::Operator));
  }

  #[test]
  fn login_with_unknown_credentials_fails() {
    let store = MemoryStore::default();
    let mut session = Session::default();

    let err = session.login(&store, "admin", "wrong").unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));
    assert_eq!(session.current_role(), None);
  }

  #[test]
  fn session_resumes_after_restart() {
    let store = MemoryStore::default();
    let mut session = Session::default();
    session.login(&store, "admin", "admin").unwrap();

    let resumed = Session::resume(&store).unwrap();
    assert_eq!(resumed.current_role(), Some(Role::Admin));
  }

  #[test]
  fn logout_clears_persisted_session() {
    let store = MemoryStore::default();
    let mut session = Session::default();
    session.login(&store, "admin", "admin").unwrap();

    let _ = session.logout(&store);
    assert_eq!(session.current_role(), None);
    assert_eq!(Session::resume(&store).unwrap().current_role(), None);
  }

  #[test]
  fn access_matrix() {
    use Action::*;
    use Role::*;

    for role in [Admin, Operator, Supervisor] {
      assert!(authorize(View, role));
      assert!(authorize(Export, role));
      assert!(authorize(Import, role));
    }

    assert!(authorize(CreateUpdate, Admin));
    assert!(authorize(CreateUpdate, Operator));
    assert!(!authorize(CreateUpdate, Supervisor));

    assert!(authorize(Delete, Admin));
    assert!(!authorize(Delete, Operator));
    assert!(!authorize(Delete, Supervisor));
  }
}
