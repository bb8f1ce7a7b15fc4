//! JSON-file backend for the Inventa snapshot store.
//!
//! The whole asset collection is one blob, read at startup and rewritten
//! after every mutation; the session role is a second, independent blob.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonStore;
