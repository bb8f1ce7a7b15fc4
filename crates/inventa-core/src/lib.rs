//! Core types and the state-management engine for the Inventa school asset
//! inventory.
//!
//! This crate is deliberately free of I/O and presentation dependencies.
//! All other crates depend on it; storage backends plug in through
//! [`store::SnapshotStore`].

pub mod asset;
pub mod auth;
pub mod error;
pub mod query;
pub mod repository;
pub mod store;

pub use error::{Error, Result};
