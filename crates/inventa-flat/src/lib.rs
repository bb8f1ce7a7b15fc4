//! Transfer codec for the Inventa inventory.
//!
//! Converts between [`inventa_core`] records and the flat 8-column shape
//! shared by import, export, and the report generators. Pure synchronous;
//! no storage or presentation dependencies.

mod encode;
mod qr;
mod report;
mod row;

pub mod error;

pub use encode::{read_csv, write_csv};
pub use error::{Error, Result};
pub use qr::QrPayload;
pub use report::{REPORT_TITLE, render_report};
pub use row::{COLUMNS, FlatRow, export_flat};

#[cfg(test)]
mod tests;
