//! Plain-text document report: a title line and the 8-column table.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use crate::row::{COLUMNS, FlatRow};

/// Title printed above the table.
pub const REPORT_TITLE: &str = "Facilities & Infrastructure Report";

/// Render the document report for `rows`. Row order is preserved and the
/// columns match the spreadsheet export exactly.
pub fn render_report(rows: &[FlatRow]) -> String {
  let mut table = Table::new();
  table
    .load_preset(UTF8_FULL_CONDENSED)
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_header(COLUMNS.to_vec());
  for row in rows {
    table.add_row(row.cells().to_vec());
  }
  format!("{REPORT_TITLE}\n\n{table}\n")
}
