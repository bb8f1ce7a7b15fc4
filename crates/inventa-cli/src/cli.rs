//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use inventa_core::asset::Condition;

#[derive(Parser)]
#[command(name = "inventa", version, about = "School asset inventory")]
pub struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  pub config: PathBuf,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
  /// Authenticate and persist the session.
  Login {
    #[arg(short, long)]
    username: String,
    #[arg(short, long)]
    password: String,
  },

  /// Clear the active session.
  Logout,

  /// Show the active role.
  Whoami,

  /// Register a new asset record.
  Add(DraftArgs),

  /// Update an existing record in place.
  Update {
    id: i64,
    #[command(flatten)]
    draft: DraftArgs,
  },

  /// Delete a record (admin only).
  Delete {
    id: i64,
    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
  },

  /// List records, optionally filtered.
  List {
    /// Case-insensitive filter on name or category.
    #[arg(short, long)]
    search: Option<String>,
  },

  /// Print a grouped summary.
  Report {
    #[arg(value_enum)]
    kind: ReportKind,
  },

  /// Write a spreadsheet (CSV) or document report of the current records.
  Export {
    #[arg(value_enum)]
    format: ExportFormat,
    /// Apply the same filter as `list --search` before exporting.
    #[arg(short, long)]
    search: Option<String>,
    /// Output path; stdout when omitted.
    #[arg(short, long)]
    out: Option<PathBuf>,
  },

  /// Replace the whole collection with the contents of a CSV file.
  Import { file: PathBuf },

  /// Print the QR payload for one record.
  Qr { id: i64 },
}

#[derive(Args)]
pub struct DraftArgs {
  #[arg(long, default_value = "")]
  pub code: String,

  #[arg(long)]
  pub name: String,

  #[arg(long)]
  pub quantity: i64,

  #[arg(long, value_enum, default_value = "good")]
  pub condition: ConditionArg,

  #[arg(long, default_value = "")]
  pub location: String,

  #[arg(long, default_value = "")]
  pub category: String,

  /// Acquisition source.
  #[arg(long, default_value = "")]
  pub origin: String,

  #[arg(long, default_value = "")]
  pub year: String,

  /// Attach a photo reference (path or data URL). Display-only; never
  /// persisted or exported.
  #[arg(long)]
  pub photo: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConditionArg {
  Good,
  MinorDamage,
  MajorDamage,
}

impl From<ConditionArg> for Condition {
  fn from(arg: ConditionArg) -> Self {
    match arg {
      ConditionArg::Good => Self::Good,
      ConditionArg::MinorDamage => Self::MinorDamage,
      ConditionArg::MajorDamage => Self::MajorDamage,
    }
  }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportKind {
  Condition,
  Category,
  Location,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
  /// Spreadsheet body (CSV, canonical header).
  Csv,
  /// Rendered document report with title.
  Report,
}
