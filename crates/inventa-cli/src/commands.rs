//! Command handlers. Every data command requires an active session; the
//! session's role is what the repository and the access matrix see.

use std::fs;
use std::io::{self, BufRead as _, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use inventa_core::{
  asset::{Asset, AssetDraft},
  auth::{Action, Role, Session, authorize},
  query,
  repository::Repository,
  store::Mutation,
};
use inventa_flat::QrPayload;
use inventa_store_json::JsonStore;

use crate::cli::{DraftArgs, ExportFormat, ReportKind};

type Repo = Repository<JsonStore>;

// ─── Session commands ────────────────────────────────────────────────────────

pub fn login(
  session: &mut Session,
  store: &JsonStore,
  username: &str,
  password: &str,
) -> anyhow::Result<()> {
  let outcome = session.login(store, username, password)?;
  warn_persist(&outcome);
  println!("logged in as {}", outcome.value);
  Ok(())
}

pub fn logout(session: &mut Session, store: &JsonStore) -> anyhow::Result<()> {
  let outcome = session.logout(store);
  warn_persist(&outcome);
  println!("logged out");
  Ok(())
}

pub fn whoami(session: &Session) -> anyhow::Result<()> {
  match session.current_role() {
    Some(role) => println!("{role}"),
    None => println!("not logged in"),
  }
  Ok(())
}

// ─── Record commands ─────────────────────────────────────────────────────────

pub fn add(
  repo: &mut Repo,
  session: &Session,
  args: DraftArgs,
) -> anyhow::Result<()> {
  let role = require_role(session)?;
  let created = repo.create(into_draft(args), role)?;
  warn_persist(&created);
  println!("created asset {} ({})", created.value.id, created.value.name);
  Ok(())
}

pub fn update(
  repo: &mut Repo,
  session: &Session,
  id: i64,
  args: DraftArgs,
) -> anyhow::Result<()> {
  let role = require_role(session)?;
  let updated = repo.update(id, into_draft(args), role)?;
  warn_persist(&updated);
  println!("updated asset {id}");
  Ok(())
}

pub fn delete(
  repo: &mut Repo,
  session: &Session,
  id: i64,
  yes: bool,
) -> anyhow::Result<()> {
  let role = require_role(session)?;
  if !yes && !confirm(&format!("Delete asset {id}? [y/N] "))? {
    println!("aborted");
    return Ok(());
  }
  let deleted = repo.delete(id, role)?;
  warn_persist(&deleted);
  println!("deleted asset {id}");
  Ok(())
}

pub fn list(
  repo: &Repo,
  session: &Session,
  search: Option<String>,
) -> anyhow::Result<()> {
  require_role(session)?;
  let term = search.unwrap_or_default();
  let hits = query::search(repo.assets(), &term);

  let mut table = new_table(vec![
    "id", "code", "name", "quantity", "condition", "location", "category",
    "origin", "year", "photo",
  ]);
  for asset in &hits {
    table.add_row(vec![
      asset.id.to_string(),
      asset.code.clone(),
      asset.name.clone(),
      asset.quantity.to_string(),
      asset.condition.to_string(),
      asset.location.clone(),
      asset.category.clone(),
      asset.origin.clone(),
      asset.year.clone(),
      if asset.photo.is_some() { "yes".into() } else { String::new() },
    ]);
  }
  println!("{table}");
  println!("{} of {} records", hits.len(), repo.len());
  Ok(())
}

pub fn report(
  repo: &Repo,
  session: &Session,
  kind: ReportKind,
) -> anyhow::Result<()> {
  require_role(session)?;

  let table = match kind {
    ReportKind::Condition => {
      let mut table = new_table(vec!["condition", "records"]);
      for row in query::summary_by_condition(repo.assets()) {
        table.add_row(vec![row.condition.to_string(), row.count.to_string()]);
      }
      table
    }
    ReportKind::Category => {
      let mut table = new_table(vec!["category", "total quantity"]);
      for row in query::summary_by_category(repo.assets()) {
        table.add_row(vec![row.key, row.total_quantity.to_string()]);
      }
      table
    }
    ReportKind::Location => {
      let mut table = new_table(vec!["location", "total quantity"]);
      for row in query::summary_by_location(repo.assets()) {
        table.add_row(vec![row.key, row.total_quantity.to_string()]);
      }
      table
    }
  };

  println!("{table}");
  Ok(())
}

// ─── Transfer commands ───────────────────────────────────────────────────────

pub fn export(
  repo: &Repo,
  session: &Session,
  format: ExportFormat,
  search: Option<String>,
  out: Option<PathBuf>,
) -> anyhow::Result<()> {
  let role = require_role(session)?;
  check(Action::Export, role)?;

  // Copy-on-read snapshot: the codec never sees the live collection.
  let term = search.unwrap_or_default();
  let filtered: Vec<Asset> = query::search(repo.assets(), &term)
    .into_iter()
    .cloned()
    .collect();

  let rows = inventa_flat::export_flat(&filtered)?;
  let bytes = match format {
    ExportFormat::Csv => inventa_flat::write_csv(&rows)?,
    ExportFormat::Report => inventa_flat::render_report(&rows).into_bytes(),
  };

  emit(&bytes, out.as_deref())
}

pub fn import(
  repo: &mut Repo,
  session: &Session,
  file: &Path,
) -> anyhow::Result<()> {
  let role = require_role(session)?;
  check(Action::Import, role)?;

  let data = fs::read(file)
    .with_context(|| format!("failed to read {}", file.display()))?;
  let records = inventa_flat::read_csv(&data)?;

  let installed = repo.replace_all(records);
  warn_persist(&installed);
  println!("imported {} records", installed.value);
  Ok(())
}

pub fn qr(repo: &Repo, session: &Session, id: i64) -> anyhow::Result<()> {
  require_role(session)?;
  let asset = repo.get(id).ok_or(inventa_core::Error::NotFound(id))?;
  println!("{}", QrPayload::from(asset).to_json()?);
  Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn require_role(session: &Session) -> anyhow::Result<Role> {
  session
    .current_role()
    .context("no active session; run `inventa login` first")
}

fn check(action: Action, role: Role) -> anyhow::Result<()> {
  if authorize(action, role) {
    Ok(())
  } else {
    Err(inventa_core::Error::Unauthorized { role, action }.into())
  }
}

fn warn_persist<T>(mutation: &Mutation<T>) {
  if let Some(e) = &mutation.persist_error {
    tracing::warn!("state updated but snapshot write failed: {e}");
  }
}

fn into_draft(args: DraftArgs) -> AssetDraft {
  AssetDraft {
    code:      args.code,
    name:      args.name,
    quantity:  args.quantity,
    condition: args.condition.into(),
    location:  args.location,
    category:  args.category,
    origin:    args.origin,
    year:      args.year,
    photo:     args.photo,
  }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
  print!("{prompt}");
  io::stdout().flush()?;
  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn emit(bytes: &[u8], out: Option<&Path>) -> anyhow::Result<()> {
  match out {
    Some(path) => {
      fs::write(path, bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
      println!("wrote {}", path.display());
    }
    None => io::stdout().write_all(bytes)?,
  }
  Ok(())
}

fn new_table(headers: Vec<&str>) -> Table {
  let mut table = Table::new();
  table
    .load_preset(UTF8_FULL_CONDENSED)
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_header(headers);
  table
}
