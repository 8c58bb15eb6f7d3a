//! `export-catalog`: write the seed catalog as a static JSON file.
//!
//! The built-in entries come first, followed by the entries of each extra
//! file in the order given. Later duplicates of a `(manufacturer, chip_name)`
//! pair are dropped.

use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::Context as _;
use diecompare_core::{NewDie, catalog};

/// Merge the built-in catalog with `extra` JSON files (each an array of
/// dies) and write the result to `out`. Returns the number of entries written.
pub fn export_catalog(out: &Path, extra: &[PathBuf]) -> anyhow::Result<usize> {
  let mut dies: Vec<NewDie> = catalog::entries().iter().map(NewDie::from).collect();

  for path in extra {
    let text = fs::read_to_string(path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    let more: Vec<NewDie> = serde_json::from_str(&text)
      .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = more.len(), "loaded extra entries");
    dies.extend(more);
  }

  let unique = catalog::dedup(dies);

  if let Some(dir) = out.parent()
    && !dir.as_os_str().is_empty()
  {
    fs::create_dir_all(dir)
      .with_context(|| format!("failed to create {}", dir.display()))?;
  }
  let json = serde_json::to_string_pretty(&unique)?;
  fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;

  Ok(unique.len())
}
