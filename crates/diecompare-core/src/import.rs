//! Importing the built-in catalog into a store.

use serde::{Deserialize, Serialize};

use crate::{catalog, die::NewDie, store::DieStore};

/// Raw tally returned by [`DieStore::insert_missing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
  pub imported: usize,
  pub skipped:  usize,
}

/// Result of an import run, as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
  pub imported_count: usize,
  pub skipped_count:  usize,
  pub message:        String,
}

impl From<ImportOutcome> for ImportSummary {
  fn from(o: ImportOutcome) -> Self {
    Self {
      imported_count: o.imported,
      skipped_count:  o.skipped,
      message:        format!(
        "Imported {} dies, skipped {} duplicates",
        o.imported, o.skipped
      ),
    }
  }
}

/// Insert every catalog entry not already present in `store`.
///
/// Idempotent: once every entry is stored, further runs import nothing and
/// skip the whole catalog.
pub async fn import_catalog<S: DieStore>(store: &S) -> Result<ImportSummary, S::Error> {
  let dies: Vec<NewDie> = catalog::entries().iter().map(NewDie::from).collect();
  let outcome = store.insert_missing(dies).await?;
  Ok(outcome.into())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn summary_message() {
    let summary = ImportSummary::from(ImportOutcome { imported: 3, skipped: 7 });
    assert_eq!(summary.imported_count, 3);
    assert_eq!(summary.skipped_count, 7);
    assert_eq!(summary.message, "Imported 3 dies, skipped 7 duplicates");
  }
}
