//! Integration tests for `SqliteStore` against an in-memory database.

use diecompare_core::{
  DieQuery, DieStore, NewDie, catalog,
  import::import_catalog,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn die(chip_name: &str, manufacturer: &str, category: &str) -> NewDie {
  NewDie {
    chip_name:        chip_name.into(),
    manufacturer:     manufacturer.into(),
    process_node:     "5nm".into(),
    die_size_mm2:     123.5,
    transistor_count: "10 billion".into(),
    release_date:     "2023-06".into(),
    category:         category.into(),
    notes:            Some("hand-entered".into()),
    is_public:        true,
  }
}

fn everything() -> DieQuery {
  DieQuery { public: None, ..DieQuery::default() }
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_roundtrip() {
  let s = store().await;

  let created = s.create(die("Chip A", "Acme", "CPU")).await.unwrap();
  assert_eq!(created.chip_name, "Chip A");

  let fetched = s.get(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(42).await.unwrap().is_none());
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
  let s = store().await;
  let a = s.create(die("Chip A", "Acme", "CPU")).await.unwrap();
  let b = s.create(die("Chip A", "Acme", "CPU")).await.unwrap();
  // Direct creates never dedup.
  assert_ne!(a.id, b.id);
  assert_eq!(s.list(&everything()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  let a = s.create(die("Chip A", "Acme", "CPU")).await.unwrap();
  assert!(s.delete(a.id).await.unwrap());
  let b = s.create(die("Chip B", "Acme", "CPU")).await.unwrap();
  assert!(b.id > a.id);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_replaces_fields_and_keeps_identity() {
  let s = store().await;
  let original = s.create(die("Chip A", "Acme", "CPU")).await.unwrap();

  let mut next = die("Chip A2", "Acme Corp", "GPU");
  next.die_size_mm2 = 300.0;
  next.notes = None;
  next.is_public = false;

  let updated = s.update(original.id, next.clone()).await.unwrap().unwrap();
  assert_eq!(updated.id, original.id);
  assert_eq!(updated.created_at, original.created_at);
  assert_eq!(updated.chip_name, "Chip A2");
  assert_eq!(updated.manufacturer, "Acme Corp");
  assert_eq!(updated.category, "GPU");
  assert_eq!(updated.die_size_mm2, 300.0);
  assert_eq!(updated.notes, None);
  assert!(!updated.is_public);

  let fetched = s.get(original.id).await.unwrap().unwrap();
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  let result = s.update(7, die("Chip A", "Acme", "CPU")).await.unwrap();
  assert!(result.is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_get_is_none() {
  let s = store().await;
  let created = s.create(die("Chip A", "Acme", "CPU")).await.unwrap();

  assert!(s.delete(created.id).await.unwrap());
  assert!(s.get(created.id).await.unwrap().is_none());
  assert!(!s.delete(created.id).await.unwrap());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_filters_by_exact_category() {
  let s = store().await;
  s.create(die("A", "Acme", "GPU")).await.unwrap();
  s.create(die("B", "Acme", "gpu")).await.unwrap();
  s.create(die("C", "Acme", "CPU")).await.unwrap();

  let q = DieQuery { category: Some("GPU".into()), ..DieQuery::default() };
  let gpus = s.list(&q).await.unwrap();
  assert_eq!(gpus.len(), 1);
  assert!(gpus.iter().all(|d| d.category == "GPU"));
}

#[tokio::test]
async fn list_empty_category_returns_all() {
  let s = store().await;
  s.create(die("A", "Acme", "GPU")).await.unwrap();
  s.create(die("B", "Acme", "CPU")).await.unwrap();

  let q = DieQuery { category: Some(String::new()), ..DieQuery::default() };
  assert_eq!(s.list(&q).await.unwrap().len(), 2);
}

#[tokio::test]
async fn list_defaults_to_public_only() {
  let s = store().await;
  s.create(die("A", "Acme", "GPU")).await.unwrap();
  let mut hidden = die("B", "Acme", "GPU");
  hidden.is_public = false;
  s.create(hidden).await.unwrap();

  let public = s.list(&DieQuery::default()).await.unwrap();
  assert_eq!(public.len(), 1);
  assert_eq!(public[0].chip_name, "A");

  let private = s
    .list(&DieQuery { public: Some(false), ..DieQuery::default() })
    .await
    .unwrap();
  assert_eq!(private.len(), 1);
  assert_eq!(private[0].chip_name, "B");

  assert_eq!(s.list(&everything()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn list_pages_in_storage_order() {
  let s = store().await;
  for name in ["A", "B", "C", "D", "E"] {
    s.create(die(name, "Acme", "CPU")).await.unwrap();
  }

  let q = DieQuery { offset: 1, limit: Some(3), ..DieQuery::default() };
  let names: Vec<String> = s
    .list(&q)
    .await
    .unwrap()
    .into_iter()
    .map(|d| d.chip_name)
    .collect();
  assert_eq!(names, ["B", "C", "D"]);
}

#[tokio::test]
async fn list_without_limit_returns_every_row() {
  let s = store().await;
  for i in 0..120 {
    s.create(die(&format!("Chip {i}"), "Acme", "CPU")).await.unwrap();
  }

  assert_eq!(s.list(&DieQuery::default()).await.unwrap().len(), 100);

  let q = DieQuery { offset: 5, limit: None, ..DieQuery::default() };
  assert_eq!(s.list(&q).await.unwrap().len(), 115);
}

// ─── Stats ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn stats_on_empty_store() {
  let s = store().await;
  let stats = s.stats().await.unwrap();
  assert_eq!(stats.total_dies, 0);
  assert_eq!(stats.public_dies, 0);
  assert_eq!(stats.categories, 0);
}

#[tokio::test]
async fn stats_counts_visibility_and_categories() {
  let s = store().await;
  s.create(die("A", "Acme", "GPU")).await.unwrap();
  s.create(die("B", "Acme", "CPU")).await.unwrap();
  let mut hidden = die("C", "Acme", "GPU");
  hidden.is_public = false;
  s.create(hidden).await.unwrap();

  let stats = s.stats().await.unwrap();
  assert_eq!(stats.total_dies, 3);
  assert_eq!(stats.public_dies, 2);
  assert_eq!(stats.categories, 2);
}

// ─── Import ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn import_is_idempotent() {
  let s = store().await;
  let n = catalog::available_count();

  let first = import_catalog(&s).await.unwrap();
  assert_eq!(first.imported_count, n);
  assert_eq!(first.skipped_count, 0);

  let second = import_catalog(&s).await.unwrap();
  assert_eq!(second.imported_count, 0);
  assert_eq!(second.skipped_count, n);
  assert_eq!(
    second.message,
    format!("Imported 0 dies, skipped {n} duplicates")
  );

  assert_eq!(s.stats().await.unwrap().total_dies, n as u64);
}

#[tokio::test]
async fn import_skips_existing_pair_only() {
  let s = store().await;
  s.create(die("NVIDIA H100", "NVIDIA", "GPU")).await.unwrap();
  // Same chip, different case: not a match.
  s.create(die("apple m3 pro", "Apple", "SoC")).await.unwrap();

  let summary = import_catalog(&s).await.unwrap();
  assert_eq!(summary.skipped_count, 1);
  assert_eq!(summary.imported_count, catalog::available_count() - 1);
}

#[tokio::test]
async fn import_reimports_deleted_entries() {
  let s = store().await;
  import_catalog(&s).await.unwrap();

  let victim = s.list(&DieQuery::default()).await.unwrap().remove(0);
  s.delete(victim.id).await.unwrap();

  let summary = import_catalog(&s).await.unwrap();
  assert_eq!(summary.imported_count, 1);
  assert_eq!(summary.skipped_count, catalog::available_count() - 1);
}

#[tokio::test]
async fn import_rolls_back_on_failure() {
  let s = store().await;
  s.conn
    .call(|conn| {
      conn.execute_batch(
        "CREATE TRIGGER reject_rtx BEFORE INSERT ON dies
         WHEN NEW.chip_name = 'NVIDIA RTX 4090'
         BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
      )?;
      Ok(())
    })
    .await
    .unwrap();

  assert!(import_catalog(&s).await.is_err());
  // Entries inserted before the rejected one are gone too.
  assert_eq!(s.stats().await.unwrap().total_dies, 0);
}

#[tokio::test]
async fn insert_missing_dedups_within_batch() {
  let s = store().await;
  let outcome = s
    .insert_missing(vec![
      die("A", "Acme", "CPU"),
      die("A", "Acme", "GPU"),
      die("A", "Other", "CPU"),
    ])
    .await
    .unwrap();
  assert_eq!(outcome.imported, 2);
  assert_eq!(outcome.skipped, 1);
}

#[tokio::test]
async fn imported_gpus_include_h100() {
  let s = store().await;
  import_catalog(&s).await.unwrap();

  let q = DieQuery { category: Some("GPU".into()), ..DieQuery::default() };
  let gpus = s.list(&q).await.unwrap();
  assert!(gpus.iter().all(|d| d.category == "GPU"));

  let h100: Vec<_> = gpus.iter().filter(|d| d.chip_name == "NVIDIA H100").collect();
  assert_eq!(h100.len(), 1);
  assert_eq!(h100[0].die_size_mm2, 814.0);
  assert!(h100[0].is_public);
  assert_eq!(
    h100[0].notes.as_deref(),
    Some("Enterprise AI accelerator, largest die in HPC")
  );
}
