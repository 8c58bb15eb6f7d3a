//! The built-in seed catalog of publicly documented dies.
//!
//! Values are curated from published specifications, vendor datasheets and
//! teardowns. The table is immutable and compiled into the binary; callers
//! get the same slice, in the same order, every time.

use std::collections::HashSet;

use crate::die::NewDie;

/// One entry of the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
  pub chip_name:        &'static str,
  pub manufacturer:     &'static str,
  pub process_node:     &'static str,
  pub die_size_mm2:     f64,
  pub transistor_count: &'static str,
  pub release_date:     &'static str,
  pub category:         &'static str,
  pub notes:            Option<&'static str>,
}

static CATALOG: [CatalogEntry; 10] = [
  CatalogEntry {
    chip_name:        "Apple M3 Pro",
    manufacturer:     "Apple",
    process_node:     "5nm",
    die_size_mm2:     150.0,
    transistor_count: "18 billion",
    release_date:     "2023-01-17",
    category:         "SoC",
    notes:            Some("Source: Published specifications, iFixit teardown"),
  },
  CatalogEntry {
    chip_name:        "Apple M3 Max",
    manufacturer:     "Apple",
    process_node:     "5nm",
    die_size_mm2:     286.0,
    transistor_count: "40 billion",
    release_date:     "2023-01-17",
    category:         "SoC",
    notes:            Some("Dual GPU variant"),
  },
  CatalogEntry {
    chip_name:        "Snapdragon 8 Gen 3",
    manufacturer:     "Qualcomm",
    process_node:     "4nm",
    die_size_mm2:     205.0,
    transistor_count: "12 billion",
    release_date:     "2023-10-24",
    category:         "SoC",
    notes:            Some("Source: Qualcomm specifications, TechPowerUp"),
  },
  CatalogEntry {
    chip_name:        "NVIDIA H100",
    manufacturer:     "NVIDIA",
    process_node:     "5nm",
    die_size_mm2:     814.0,
    transistor_count: "80 billion",
    release_date:     "2022-03-22",
    category:         "GPU",
    notes:            Some("Enterprise AI accelerator, largest die in HPC"),
  },
  CatalogEntry {
    chip_name:        "AMD Ryzen 9 7950X3D",
    manufacturer:     "AMD",
    process_node:     "5nm",
    die_size_mm2:     609.0,
    transistor_count: "13.5 billion",
    release_date:     "2023-02-28",
    category:         "CPU",
    notes:            Some("Zen 4 with 3D V-Cache, per-core die"),
  },
  CatalogEntry {
    chip_name:        "Intel Core i9-13900KS",
    manufacturer:     "Intel",
    process_node:     "7nm",
    die_size_mm2:     274.0,
    transistor_count: "8 billion",
    release_date:     "2023-01-12",
    category:         "CPU",
    notes:            Some("Raptor Lake-S"),
  },
  CatalogEntry {
    chip_name:        "Samsung Exynos 2400",
    manufacturer:     "Samsung",
    process_node:     "4nm",
    die_size_mm2:     110.0,
    transistor_count: "13 billion",
    release_date:     "2024-01-22",
    category:         "SoC",
    notes:            Some("Galaxy S24 processor"),
  },
  CatalogEntry {
    chip_name:        "MediaTek Dimensity 9300",
    manufacturer:     "MediaTek",
    process_node:     "4nm",
    die_size_mm2:     105.0,
    transistor_count: "10.7 billion",
    release_date:     "2023-11-08",
    category:         "SoC",
    notes:            Some("Flagship SoC for various Android flagships"),
  },
  CatalogEntry {
    chip_name:        "NVIDIA RTX 4090",
    manufacturer:     "NVIDIA",
    process_node:     "5nm",
    die_size_mm2:     608.0,
    transistor_count: "76.3 billion",
    release_date:     "2022-10-12",
    category:         "GPU",
    notes:            Some("Consumer flagship GPU, Ada architecture"),
  },
  CatalogEntry {
    chip_name:        "Apple A17 Pro",
    manufacturer:     "Apple",
    process_node:     "3nm",
    die_size_mm2:     120.0,
    transistor_count: "19 billion",
    release_date:     "2023-09-22",
    category:         "SoC",
    notes:            Some("iPhone 15 Pro processor"),
  },
];

/// The full catalog, in definition order.
pub fn entries() -> &'static [CatalogEntry] { &CATALOG }

/// Number of entries available for import, independent of any store.
pub fn available_count() -> usize { CATALOG.len() }

impl From<&CatalogEntry> for NewDie {
  /// Catalog entries are always public; missing notes become `""`.
  fn from(e: &CatalogEntry) -> Self {
    NewDie {
      chip_name:        e.chip_name.to_owned(),
      manufacturer:     e.manufacturer.to_owned(),
      process_node:     e.process_node.to_owned(),
      die_size_mm2:     e.die_size_mm2,
      transistor_count: e.transistor_count.to_owned(),
      release_date:     e.release_date.to_owned(),
      category:         e.category.to_owned(),
      notes:            Some(e.notes.unwrap_or_default().to_owned()),
      is_public:        true,
    }
  }
}

/// Drop every die whose `(manufacturer, chip_name)` pair was already seen,
/// keeping the first occurrence and the original order.
pub fn dedup(dies: impl IntoIterator<Item = NewDie>) -> Vec<NewDie> {
  let mut seen = HashSet::new();
  dies
    .into_iter()
    .filter(|d| seen.insert((d.manufacturer.clone(), d.chip_name.clone())))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalog_is_stable() {
    assert_eq!(available_count(), 10);
    assert_eq!(entries().len(), available_count());
    assert!(std::ptr::eq(entries(), entries()));
    assert_eq!(entries()[0].chip_name, "Apple M3 Pro");
  }

  #[test]
  fn catalog_has_no_duplicate_pairs() {
    let all: Vec<NewDie> = entries().iter().map(NewDie::from).collect();
    assert_eq!(dedup(all).len(), available_count());
  }

  #[test]
  fn h100_entry() {
    let h100 = entries()
      .iter()
      .find(|e| e.chip_name == "NVIDIA H100")
      .unwrap();
    assert_eq!(h100.category, "GPU");
    assert_eq!(h100.die_size_mm2, 814.0);
  }

  #[test]
  fn entry_converts_to_public_die() {
    let mut entry = entries()[0];
    entry.notes = None;
    let die = NewDie::from(&entry);
    assert!(die.is_public);
    assert_eq!(die.notes.as_deref(), Some(""));
    assert_eq!(die.chip_name, "Apple M3 Pro");
  }

  #[test]
  fn dedup_keeps_first_and_is_case_sensitive() {
    let base = NewDie::from(&entries()[3]);

    let mut later = base.clone();
    later.die_size_mm2 = 1.0;

    let mut other_case = base.clone();
    other_case.chip_name = "nvidia h100".into();

    let out = dedup([base.clone(), later, other_case.clone()]);
    assert_eq!(out, vec![base, other_case]);
  }
}
