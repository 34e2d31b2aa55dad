//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `shirts`: the three-item catalog used in most ranking scenarios
//! - `inventory`: a larger mixed catalog with descriptions and extra fields
//! - `temp_workspace`: an empty [`TempWorkspace`] for tests that write catalog
//!   dumps or config files to disk

use inventory_rank::CatalogItem;
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace directory for test isolation.
///
/// Provides basic filesystem operations within a temp directory that is
/// automatically cleaned up when dropped.
///
/// # Example
///
/// ```ignore
/// let workspace = TempWorkspace::new();
/// let path = workspace.create_file("catalog.json", "[]");
/// assert!(path.exists());
/// ```
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content within this workspace and returns its path.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }

    /// Serializes items as a sequence of catalog API pages, `page_size` items each.
    pub fn create_paged_catalog(
        &self,
        path: &str,
        items: &[CatalogItem],
        page_size: usize,
    ) -> PathBuf {
        let chunks: Vec<&[CatalogItem]> = items.chunks(page_size).collect();
        let pages: Vec<serde_json::Value> = chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| {
                serde_json::json!({
                    "items": chunk,
                    "hasMore": i + 1 < chunks.len(),
                })
            })
            .collect();
        let content = serde_json::to_string(&pages).expect("Failed to serialize pages");
        self.create_file(path, &content)
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Titles of ranked items, in order.
#[allow(dead_code)]
pub fn titles<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> Vec<&'a str> {
    items.into_iter().map(|item| item.title.as_str()).collect()
}

#[fixture]
pub fn temp_workspace() -> TempWorkspace {
    TempWorkspace::new()
}

#[fixture]
pub fn shirts() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Red Shirt"),
        CatalogItem::new("Blue Shirt"),
        CatalogItem::new("Shirt Red Edition"),
    ]
}

#[fixture]
pub fn inventory() -> Vec<CatalogItem> {
    let items = serde_json::json!([
        {"id": "sku-100", "title": "Classic Black Shirt", "description": "Heavyweight cotton", "price": 2499},
        {"id": "sku-101", "title": "Linen Trousers", "description": "Relaxed fit, sand colour"},
        {"id": "sku-102", "title": "Black Canvas Tote", "description": null, "stock": 12},
        {"id": "sku-103", "title": "Wool Scarf", "description": "Black and grey check"},
        {"id": "sku-104", "title": null, "description": "Unlabelled sample"},
        {"id": "sku-105", "title": "Blackout Curtain", "description": "Blocks light"},
        {"id": "sku-106", "title": "Cotton Socks", "description": "Pack of three, black"},
    ]);
    serde_json::from_value(items).expect("Failed to build inventory fixture")
}
