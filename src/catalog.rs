//! Loading catalog dumps from disk.
//!
//! Inventory is fetched page by page from the catalog API, each page carrying
//! a batch of items and a has-more flag. A dump on disk can take three shapes:
//!
//! - a bare array of items: `[{"title": ...}, ...]`
//! - a single page: `{"items": [...], "hasMore": false}`
//! - an array of pages, concatenated in order: `[{"items": [...]}, ...]`

use crate::error::CatalogError;
use crate::item::CatalogItem;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One page of results from the catalog API.
///
/// A page carries nothing but `items` and the has-more flag. Any other key
/// means the object is a product record, not a page. Spell the flag either
/// `has_more` or `hasMore`, not both.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    #[serde(default, alias = "hasMore")]
    pub has_more: bool,
}

/// Accepted top-level shapes. Order matters: a page has exactly the page
/// keys, so item arrays fall through to the last variant even when their
/// records carry an `items` key of their own.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Page(CatalogPage),
    Pages(Vec<CatalogPage>),
    Items(Vec<CatalogItem>),
}

/// An ordered inventory list, ready to be ranked.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    truncated: bool,
}

impl Catalog {
    pub const fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            truncated: false,
        }
    }

    /// Assembles a catalog from consecutive pages.
    pub fn from_pages(pages: impl IntoIterator<Item = CatalogPage>) -> Self {
        let mut catalog = Self::default();
        for page in pages {
            catalog.items.extend(page.items);
            catalog.truncated = page.has_more;
        }
        catalog
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        Ok(Self::from_document(serde_json::from_str(text)?))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        Ok(Self::from_document(serde_json::from_reader(reader)?))
    }

    /// Reads a catalog dump from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document: CatalogDocument =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_document(document);

        tracing::info!("Loaded {} items from {}", catalog.len(), path.display());
        if catalog.is_truncated() {
            tracing::warn!(
                "Last page in {} reports more items; the dump is incomplete",
                path.display()
            );
        }

        Ok(catalog)
    }

    fn from_document(document: CatalogDocument) -> Self {
        match document {
            CatalogDocument::Page(page) => Self::from_pages([page]),
            CatalogDocument::Pages(pages) => Self::from_pages(pages),
            CatalogDocument::Items(items) => Self::new(items),
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CatalogItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if the last page said more items were available.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}
