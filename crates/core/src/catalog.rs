//! Catalog
//!
//! The static list of gallery components and the search filter over it.

/// A static, displayable description of a reusable component shown in the
/// gallery screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable display id (1-based position in the source fixture).
    pub id: u32,

    /// Component name.
    pub name: String,

    /// Component description.
    pub description: String,

    /// Target of the card's "view component" action.
    pub link: String,
}

/// Ordered collection of catalog items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Create a catalog from an ordered list of items.
    #[must_use]
    pub fn new(items: impl Into<Vec<CatalogItem>>) -> Self {
        Catalog {
            items: items.into(),
        }
    }

    /// All items, in original order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The subsequence of items whose name or description contains `query`,
    /// case-insensitively, in original order.
    ///
    /// An empty query matches every item. An empty result is valid and is
    /// how the view layer decides to render its "no results" state.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&CatalogItem> {
        let needle = query.to_lowercase();

        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
