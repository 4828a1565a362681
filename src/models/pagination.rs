//! Pagination envelope shared by every list endpoint

use serde::{Deserialize, Serialize};

/// One page of items as returned by the backend
///
/// `items_from`/`items_to` are the 1-based positions of the first and last
/// item of this page within the whole result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub total_pages: u32,
    pub total_items_count: u32,
    pub items_from: u32,
    pub items_to: u32,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether another page follows `current_page` (1-based)
    pub fn has_next_page(&self, current_page: u32) -> bool {
        current_page < self.total_pages
    }

    /// Convert the items while keeping the paging counters
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_items_count: self.total_items_count,
            items_from: self.items_from,
            items_to: self.items_to,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            total_items_count: 0,
            items_from: 0,
            items_to: 0,
        }
    }
}
