// ABOUTME: Pagination module for paged recipe sources and numbered result pages
// ABOUTME: Provides opaque cursor encoding for sources and page metadata for search results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::fmt::{self, Display, Formatter};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Opaque pagination cursor containing encoded position information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// Create a new cursor pointing just past the item at `offset` with the given ID
    ///
    /// # Arguments
    /// * `offset` - Number of items already consumed
    /// * `id` - The unique identifier of the last consumed item
    #[must_use]
    pub fn new(offset: usize, id: &str) -> Self {
        let cursor_data = format!("{offset}:{id}");
        let encoded = base64::Engine::encode(&URL_SAFE_NO_PAD, cursor_data.as_bytes());
        Self(encoded)
    }

    /// Decode cursor into offset and ID components
    ///
    /// Returns `None` if cursor is invalid or malformed
    #[must_use]
    pub fn decode(&self) -> Option<(usize, String)> {
        let decoded = base64::Engine::decode(&URL_SAFE_NO_PAD, &self.0).ok()?;
        let decoded_str = String::from_utf8(decoded).ok()?;

        // Split on first ':' only so IDs containing ':' are preserved
        let (offset_str, id) = decoded_str.split_once(':')?;
        let offset = offset_str.parse::<usize>().ok()?;

        Some((offset, id.to_owned()))
    }

    /// Get the raw cursor string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create cursor from raw string (for deserialization)
    #[must_use]
    pub const fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A page fetched from a cursor-based source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPage<T> {
    /// The items in this page
    pub items: Vec<T>,

    /// Cursor pointing to the next page (if available)
    pub next_cursor: Option<Cursor>,

    /// Whether there are more items after this page
    pub has_more: bool,

    /// Total number of items in this page
    pub count: usize,
}

impl<T> CursorPage<T> {
    /// Create a new cursor page
    #[must_use]
    pub fn new(items: Vec<T>, next_cursor: Option<Cursor>, has_more: bool) -> Self {
        let count = items.len();
        Self {
            items,
            next_cursor,
            has_more,
            count,
        }
    }
}

/// Pagination parameters for cursor-based queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Cursor to start from (exclusive)
    pub cursor: Option<Cursor>,

    /// Maximum number of items to return
    pub limit: usize,
}

impl PaginationParams {
    /// Create forward pagination parameters
    #[must_use]
    pub const fn forward(cursor: Option<Cursor>, limit: usize) -> Self {
        Self { cursor, limit }
    }
}

/// A numbered page of results with total-count metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    /// Maximum number of items per page
    pub page_size: usize,
    /// Number of matching items across all pages
    pub total_count: usize,
    /// Number of pages needed to show every matching item
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cut a numbered page out of an ordered, fully counted result set
    ///
    /// Page 0 is treated as page 1. Pages past the end are empty but keep the
    /// total-count metadata.
    #[must_use]
    pub fn from_ordered<I>(ordered: I, total_count: usize, page: usize, page_size: usize) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let items = ordered
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        Self {
            items,
            page,
            page_size,
            total_count,
            total_pages: total_count.div_ceil(page_size),
        }
    }

    /// Whether a further page holds more items
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_round_trip_preserves_colons_in_id() {
        let cursor = Cursor::new(24, "recipe:42");
        assert_eq!(cursor.decode(), Some((24, "recipe:42".to_owned())));
    }

    #[test]
    fn test_malformed_cursor_decodes_to_none() {
        assert!(Cursor::from_string("not base64!".to_owned()).decode().is_none());
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::from_ordered(1..=30, 30, 3, 12);

        assert_eq!(page.items, vec![25, 26, 27, 28, 29, 30]);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let page = Page::from_ordered(1..=5, 5, 0, 2);

        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![1, 2]);
        assert!(page.has_next());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = Page::from_ordered(1..=5, 5, 9, 2);

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 3);
    }
}
