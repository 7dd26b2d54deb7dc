// Feed loading and querying helpers: repetition of a short initial load, and text search over posts.

use std::collections::HashSet;

use crate::error::FeedError;
use crate::types::*;

/// Lay `items` out `copies` times back to back.
///
/// The first copy keeps its ids; copy `n` (2-based) suffixes every id with `_n`.
/// A suffixed id can equal an id already in the input (`a_2` beside `a`); callers
/// run `ensure_unique_ids` on the result and reject such a load as a whole.
/// `copies` of 0 or 1 returns the feed unchanged.
pub fn repeat_feed<T: Clone>(items: Vec<FeedItem<T>>, copies: u32) -> Vec<FeedItem<T>> {
    if copies <= 1 {
        return items;
    }

    let capacity = items.len().checked_mul(copies as usize).unwrap_or(items.len());
    let mut repeated = Vec::with_capacity(capacity);
    repeated.extend(items.iter().cloned());
    for copy in 2..=copies {
        repeated.extend(items.iter().map(|item| FeedItem {
            id: item.id.with_copy_suffix(copy),
            payload: item.payload.clone(),
        }));
    }
    repeated
}

/// Reject a feed that reuses an id.
pub fn ensure_unique_ids<T>(items: &[FeedItem<T>]) -> Result<(), FeedError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(&item.id) {
            return Err(FeedError::DuplicateItemId(item.id.clone()));
        }
    }
    Ok(())
}

/// Payloads that can be matched against a free-text query.
pub trait Searchable {
    /// `needle` is already lowercased.
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for Post {
    fn matches(&self, needle: &str) -> bool {
        self.content.to_lowercase().contains(needle)
            || self.username.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}

/// Indices of items whose payload matches `query`, case-insensitively, in feed order.
/// An empty query matches everything.
pub fn search<T: Searchable>(items: &[FeedItem<T>], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| needle.is_empty() || item.payload.matches(&needle))
        .map(|(index, _)| index)
        .collect()
}
