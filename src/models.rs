//! Data models for discovered news items.
//!
//! This module defines the two structures at the heart of the pipeline:
//! - [`NewsItem`]: one story discovered on a source's front page
//! - [`DedupCache`]: the set of items already reported this process lifetime
//!
//! # Item identity
//!
//! Two [`NewsItem`]s are considered the same story when their titles match,
//! regardless of source or any other field. This is a deliberate
//! simplification carried over from the product definition: it conflates
//! distinct articles that happen to share a headline across outlets, and it
//! must not be changed without revisiting the observable dedup behavior.

use serde::Serialize;

/// A single news story as extracted from a source's front page.
///
/// Only `source` and `title` are guaranteed to be present; the remaining
/// fields depend on what the outlet publishes on its front page. Absent
/// fields stay `None` and are omitted from output entirely, never defaulted
/// to placeholder strings.
#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    /// Human-readable name of the outlet, e.g. "The Washington Post".
    pub source: String,
    /// The headline. Defines item identity (see module docs).
    pub title: String,
    /// Byline author(s), when the front page shows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date or timestamp text as shown on the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    /// Teaser/description text, when the front page shows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl PartialEq for NewsItem {
    /// Title-only equality: the dedup contract of the whole pipeline.
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for NewsItem {}

/// Append-only record of every item reported so far.
///
/// Owned exclusively by the reporter loop; nothing else reads or writes it,
/// so no synchronization is needed. Grows monotonically for the lifetime of
/// the process: there is no eviction and no persistence across restarts,
/// a known limitation accepted for process-lifetime operation.
#[derive(Debug, Default)]
pub struct DedupCache {
    seen: Vec<NewsItem>,
}

impl DedupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test using the title-only equality of [`NewsItem`].
    pub fn contains(&self, item: &NewsItem) -> bool {
        self.seen.iter().any(|past| past == item)
    }

    /// Record an item as reported.
    pub fn insert(&mut self, item: NewsItem) {
        self.seen.push(item);
    }

    /// Number of distinct stories reported so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
