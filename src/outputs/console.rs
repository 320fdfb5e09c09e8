//! Human-readable rendering of a reported item.
//!
//! Each item becomes a short block: source and title always, then summary,
//! author, and date on their own indented lines when present. A trailing
//! blank line separates consecutive items in the stream.

use crate::models::NewsItem;

/// Render an item as a multi-line block.
pub fn render(item: &NewsItem) -> String {
    let mut out = format!("Source: {}\n Title: {}", item.source, item.title);
    if let Some(summary) = &item.summary {
        out.push_str(&format!("\n Summary: {summary}"));
    }
    if let Some(author) = &item.author {
        out.push_str(&format!("\n Author: {author}"));
    }
    if let Some(published) = &item.published {
        out.push_str(&format!("\n Date: {published}"));
    }
    out.push('\n');
    out
}
