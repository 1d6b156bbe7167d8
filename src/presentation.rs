//! Presentation Helpers
//!
//! Display-only orderings and labels. Nothing here touches stored order.

use crate::models::{CardRecord, ItemRecord};

/// Incomplete items first, then completed ones, each group keeping its
/// stored relative order.
pub fn completed_to_tail(items: &[ItemRecord]) -> Vec<&ItemRecord> {
    let (open, done): (Vec<&ItemRecord>, Vec<&ItemRecord>) = items.iter().partition(|item| !item.completed);
    open.into_iter().chain(done).collect()
}

/// Title shown for a card; untitled cards get a placeholder
pub fn display_title(card: &CardRecord) -> &str {
    let title = card.title.trim();
    if title.is_empty() { "Untitled" } else { title }
}
