//! Search and Filter
//!
//! Decides which cards are shown. Hidden cards stay in the store and in
//! the DOM; only their visibility changes.

use crate::models::{CardRecord, DayKey};

/// Primary navigation filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Today,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Today, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All Tasks",
            Filter::Today => "Today",
            Filter::Completed => "Completed",
        }
    }
}

/// Case-insensitive substring match against the title and item texts.
/// A blank term matches every card.
pub fn matches_search(card: &CardRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    card.title.to_lowercase().contains(&term)
        || card.items.iter().any(|item| item.text.to_lowercase().contains(&term))
}

pub fn matches_filter(day: DayKey, card: &CardRecord, today: DayKey, filter: Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::Today => day == today,
        Filter::Completed => card.has_completed(),
    }
}

pub fn card_visible(day: DayKey, card: &CardRecord, today: DayKey, filter: Filter, search: &str) -> bool {
    matches_filter(day, card, today, filter) && matches_search(card, search)
}
