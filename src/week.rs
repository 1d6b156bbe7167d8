//! Week Store
//!
//! Day → cards → items. Sequence order is display order (items subject
//! to the completed-last presentation rule).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CardId, CardRecord, DayKey, ItemId, ItemRecord};

const UNTITLED_PREFIX: &str = "Untitled Tasks";

/// All cards, keyed by day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekStore {
    days: BTreeMap<DayKey, Vec<CardRecord>>,
}

impl WeekStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards of a day, in display order
    pub fn cards(&self, day: &DayKey) -> &[CardRecord] {
        self.days.get(day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replace a day's cards
    pub fn set_cards(&mut self, day: DayKey, cards: Vec<CardRecord>) {
        self.days.insert(day, cards);
    }

    pub fn cards_mut(&mut self, day: DayKey) -> &mut Vec<CardRecord> {
        self.days.entry(day).or_default()
    }

    /// Forget days left without cards
    pub fn prune_empty_days(&mut self) {
        self.days.retain(|_, cards| !cards.is_empty());
    }

    pub fn card(&self, id: &CardId) -> Option<&CardRecord> {
        self.days.values().flatten().find(|card| &card.id == id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut CardRecord> {
        self.days.values_mut().flatten().find(|card| &card.id == id)
    }

    /// Day and index of a card
    pub fn locate_card(&self, id: &CardId) -> Option<(DayKey, usize)> {
        self.days.iter().find_map(|(day, cards)| {
            cards.iter().position(|card| &card.id == id).map(|index| (*day, index))
        })
    }

    /// Owning card and index of an item
    pub fn locate_item(&self, id: &ItemId) -> Option<(CardId, usize)> {
        self.days.values().flatten().find_map(|card| {
            card.items
                .iter()
                .position(|item| &item.id == id)
                .map(|index| (card.id.clone(), index))
        })
    }

    pub fn item(&self, id: &ItemId) -> Option<&ItemRecord> {
        self.days
            .values()
            .flatten()
            .flat_map(|card| card.items.iter())
            .find(|item| &item.id == id)
    }

    fn item_mut(&mut self, id: &ItemId) -> Option<&mut ItemRecord> {
        self.days
            .values_mut()
            .flatten()
            .flat_map(|card| card.items.iter_mut())
            .find(|item| &item.id == id)
    }

    pub fn card_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn item_count(&self) -> usize {
        self.days.values().flatten().map(|card| card.items.len()).sum()
    }

    // ========================
    // Edits
    // ========================

    /// New untitled card at the top of `day`
    pub fn add_card(&mut self, day: DayKey) -> CardId {
        let card = CardRecord::new();
        let id = card.id.clone();
        self.cards_mut(day).insert(0, card);
        id
    }

    pub fn rename_card(&mut self, id: &CardId, title: &str) -> bool {
        match self.card_mut(id) {
            Some(card) if card.title != title => {
                card.title = title.to_string();
                true
            }
            _ => false,
        }
    }

    /// Remove a card and, with it, its items
    pub fn delete_card(&mut self, id: &CardId) -> Option<CardRecord> {
        let (day, index) = self.locate_card(id)?;
        let cards = self.days.get_mut(&day)?;
        let removed = cards.remove(index);
        if cards.is_empty() {
            self.days.remove(&day);
        }
        Some(removed)
    }

    /// New item at the top of a card's checklist. Blank text is rejected.
    pub fn add_item(&mut self, card: &CardId, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let card = self.card_mut(card)?;
        let item = ItemRecord::new(text);
        let id = item.id.clone();
        card.items.insert(0, item);
        Some(id)
    }

    /// Replace an item's text. Blank text is rejected.
    pub fn edit_item_text(&mut self, id: &ItemId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.item_mut(id) {
            Some(item) if item.text != text => {
                item.text = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Only the flag changes; the stored position is left alone.
    pub fn set_item_completed(&mut self, id: &ItemId, completed: bool) -> bool {
        match self.item_mut(id) {
            Some(item) if item.completed != completed => {
                item.completed = completed;
                true
            }
            _ => false,
        }
    }

    pub fn delete_item(&mut self, id: &ItemId) -> Option<ItemRecord> {
        let (card, index) = self.locate_item(id)?;
        Some(self.card_mut(&card)?.items.remove(index))
    }

    /// `Untitled Tasks NNN`, numbered after the highest one in use
    pub fn next_untitled_title(&self) -> String {
        let highest = self
            .days
            .values()
            .flatten()
            .filter_map(|card| card.title.strip_prefix(UNTITLED_PREFIX))
            .filter_map(|rest| rest.trim().parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{} {:03}", UNTITLED_PREFIX, highest + 1)
    }
}
