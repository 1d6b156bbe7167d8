//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::Filter;
use crate::models::{CardId, CardRecord, DayKey};
use crate::week::WeekStore;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every saved card, by day
    pub week: WeekStore,
    /// Weeks away from the current one
    pub week_offset: i32,
    /// Active primary navigation filter
    pub filter: Filter,
    /// Search bar contents
    pub search: String,
    /// Message shown in the notice banner
    pub notice: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Ids of a day's cards (tracked)
pub fn store_card_ids(store: &AppStore, day: DayKey) -> Vec<CardId> {
    store.week().with(|week| week.cards(&day).iter().map(|card| card.id.clone()).collect())
}

/// Snapshot of one card (tracked)
pub fn store_card(store: &AppStore, id: &CardId) -> Option<CardRecord> {
    store.week().with(|week| week.card(id).cloned())
}

pub fn store_shift_week(store: &AppStore, delta: i32) {
    store.week_offset().update(|offset| *offset += delta);
}

pub fn store_reset_week(store: &AppStore) {
    store.week_offset().set(0);
}
