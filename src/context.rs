//! Application Context
//!
//! Shared handles provided via Leptos Context API. Every change to the
//! week goes through [`AppContext::mutate_week`], which saves right after.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::models::DayKey;
use crate::storage::{BrowserStorage, Persistence, StorageError};
use crate::store::{AppStateStoreFields, AppStore};
use crate::week::WeekStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: AppConfig,
    /// Day the app was opened on
    pub today: DayKey,
    store: AppStore,
    persistence: Persistence<BrowserStorage>,
}

impl AppContext {
    pub fn new(config: AppConfig, today: DayKey, store: AppStore) -> Self {
        Self {
            config,
            today,
            store,
            persistence: Persistence::new(BrowserStorage::default(), config.storage_key),
        }
    }

    /// Load the saved week into the store. When that fails the week starts
    /// empty and saving is switched off so the unreadable data survives.
    pub fn restore(&mut self) -> Result<(), StorageError> {
        match self.persistence.load() {
            Ok(week) => {
                log::info!(
                    "[STORAGE] loaded {} cards, {} items",
                    week.card_count(),
                    week.item_count()
                );
                self.store.week().set(week);
                Ok(())
            }
            Err(err) => {
                self.persistence = Persistence::new(BrowserStorage::read_only(), self.config.storage_key);
                Err(err)
            }
        }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    pub fn persistence(&self) -> Persistence<BrowserStorage> {
        self.persistence
    }

    /// Apply an edit to the week. `edit` returns whether anything changed;
    /// subscribers are notified and the week saved only if it did.
    pub fn mutate_week(&self, edit: impl FnOnce(&mut WeekStore) -> bool) -> bool {
        let mut changed = false;
        self.store.week().maybe_update(|week| {
            changed = edit(week);
            changed
        });
        if changed {
            self.persist();
        }
        changed
    }

    /// Write the week to local storage, reporting failures in the notice banner
    pub fn persist(&self) {
        let saved = self.store.week().with_untracked(|week| self.persistence.save(week));
        if let Err(err) = saved {
            log::error!("[STORAGE] save failed: {}", err);
            self.notify(format!("Changes were not saved: {}", err));
        }
    }

    /// Show a notice that dismisses itself after the configured timeout
    pub fn notify(&self, message: String) {
        let notice = self.store.notice();
        notice.set(Some(message.clone()));
        let timeout = Duration::from_millis(u64::from(self.config.notice_timeout_ms));
        spawn_local(async move {
            gloo_timers::future::sleep(timeout).await;
            if notice.with_untracked(|current| current.as_deref() == Some(message.as_str())) {
                notice.set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.store.notice().set(None);
    }
}
