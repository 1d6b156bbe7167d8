//! Week Navigation Component
//!
//! Secondary navigation: previous week, back to today, next week.

use leptos::prelude::*;

use crate::calendar::strip_label;
use crate::models::DayKey;
use crate::store::{store_reset_week, store_shift_week, use_app_store, AppStateStoreFields};

#[component]
pub fn WeekNav(#[prop(into)] days: Signal<Vec<DayKey>>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="week-nav">
            <button class="week-btn" title="Previous week" on:click=move |_| store_shift_week(&store, -1)>
                "‹"
            </button>
            <button
                class="week-btn today-btn"
                disabled=move || store.week_offset().get() == 0
                on:click=move |_| store_reset_week(&store)
            >
                "Today"
            </button>
            <button class="week-btn" title="Next week" on:click=move |_| store_shift_week(&store, 1)>
                "›"
            </button>
            <span class="week-range">{move || days.with(|days| strip_label(days))}</span>
        </nav>
    }
}
