//! Filter Navigation Component
//!
//! Primary navigation: All Tasks / Today / Completed.

use leptos::prelude::*;

use crate::filter::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterNav() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="filter-nav">
            {Filter::ALL
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class=move || {
                                if store.filter().get() == filter { "filter-btn active" } else { "filter-btn" }
                            }
                            on:click=move |_| store.filter().set(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
