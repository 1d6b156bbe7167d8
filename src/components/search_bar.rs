//! Search Bar Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Header search; narrows visible cards as you type
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search tasks..."
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
            <Show when=move || !store.search().with(|term| term.is_empty())>
                <button class="search-clear-btn" title="Clear search" on:click=move |_| store.search().set(String::new())>
                    "×"
                </button>
            </Show>
        </div>
    }
}
