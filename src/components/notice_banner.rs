//! Notice Banner Component
//!
//! Shows storage failures until dismissed or timed out.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let notice = ctx.store().notice();

    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class="notice-banner" role="alert">
                <span class="notice-text">{move || notice.get().unwrap_or_default()}</span>
                <button class="notice-dismiss" title="Dismiss" on:click=move |_| ctx.dismiss_notice()>
                    "×"
                </button>
            </div>
        </Show>
    }
}
