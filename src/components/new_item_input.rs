//! New Item Input Component
//!
//! First row of every checklist. Enter adds the text as a new item
//! directly beneath it.

use leptos::prelude::*;
use leptos_dragdrop::{attrs, DragKind};

use crate::context::AppContext;
use crate::drag::ItemDrag;
use crate::models::CardId;

#[component]
pub fn NewItemInput(card: CardId, input_ref: NodeRef<leptos::html::Input>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let text = input.value();
        if text.trim().is_empty() {
            return;
        }
        let mut added = None;
        ctx.mutate_week(|week| {
            added = week.add_item(&card, &text);
            added.is_some()
        });
        if let Some(id) = added {
            log::debug!("[APP] added item {} to card {}", id, card);
            input.set_value("");
        }
    };

    // Never a drop reference: pointing here falls through to the checklist
    view! {
        <li class="new-item-row" data-dnd-scope=ItemDrag::SCOPE data-dnd-role=attrs::ROLE_FIXED>
            <input
                type="text"
                class="new-item-input"
                placeholder="New to-do..."
                node_ref=input_ref
                on:keydown=on_keydown
            />
        </li>
    }
}
