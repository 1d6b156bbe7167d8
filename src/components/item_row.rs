//! Item Row Component
//!
//! One checklist entry: drag handle, checkbox, editable text, delete.

use leptos::prelude::*;
use leptos_dragdrop::{attrs, DragKind};

use crate::context::AppContext;
use crate::drag::{use_engines, ItemDrag};
use crate::models::{CardId, ItemId};
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemRow(id: ItemId, card: CardId) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = ctx.store();
    let engine = use_engines().items;

    let item = Memo::new({
        let id = id.clone();
        move |_| store.week().with(|week| week.item(&id).cloned())
    });
    let completed = move || item.with(|item| item.as_ref().is_some_and(|item| item.completed));
    let text = move || item.with(|item| item.as_ref().map(|item| item.text.clone()).unwrap_or_default());
    let dragging = {
        let id = id.clone();
        move || engine.is_dragging(&id)
    };

    let toggle = {
        let id = id.clone();
        move |ev| {
            let checked = event_target_checked(&ev);
            ctx.mutate_week(|week| week.set_item_completed(&id, checked));
        }
    };

    let save_text = {
        let id = id.clone();
        move |ev: web_sys::FocusEvent| {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let value = input.value();
            if value.trim().is_empty() {
                // Blank edits are rejected; show the saved text again
                input.set_value(&item.with_untracked(|item| {
                    item.as_ref().map(|item| item.text.clone()).unwrap_or_default()
                }));
                return;
            }
            ctx.mutate_week(|week| week.edit_item_text(&id, &value));
        }
    };

    let delete = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.mutate_week(|week| week.delete_item(&id).is_some());
        }
    };

    view! {
        <li
            class=move || {
                let mut class = String::from("item-row");
                if completed() {
                    class.push_str(" completed");
                }
                if dragging() {
                    class.push_str(" dragging");
                }
                class
            }
            data-dnd-scope=ItemDrag::SCOPE
            data-dnd-role=attrs::ROLE_ENTRY
            data-dnd-id=id.to_string()
            data-dnd-container=card.to_string()
        >
            // Completed items cannot be picked up; the engine refuses them too
            <span
                class=move || if completed() { "drag-handle inert" } else { "drag-handle" }
                title="Drag to move"
                on:pointerdown=engine.make_on_pointerdown(id.clone())
            >
                "⠿"
            </span>
            <input type="checkbox" prop:checked=completed on:change=toggle />
            <input type="text" class="item-text-input" prop:value=text on:blur=save_text />
            <button class="item-delete-btn" title="Delete item" on:click=delete>
                "×"
            </button>
        </li>
    }
}
