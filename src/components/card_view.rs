//! Card View Component
//!
//! A titled checklist inside a day. The card itself is an entry of the
//! card engine; its checklist is a container of the item engine.

use leptos::prelude::*;
use leptos_dragdrop::{attrs, DragKind};

use super::{DeleteConfirmButton, ItemRow, NewItemInput};
use crate::context::AppContext;
use crate::drag::{use_engines, CardDrag, ItemDrag};
use crate::filter::card_visible;
use crate::models::{CardId, DayKey, ItemId};
use crate::presentation::display_title;
use crate::store::{store_card, AppStateStoreFields};

#[component]
pub fn CardView(id: CardId, day: DayKey) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = ctx.store();
    let engine = use_engines().cards;
    let new_item_ref = NodeRef::<leptos::html::Input>::new();

    let card = Memo::new({
        let id = id.clone();
        move |_| store_card(&store, &id)
    });

    let visible = move || {
        let filter = store.filter().get();
        card.with(|card| {
            card.as_ref().is_some_and(|card| {
                store.search().with(|search| card_visible(day, card, ctx.today, filter, search))
            })
        })
    };
    let title = move || card.with(|card| card.as_ref().map(|card| card.title.clone()).unwrap_or_default());
    // Display order: completed items sink to the bottom
    let item_ids = move || {
        card.with(|card| {
            card.as_ref()
                .map(|card| ItemDrag::present(&card.items).into_iter().map(|item| item.id.clone()).collect())
                .unwrap_or_else(Vec::<ItemId>::new)
        })
    };
    let dragging = {
        let id = id.clone();
        move || engine.is_dragging(&id)
    };

    let on_title_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if input.value().trim().is_empty() {
            input.set_value(&store.week().with_untracked(|week| week.next_untitled_title()));
        }
        // Blur saves; then continue with the first to-do
        let _ = input.blur();
        if let Some(next) = new_item_ref.get_untracked() {
            let _ = next.focus();
        }
    };

    let save_title = {
        let id = id.clone();
        move |ev: web_sys::FocusEvent| {
            let value = event_target::<web_sys::HtmlInputElement>(&ev).value();
            ctx.mutate_week(|week| week.rename_card(&id, value.trim()));
        }
    };

    let delete = Callback::new({
        let id = id.clone();
        move |_| {
            if let Some(card) = ctx.store().week().with_untracked(|week| week.card(&id).cloned()) {
                log::info!("[APP] deleting card '{}' with {} items", display_title(&card), card.items.len());
            }
            ctx.mutate_week(|week| week.delete_card(&id).is_some());
        }
    });

    let checklist_card = id.clone();
    view! {
        <article
            class=move || {
                let mut class = String::from("card");
                if dragging() {
                    class.push_str(" dragging");
                }
                if !visible() {
                    class.push_str(" hidden");
                }
                class
            }
            data-dnd-scope=CardDrag::SCOPE
            data-dnd-role=attrs::ROLE_ENTRY
            data-dnd-id=id.to_string()
            data-dnd-container=day.to_string()
        >
            <header class="card-header">
                <span class="drag-handle card-handle" title="Drag to move" on:pointerdown=engine.make_on_pointerdown(id.clone())>
                    "⠿"
                </span>
                <input
                    type="text"
                    class="card-title-input"
                    placeholder="Enter card name..."
                    prop:value=title
                    on:keydown=on_title_keydown
                    on:blur=save_title
                />
                <DeleteConfirmButton button_class="card-delete-btn" prompt="Delete card?" on_confirm=delete />
            </header>
            <ul
                class="checklist"
                data-dnd-scope=ItemDrag::SCOPE
                data-dnd-role=attrs::ROLE_CONTAINER
                data-dnd-container=id.to_string()
            >
                <NewItemInput card=id.clone() input_ref=new_item_ref />
                <For each=item_ids key=|item| item.clone() let:item>
                    <ItemRow id=item card=checklist_card.clone() />
                </For>
            </ul>
        </article>
    }
}
