//! Day Column Component
//!
//! One day of the strip: its label, the add-card button and the card row.

use leptos::prelude::*;
use leptos_dragdrop::{attrs, DragKind};

use super::CardView;
use crate::calendar::long_label;
use crate::context::AppContext;
use crate::drag::CardDrag;
use crate::models::DayKey;
use crate::store::store_card_ids;

#[component]
pub fn DayColumn(day: DayKey) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = ctx.store();
    let is_today = day == ctx.today;

    let add_card = move |_| {
        ctx.mutate_week(|week| {
            let id = week.add_card(day);
            log::debug!("[APP] added card {} on {}", id, day);
            true
        });
    };

    view! {
        <section class=if is_today { "day-column today" } else { "day-column" }>
            <header class="day-header">
                <h2 class="day-label">{long_label(day)}</h2>
                <button class="add-card-btn" on:click=add_card>"+ Add card"</button>
            </header>
            <div
                class="card-row"
                data-dnd-scope=CardDrag::SCOPE
                data-dnd-role=attrs::ROLE_CONTAINER
                data-dnd-container=day.to_string()
            >
                <For each=move || store_card_ids(&store, day) key=|id| id.clone() let:id>
                    <CardView id=id day=day />
                </For>
            </div>
        </section>
    }
}
