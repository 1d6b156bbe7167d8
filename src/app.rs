//! Week Planner App
//!
//! Loads the saved week, wires up context and both drag engines, and lays
//! out the header, navigation and day strip.

use leptos::prelude::*;
use leptos_dragdrop::DropMarker;
use reactive_stores::Store;

use crate::calendar::{today, week_days};
use crate::components::{DayColumn, FilterNav, NoticeBanner, SearchBar, WeekNav};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::drag::Engines;
use crate::planner::PlannerHost;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let store = Store::new(AppState::default());
    let mut ctx = AppContext::new(config, today(), store);
    let restored = ctx.restore();

    provide_context(store);
    provide_context(ctx);
    if let Err(err) = restored {
        log::error!("[STORAGE] could not load saved week: {}", err);
        ctx.notify(format!("Saved tasks could not be loaded ({}). Changes will not be saved.", err));
    }

    let engines = Engines::new(PlannerHost::new(ctx));
    provide_context(engines);

    let days = Memo::new(move |_| week_days(ctx.today, store.week_offset().get(), config.days_per_strip));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-title">"Week Planner"</h1>
                <SearchBar />
            </header>
            <FilterNav />
            <NoticeBanner />
            <WeekNav days=days />
            <main class="week-strip">
                <For each=move || days.get() key=|day| *day let:day>
                    <DayColumn day=day />
                </For>
            </main>
            <DropMarker indicator=engines.items.indicator() />
            <DropMarker indicator=engines.cards.indicator() />
        </div>
    }
}
