//! Drag Kinds
//!
//! The two instantiations of the generic engine: checklist items moving
//! between cards, and cards moving between days.

use leptos::prelude::*;
use leptos_dragdrop::{Axis, DragEngine, DragKind, Position};

use crate::models::{CardId, CardRecord, DayKey, ItemId, ItemRecord};
use crate::planner::PlannerHost;
use crate::presentation::completed_to_tail;
use crate::week::WeekStore;

/// Checklist items; containers are cards
pub enum ItemDrag {}

/// Cards; containers are days
pub enum CardDrag {}

pub type ItemEngine = DragEngine<ItemDrag, PlannerHost>;
pub type CardEngine = DragEngine<CardDrag, PlannerHost>;

/// Both engines, provided via context
#[derive(Clone, Copy)]
pub struct Engines {
    pub items: ItemEngine,
    pub cards: CardEngine,
}

impl Engines {
    pub fn new(host: PlannerHost) -> Self {
        Self {
            items: DragEngine::new(host),
            cards: DragEngine::new(host),
        }
    }
}

pub fn use_engines() -> Engines {
    expect_context::<Engines>()
}

impl DragKind for ItemDrag {
    type Id = ItemId;
    type Container = CardId;
    type Record = ItemRecord;
    type Collections = WeekStore;

    const SCOPE: &'static str = "item";
    const AXIS: Axis = Axis::Vertical;

    fn record_id(record: &ItemRecord) -> &ItemId {
        &record.id
    }

    /// Completed items stay put
    fn is_draggable(record: &ItemRecord) -> bool {
        !record.completed
    }

    fn entries<'a>(week: &'a WeekStore, card: &CardId) -> Option<&'a [ItemRecord]> {
        week.card(card).map(|card| card.items.as_slice())
    }

    fn entries_mut<'a>(week: &'a mut WeekStore, card: &CardId) -> Option<&'a mut Vec<ItemRecord>> {
        week.card_mut(card).map(|card| &mut card.items)
    }

    fn locate(week: &WeekStore, id: &ItemId) -> Option<Position<CardId>> {
        week.locate_item(id).map(|(card, index)| Position::new(card, index))
    }

    fn present(records: &[ItemRecord]) -> Vec<&ItemRecord> {
        completed_to_tail(records)
    }

    fn parse_id(raw: &str) -> Option<ItemId> {
        (!raw.is_empty()).then(|| ItemId::from(raw))
    }

    fn parse_container(raw: &str) -> Option<CardId> {
        (!raw.is_empty()).then(|| CardId::from(raw))
    }
}

impl DragKind for CardDrag {
    type Id = CardId;
    type Container = DayKey;
    type Record = CardRecord;
    type Collections = WeekStore;

    const SCOPE: &'static str = "card";
    const AXIS: Axis = Axis::Horizontal;

    fn record_id(record: &CardRecord) -> &CardId {
        &record.id
    }

    fn is_draggable(_record: &CardRecord) -> bool {
        true
    }

    /// Every day is a valid container, saved or not
    fn entries<'a>(week: &'a WeekStore, day: &DayKey) -> Option<&'a [CardRecord]> {
        Some(week.cards(day))
    }

    fn entries_mut<'a>(week: &'a mut WeekStore, day: &DayKey) -> Option<&'a mut Vec<CardRecord>> {
        Some(week.cards_mut(*day))
    }

    fn locate(week: &WeekStore, id: &CardId) -> Option<Position<DayKey>> {
        week.locate_card(id).map(|(day, index)| Position::new(day, index))
    }

    fn parse_id(raw: &str) -> Option<CardId> {
        (!raw.is_empty()).then(|| CardId::from(raw))
    }

    fn parse_container(raw: &str) -> Option<DayKey> {
        raw.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_dragdrop::{commit, CommitError, DragSession, DropTarget, Point, Release, Slot};
    use pretty_assertions::assert_eq;

    fn day(raw: &str) -> DayKey {
        raw.parse().unwrap()
    }

    fn item(id: &str, text: &str) -> ItemRecord {
        ItemRecord { id: ItemId::from(id), text: text.to_string(), completed: false }
    }

    fn card(id: &str, items: Vec<ItemRecord>) -> CardRecord {
        CardRecord { id: CardId::from(id), title: String::new(), items }
    }

    fn item_ids(week: &WeekStore, card: &str) -> Vec<String> {
        week.card(&CardId::from(card))
            .map(|c| c.items.iter().map(|i| i.id.to_string()).collect())
            .unwrap_or_default()
    }

    fn item_release(week: &WeekStore, id: &str, target: Option<(&str, Slot<ItemId>)>) -> Release<CardId, ItemId> {
        let session = DragSession::begin::<ItemDrag>(week, &ItemId::from(id), Point::default()).expect("draggable");
        let mut release = session.finish();
        release.target = target.map(|(card, slot)| DropTarget::new(CardId::from(card), slot));
        release
    }

    #[test]
    fn test_reorder_items_within_card() {
        let mut week = WeekStore::new();
        week.set_cards(
            day("2024-06-03"),
            vec![card("c1", vec![item("i1", "buy milk"), item("i2", "pay bills")])],
        );

        let release = item_release(&week, "i2", Some(("c1", Slot::Before(ItemId::from("i1")))));
        commit::<ItemDrag>(&mut week, &release).unwrap();

        assert_eq!(item_ids(&week, "c1"), vec!["i2", "i1"]);
        assert_eq!(week.item_count(), 2);
        assert_eq!(week.item(&ItemId::from("i1")).unwrap().text, "buy milk");
    }

    #[test]
    fn test_item_moves_to_card_on_another_day() {
        let mut week = WeekStore::new();
        week.set_cards(day("2024-06-03"), vec![card("c1", vec![item("i1", "buy milk")])]);
        week.set_cards(day("2024-06-04"), vec![card("c2", vec![])]);
        let before = week.item(&ItemId::from("i1")).cloned();

        let release = item_release(&week, "i1", Some(("c2", Slot::End)));
        let plan = commit::<ItemDrag>(&mut week, &release).unwrap();

        assert!(plan.crosses_containers());
        assert!(item_ids(&week, "c1").is_empty());
        assert_eq!(item_ids(&week, "c2"), vec!["i1"]);
        assert_eq!(week.item(&ItemId::from("i1")).cloned(), before);
    }

    #[test]
    fn test_completed_item_cannot_be_dragged() {
        let mut week = WeekStore::new();
        let mut done = item("i1", "done");
        done.completed = true;
        week.set_cards(day("2024-06-03"), vec![card("c1", vec![done])]);
        assert!(DragSession::begin::<ItemDrag>(&week, &ItemId::from("i1"), Point::default()).is_none());
    }

    #[test]
    fn test_item_presentation_puts_completed_last() {
        let mut items = vec![item("i1", "a"), item("i2", "b")];
        items[0].completed = true;
        let shown: Vec<_> = ItemDrag::present(&items).iter().map(|i| i.id.to_string()).collect();
        assert_eq!(shown, vec!["i2", "i1"]);
    }

    #[test]
    fn test_card_moves_between_days() {
        let mut week = WeekStore::new();
        week.set_cards(day("2024-06-03"), vec![card("c1", vec![item("i1", "x")]), card("c2", vec![])]);
        week.set_cards(day("2024-06-05"), vec![card("c3", vec![])]);

        let session = DragSession::begin::<CardDrag>(&week, &CardId::from("c1"), Point::default()).unwrap();
        let mut release = session.finish();
        release.target = Some(DropTarget::new(day("2024-06-05"), Slot::After(CardId::from("c3"))));
        commit::<CardDrag>(&mut week, &release).unwrap();

        assert_eq!(week.locate_card(&CardId::from("c1")), Some((day("2024-06-05"), 1)));
        assert_eq!(week.locate_card(&CardId::from("c2")), Some((day("2024-06-03"), 0)));
        assert_eq!(item_ids(&week, "c1"), vec!["i1"]);
        assert_eq!(week.card_count(), 3);
    }

    #[test]
    fn test_card_moves_to_unsaved_day() {
        let mut week = WeekStore::new();
        week.set_cards(day("2024-06-03"), vec![card("c1", vec![])]);

        let session = DragSession::begin::<CardDrag>(&week, &CardId::from("c1"), Point::default()).unwrap();
        let mut release = session.finish();
        release.target = Some(DropTarget::new(day("2024-06-08"), Slot::End));
        commit::<CardDrag>(&mut week, &release).unwrap();

        assert_eq!(week.locate_card(&CardId::from("c1")), Some((day("2024-06-08"), 0)));
    }

    #[test]
    fn test_card_dropped_on_itself_is_noop() {
        let mut week = WeekStore::new();
        week.set_cards(day("2024-06-03"), vec![card("c1", vec![])]);
        let original = week.clone();

        let session = DragSession::begin::<CardDrag>(&week, &CardId::from("c1"), Point::default()).unwrap();
        let mut release = session.finish();
        release.target = Some(DropTarget::new(day("2024-06-03"), Slot::Before(CardId::from("c1"))));

        assert_eq!(commit::<CardDrag>(&mut week, &release), Err(CommitError::NoOpDrop));
        assert_eq!(week, original);
    }

    #[test]
    fn test_ids_survive_many_moves() {
        let mut week = WeekStore::new();
        week.set_cards(
            day("2024-06-03"),
            vec![card("c1", vec![item("i1", "a"), item("i2", "b"), item("i3", "c")]), card("c2", vec![])],
        );
        let moves = [
            ("i1", "c2", Slot::End),
            ("i3", "c2", Slot::Before(ItemId::from("i1"))),
            ("i1", "c1", Slot::Start),
            ("i2", "c2", Slot::After(ItemId::from("i3"))),
        ];
        for (id, to, slot) in moves {
            let release = item_release(&week, id, Some((to, slot)));
            commit::<ItemDrag>(&mut week, &release).unwrap();
            assert_eq!(week.item_count(), 3);
        }
        assert_eq!(item_ids(&week, "c1"), vec!["i1"]);
        assert_eq!(item_ids(&week, "c2"), vec!["i3", "i2"]);
    }
}
