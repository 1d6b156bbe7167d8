//! Test fixture: lanes of string-keyed cards.

use crate::geometry::Axis;
use crate::kind::DragKind;
use crate::slot::Position;

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub id: String,
    pub locked: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    pub lanes: Vec<(String, Vec<Entry>)>,
}

impl Board {
    pub fn ids(&self, lane: &str) -> Vec<&str> {
        self.lanes
            .iter()
            .find(|(name, _)| name == lane)
            .map(|(_, entries)| entries.iter().map(|e| e.id.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.lanes.iter().map(|(_, entries)| entries.len()).sum()
    }
}

pub fn board(lanes: &[(&str, &[&str])]) -> Board {
    Board {
        lanes: lanes
            .iter()
            .map(|(name, ids)| {
                let entries = ids
                    .iter()
                    .map(|id| Entry { id: id.to_string(), locked: false })
                    .collect();
                (name.to_string(), entries)
            })
            .collect(),
    }
}

pub enum Lane {}

impl DragKind for Lane {
    type Id = String;
    type Container = String;
    type Record = Entry;
    type Collections = Board;

    const SCOPE: &'static str = "lane";
    const AXIS: Axis = Axis::Vertical;

    fn record_id(record: &Entry) -> &String {
        &record.id
    }

    fn is_draggable(record: &Entry) -> bool {
        !record.locked
    }

    fn entries<'a>(board: &'a Board, lane: &String) -> Option<&'a [Entry]> {
        board.lanes.iter().find(|(name, _)| name == lane).map(|(_, e)| e.as_slice())
    }

    fn entries_mut<'a>(board: &'a mut Board, lane: &String) -> Option<&'a mut Vec<Entry>> {
        board.lanes.iter_mut().find(|(name, _)| name == lane).map(|(_, e)| e)
    }

    fn locate(board: &Board, id: &String) -> Option<Position<String>> {
        board.lanes.iter().find_map(|(name, entries)| {
            entries
                .iter()
                .position(|e| &e.id == id)
                .map(|index| Position::new(name.clone(), index))
        })
    }

    /// Locked entries sink to the tail
    fn present(entries: &[Entry]) -> Vec<&Entry> {
        let (open, locked): (Vec<&Entry>, Vec<&Entry>) = entries.iter().partition(|e| !e.locked);
        open.into_iter().chain(locked).collect()
    }

    fn parse_id(raw: &str) -> Option<String> {
        (!raw.is_empty()).then(|| raw.to_string())
    }

    fn parse_container(raw: &str) -> Option<String> {
        (!raw.is_empty()).then(|| raw.to_string())
    }
}
