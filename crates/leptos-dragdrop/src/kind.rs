//! Drag Kinds
//!
//! One engine, parameterized per draggable entity type.

use std::fmt::Debug;

use crate::geometry::Axis;
use crate::slot::Position;

/// Describes one family of draggable entries and the containers holding them.
///
/// Implementors are usually uninhabited marker types; every method is an
/// associated function over the shared `Collections` type.
pub trait DragKind: 'static {
    /// Identity of a draggable entry
    type Id: Clone + PartialEq + Debug + Send + Sync + 'static;
    /// Identity of a container of entries
    type Container: Clone + PartialEq + Debug + Send + Sync + 'static;
    /// Backing record of an entry
    type Record;
    /// Whole data model the entries live in
    type Collections;

    /// Value of `data-dnd-scope` on this kind's DOM surfaces
    const SCOPE: &'static str;
    /// Reordering axis of sibling entries
    const AXIS: Axis;

    fn record_id(record: &Self::Record) -> &Self::Id;

    /// Whether a drag session may start on this record
    fn is_draggable(record: &Self::Record) -> bool;

    /// Ordered entries of a container
    fn entries<'a>(collections: &'a Self::Collections, container: &Self::Container) -> Option<&'a [Self::Record]>;

    /// Mutable ordered entries of a container
    fn entries_mut<'a>(collections: &'a mut Self::Collections, container: &Self::Container) -> Option<&'a mut Vec<Self::Record>>;

    /// Current position of an entry
    fn locate(collections: &Self::Collections, id: &Self::Id) -> Option<Position<Self::Container>>;

    /// Display order of a container's entries. Never changes stored order.
    fn present(records: &[Self::Record]) -> Vec<&Self::Record> {
        records.iter().collect()
    }

    fn parse_id(raw: &str) -> Option<Self::Id>;

    fn parse_container(raw: &str) -> Option<Self::Container>;

    /// Look up a record by id
    fn find<'a>(collections: &'a Self::Collections, id: &Self::Id) -> Option<&'a Self::Record> {
        let position = Self::locate(collections, id)?;
        Self::entries(collections, &position.container)?.get(position.index)
    }
}
