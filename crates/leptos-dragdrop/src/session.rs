//! Drag Session
//!
//! The state of one in-flight drag, from pointer-down to release.
//! Created fresh per drag and consumed on release.

use crate::geometry::Point;
use crate::kind::DragKind;
use crate::slot::{DropTarget, Position};

/// One drag in progress
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<Container, Id> {
    dragged: Id,
    origin: Position<Container>,
    pointer: Point,
    target: Option<DropTarget<Container, Id>>,
}

/// What a finished session hands to the committer
#[derive(Clone, Debug, PartialEq)]
pub struct Release<Container, Id> {
    pub dragged: Id,
    pub origin: Position<Container>,
    pub target: Option<DropTarget<Container, Id>>,
}

impl<Container: Clone + PartialEq, Id: Clone + PartialEq> DragSession<Container, Id> {
    /// Start a session on `id`, or `None` when the entry is unknown or not draggable.
    pub fn begin<K>(collections: &K::Collections, id: &Id, pointer: Point) -> Option<Self>
    where
        K: DragKind<Id = Id, Container = Container>,
    {
        let origin = K::locate(collections, id)?;
        let record = K::entries(collections, &origin.container)?.get(origin.index)?;
        if !K::is_draggable(record) {
            return None;
        }
        Some(Self {
            dragged: id.clone(),
            origin,
            pointer,
            target: None,
        })
    }

    pub fn dragged(&self) -> &Id {
        &self.dragged
    }

    pub fn origin(&self) -> &Position<Container> {
        &self.origin
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn target(&self) -> Option<&DropTarget<Container, Id>> {
        self.target.as_ref()
    }

    /// Record the latest pointer position and hit. Returns true when the target changed.
    pub fn track(&mut self, pointer: Point, target: Option<DropTarget<Container, Id>>) -> bool {
        self.pointer = pointer;
        if self.target == target {
            return false;
        }
        self.target = target;
        true
    }

    pub fn finish(self) -> Release<Container, Id> {
        Release {
            dragged: self.dragged,
            origin: self.origin,
            target: self.target,
        }
    }
}
