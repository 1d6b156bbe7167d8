//! Reorder Committer
//!
//! Turns a released session into a move on the backing collections.
//! Planning only reads, so a rejected drop never touches the data and
//! callers can skip change notification and persistence entirely.

use std::fmt::Debug;

use thiserror::Error;

use crate::kind::DragKind;
use crate::session::Release;
use crate::slot::{insertion_index, Position, Slot};

/// Why a release did not produce a move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error("released over no drop surface")]
    NoTarget,
    #[error("drop resolves to the origin position")]
    NoOpDrop,
    #[error("dragged entry {0} is no longer in its origin container")]
    OriginMissing(String),
    #[error("drop container {0} does not exist")]
    DestinationMissing(String),
    #[error("drop sibling {0} is not in the drop container")]
    SiblingMissing(String),
}

impl CommitError {
    /// True when the data model disagrees with what the UI showed.
    pub fn is_desync(&self) -> bool {
        matches!(
            self,
            CommitError::OriginMissing(_) | CommitError::DestinationMissing(_) | CommitError::SiblingMissing(_)
        )
    }
}

/// A validated move, ready to apply
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePlan<Container, Id> {
    pub dragged: Id,
    pub from: Position<Container>,
    /// Index is relative to the destination with the dragged entry removed
    pub to: Position<Container>,
}

impl<Container: Clone + PartialEq + Debug, Id: Clone + PartialEq + Debug> MovePlan<Container, Id> {
    pub fn crosses_containers(&self) -> bool {
        self.from.container != self.to.container
    }

    /// Remove the entry from its origin and insert it at the destination.
    pub fn apply<K>(&self, collections: &mut K::Collections) -> Result<(), CommitError>
    where
        K: DragKind<Id = Id, Container = Container>,
    {
        if K::entries(collections, &self.to.container).is_none() {
            return Err(CommitError::DestinationMissing(format!("{:?}", self.to.container)));
        }
        let origin = K::entries_mut(collections, &self.from.container)
            .ok_or_else(|| CommitError::OriginMissing(format!("{:?}", self.dragged)))?;
        if origin.get(self.from.index).map(K::record_id) != Some(&self.dragged) {
            return Err(CommitError::OriginMissing(format!("{:?}", self.dragged)));
        }
        let record = origin.remove(self.from.index);

        let destination = K::entries_mut(collections, &self.to.container)
            .ok_or_else(|| CommitError::DestinationMissing(format!("{:?}", self.to.container)))?;
        let index = self.to.index.min(destination.len());
        destination.insert(index, record);
        Ok(())
    }
}

/// Validate a release against the current collections without mutating them.
pub fn plan_move<K: DragKind>(
    collections: &K::Collections,
    release: &Release<K::Container, K::Id>,
) -> Result<MovePlan<K::Container, K::Id>, CommitError> {
    let target = release.target.as_ref().ok_or(CommitError::NoTarget)?;
    let dragged = &release.dragged;
    let origin = &release.origin.container;

    let origin_entries = K::entries(collections, origin)
        .ok_or_else(|| CommitError::OriginMissing(format!("{:?}", dragged)))?;
    let from = origin_entries
        .iter()
        .position(|r| K::record_id(r) == dragged)
        .ok_or_else(|| CommitError::OriginMissing(format!("{:?}", dragged)))?;

    if target.slot.references(dragged) {
        return Err(CommitError::NoOpDrop);
    }

    let same_container = target.container == *origin;
    if same_container && keeps_shown_position::<K>(origin_entries, dragged, &target.slot) {
        return Err(CommitError::NoOpDrop);
    }
    let remaining: Vec<K::Id> = K::entries(collections, &target.container)
        .ok_or_else(|| CommitError::DestinationMissing(format!("{:?}", target.container)))?
        .iter()
        .map(K::record_id)
        .filter(|id| !(same_container && *id == dragged))
        .cloned()
        .collect();

    let to = insertion_index(&remaining, &target.slot)
        .ok_or_else(|| CommitError::SiblingMissing(format!("{:?}", target.slot.sibling())))?;

    if same_container && to == from {
        return Err(CommitError::NoOpDrop);
    }

    Ok(MovePlan {
        dragged: dragged.clone(),
        from: Position::new(origin.clone(), from),
        to: Position::new(target.container.clone(), to),
    })
}

/// Whether dropping at `slot` leaves `dragged` where it already shows.
/// Slots come from the on-screen order, which `K::present` may reorder.
fn keeps_shown_position<K: DragKind>(records: &[K::Record], dragged: &K::Id, slot: &Slot<K::Id>) -> bool {
    let shown: Vec<&K::Id> = K::present(records).into_iter().map(|r| K::record_id(r)).collect();
    let Some(at) = shown.iter().position(|id| *id == dragged) else {
        return false;
    };
    let rest: Vec<K::Id> = shown
        .into_iter()
        .filter(|id| *id != dragged)
        .cloned()
        .collect();
    insertion_index(&rest, slot) == Some(at)
}

/// Plan and apply in one step.
pub fn commit<K: DragKind>(
    collections: &mut K::Collections,
    release: &Release<K::Container, K::Id>,
) -> Result<MovePlan<K::Container, K::Id>, CommitError> {
    let plan = plan_move::<K>(collections, release)?;
    plan.apply::<K>(collections)?;
    Ok(plan)
}
