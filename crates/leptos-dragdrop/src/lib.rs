//! Leptos DragDrop
//!
//! Pointer-driven reordering of entries within and between containers.
//! One generic engine; each draggable entity type is a [`DragKind`].
//!
//! - [`hit_test`] resolves the pointer to a container and [`Slot`]
//! - [`indicator`] draws the drop line, [`dom::Ghost`] the floating preview
//! - [`commit`] applies the resulting move to the backing collections
//! - [`engine`] ties them to DOM pointer events

pub mod commit;
pub mod dom;
pub mod engine;
pub mod geometry;
pub mod hit_test;
pub mod indicator;
pub mod kind;
pub mod session;
pub mod slot;

#[cfg(test)]
mod testing;

pub use commit::{commit, plan_move, CommitError, MovePlan};
pub use engine::{DragEngine, DragHost};
pub use geometry::{Axis, Point, Rect};
pub use hit_test::{attrs, resolve, Hit, Surface};
pub use indicator::{place, DropIndicator, DropMarker, IndicatorPlacement, LineOrientation};
pub use kind::DragKind;
pub use session::{DragSession, Release};
pub use slot::{insertion_index, DropTarget, Position, Slot};
