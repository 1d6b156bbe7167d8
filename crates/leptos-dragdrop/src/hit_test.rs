//! Hit Tester
//!
//! Maps a pointer position to a container and slot. Surfaces are read
//! innermost-first from `elementsFromPoint`; the first one belonging to
//! the engine's scope decides the result.

use wasm_bindgen::JsCast;

use crate::geometry::{Axis, Point, Rect};
use crate::kind::DragKind;
use crate::slot::{DropTarget, Slot};

/// DOM attributes the renderer stamps on drop surfaces
pub mod attrs {
    /// Engine scope, e.g. `item` or `card`
    pub const SCOPE: &str = "data-dnd-scope";
    /// One of the `ROLE_*` values
    pub const ROLE: &str = "data-dnd-role";
    /// Entry id on `entry` elements
    pub const ID: &str = "data-dnd-id";
    /// Container id on `container` and `entry` elements
    pub const CONTAINER: &str = "data-dnd-container";

    pub const ROLE_CONTAINER: &str = "container";
    pub const ROLE_ENTRY: &str = "entry";
    /// Structural child that is never a drop reference
    pub const ROLE_FIXED: &str = "fixed";
}

/// A recognized element under the pointer
#[derive(Clone, Debug, PartialEq)]
pub enum Surface<Container, Id> {
    Container { id: Container, rect: Rect },
    Entry { id: Id, container: Container, rect: Rect },
    Fixed,
}

/// Hit test result: the target plus the box the indicator is drawn against
#[derive(Clone, Debug, PartialEq)]
pub struct Hit<Container, Id> {
    pub target: DropTarget<Container, Id>,
    pub anchor: Rect,
}

/// Pick the drop target from surfaces ordered innermost-first.
pub fn resolve<Container, Id>(
    surfaces: impl IntoIterator<Item = Surface<Container, Id>>,
    point: Point,
    axis: Axis,
) -> Option<Hit<Container, Id>> {
    for surface in surfaces {
        match surface {
            Surface::Fixed => continue,
            Surface::Container { id, rect } => {
                return Some(Hit {
                    target: DropTarget::new(id, Slot::End),
                    anchor: rect,
                });
            }
            Surface::Entry { id, container, rect } => {
                let slot = if axis.precedes_midpoint(&rect, point) {
                    Slot::Before(id)
                } else {
                    Slot::After(id)
                };
                return Some(Hit {
                    target: DropTarget::new(container, slot),
                    anchor: rect,
                });
            }
        }
    }
    None
}

/// Interpret one element as a surface of kind `K`
fn surface_of<K: DragKind>(element: &web_sys::Element) -> Option<Surface<K::Container, K::Id>> {
    if element.get_attribute(attrs::SCOPE).as_deref() != Some(K::SCOPE) {
        return None;
    }
    let rect = Rect::from(&element.get_bounding_client_rect());
    let container = || {
        element
            .get_attribute(attrs::CONTAINER)
            .and_then(|raw| K::parse_container(&raw))
    };
    match element.get_attribute(attrs::ROLE)?.as_str() {
        attrs::ROLE_CONTAINER => Some(Surface::Container { id: container()?, rect }),
        attrs::ROLE_ENTRY => {
            let id = element.get_attribute(attrs::ID).and_then(|raw| K::parse_id(&raw))?;
            Some(Surface::Entry { id, container: container()?, rect })
        }
        attrs::ROLE_FIXED => Some(Surface::Fixed),
        _ => None,
    }
}

/// Surfaces of kind `K` under `point`, innermost first
pub fn surfaces_at<K: DragKind>(document: &web_sys::Document, point: Point) -> Vec<Surface<K::Container, K::Id>> {
    document
        .elements_from_point(point.x as f32, point.y as f32)
        .iter()
        .filter_map(|value| value.dyn_into::<web_sys::Element>().ok())
        .filter_map(|element| surface_of::<K>(&element))
        .collect()
}

/// Resolve the drop target under `point` for kind `K`
pub fn hit_test<K: DragKind>(document: &web_sys::Document, point: Point) -> Option<Hit<K::Container, K::Id>> {
    resolve(surfaces_at::<K>(document, point), point, K::AXIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    type S = Surface<&'static str, &'static str>;

    fn entry(id: &'static str, container: &'static str, rect: Rect) -> S {
        Surface::Entry { id, container, rect }
    }

    #[test]
    fn test_entry_upper_half_is_before() {
        let rect = Rect::new(0.0, 100.0, 200.0, 30.0);
        let hit = resolve(vec![entry("i2", "c1", rect)], Point::new(10.0, 105.0), Axis::Vertical).unwrap();
        assert_eq!(hit.target, DropTarget::new("c1", Slot::Before("i2")));
        assert_eq!(hit.anchor, rect);
    }

    #[test]
    fn test_entry_lower_half_is_after() {
        let rect = Rect::new(0.0, 100.0, 200.0, 30.0);
        let hit = resolve(vec![entry("i2", "c1", rect)], Point::new(10.0, 120.0), Axis::Vertical).unwrap();
        assert_eq!(hit.target.slot, Slot::After("i2"));
    }

    #[test]
    fn test_horizontal_axis_uses_x() {
        let rect = Rect::new(300.0, 0.0, 100.0, 400.0);
        let left = resolve(vec![entry("c2", "d1", rect)], Point::new(320.0, 390.0), Axis::Horizontal).unwrap();
        let right = resolve(vec![entry("c2", "d1", rect)], Point::new(380.0, 10.0), Axis::Horizontal).unwrap();
        assert_eq!(left.target.slot, Slot::Before("c2"));
        assert_eq!(right.target.slot, Slot::After("c2"));
    }

    #[test]
    fn test_container_appends() {
        let rect = Rect::new(0.0, 0.0, 200.0, 300.0);
        let hit = resolve(
            vec![S::Container { id: "c2", rect }],
            Point::new(50.0, 280.0),
            Axis::Vertical,
        )
        .unwrap();
        assert_eq!(hit.target, DropTarget::new("c2", Slot::End));
    }

    #[test]
    fn test_innermost_surface_wins() {
        let list = Rect::new(0.0, 0.0, 200.0, 300.0);
        let row = Rect::new(0.0, 40.0, 200.0, 20.0);
        let hit = resolve(
            vec![entry("i1", "c1", row), S::Container { id: "c1", rect: list }],
            Point::new(5.0, 58.0),
            Axis::Vertical,
        )
        .unwrap();
        assert_eq!(hit.target.slot, Slot::After("i1"));
    }

    #[test]
    fn test_fixed_row_falls_through_to_container() {
        let list = Rect::new(0.0, 0.0, 200.0, 300.0);
        let hit = resolve(
            vec![S::Fixed, S::Container { id: "c1", rect: list }],
            Point::new(5.0, 5.0),
            Axis::Vertical,
        )
        .unwrap();
        assert_eq!(hit.target, DropTarget::new("c1", Slot::End));
    }

    #[test]
    fn test_nothing_under_pointer() {
        assert_eq!(resolve(Vec::<S>::new(), Point::default(), Axis::Vertical), None);
        assert_eq!(resolve(vec![S::Fixed], Point::default(), Axis::Vertical), None);
    }
}
