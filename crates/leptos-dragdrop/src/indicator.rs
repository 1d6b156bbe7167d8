//! Drop Indicator
//!
//! A single reusable line marking where the dragged entry would land.

use leptos::prelude::*;

use crate::geometry::{Axis, Rect};
use crate::hit_test::Hit;
use crate::slot::Slot;

/// Direction of the marker line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOrientation {
    Horizontal,
    Vertical,
}

/// Where and how to draw the marker, in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorPlacement {
    pub orientation: LineOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
}

impl IndicatorPlacement {
    /// Inline style for a `position: fixed` marker element
    pub fn style(&self) -> String {
        match self.orientation {
            LineOrientation::Horizontal => format!(
                "left: {:.1}px; top: {:.1}px; width: {:.1}px;",
                self.x, self.y, self.length
            ),
            LineOrientation::Vertical => format!(
                "left: {:.1}px; top: {:.1}px; height: {:.1}px;",
                self.x, self.y, self.length
            ),
        }
    }

    pub fn class(&self) -> &'static str {
        match self.orientation {
            LineOrientation::Horizontal => "drop-indicator horizontal active",
            LineOrientation::Vertical => "drop-indicator vertical active",
        }
    }
}

/// Marker position for a hit. Leading slots draw on the anchor's leading
/// edge, trailing slots on its trailing edge.
pub fn place<Container, Id>(axis: Axis, hit: &Hit<Container, Id>) -> IndicatorPlacement {
    let leading = matches!(hit.target.slot, Slot::Start | Slot::Before(_));
    let Rect { left, top, width, height } = hit.anchor;
    match axis {
        Axis::Vertical => IndicatorPlacement {
            orientation: LineOrientation::Horizontal,
            x: left,
            y: if leading { top } else { hit.anchor.bottom() },
            length: width,
        },
        Axis::Horizontal => IndicatorPlacement {
            orientation: LineOrientation::Vertical,
            x: if leading { left } else { hit.anchor.right() },
            y: top,
            length: height,
        },
    }
}

/// Reactive handle to one engine's marker
#[derive(Clone, Copy)]
pub struct DropIndicator {
    placement: RwSignal<Option<IndicatorPlacement>>,
}

impl DropIndicator {
    pub fn new() -> Self {
        Self { placement: RwSignal::new(None) }
    }

    /// Move the marker. Unchanged placements do not notify subscribers;
    /// `None` hides it.
    pub fn show(&self, next: Option<IndicatorPlacement>) {
        if self.placement.get_untracked() != next {
            self.placement.set(next);
        }
    }

    pub fn clear(&self) {
        self.show(None);
    }

    /// Current placement (tracked)
    pub fn placement(&self) -> Option<IndicatorPlacement> {
        self.placement.get()
    }
}

impl Default for DropIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the marker line for `indicator`
#[component]
pub fn DropMarker(indicator: DropIndicator) -> impl IntoView {
    view! {
        <div
            class=move || indicator.placement().map(|p| p.class()).unwrap_or("drop-indicator")
            style=move || indicator.placement().map(|p| p.style()).unwrap_or_else(|| "display: none;".to_string())
            aria-hidden="true"
        />
    }
}
