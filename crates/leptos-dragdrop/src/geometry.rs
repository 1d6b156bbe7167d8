//! Geometry
//!
//! Client-space points, rectangles and the reordering axis.

/// Pointer position in client (viewport) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Direction along which siblings are ordered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Top-to-bottom (checklist items)
    Vertical,
    /// Left-to-right (cards in a day)
    Horizontal,
}

impl Axis {
    /// True when `point` lies in the leading half of `rect` along this axis.
    /// The midpoint itself belongs to the trailing half.
    pub fn precedes_midpoint(self, rect: &Rect, point: Point) -> bool {
        match self {
            Axis::Vertical => point.y < rect.top + rect.height / 2.0,
            Axis::Horizontal => point.x < rect.left + rect.width / 2.0,
        }
    }
}
