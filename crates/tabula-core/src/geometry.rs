//! Axis-aligned rectangles and the overlap/distance vocabulary built on them.
//!
//! Coordinates use a page-local system with `top` increasing downward and
//! `left` increasing rightward.

use crate::settings::DEFAULT_OVERLAP_TOLERANCE;

/// A 2D point `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometric entity: an axis-aligned rectangle stored as origin plus extent.
///
/// - `top`: top edge (distance from top of page)
/// - `left`: left edge
/// - `width`, `height`: extent, non-negative by construction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Build a rectangle from its four edges.
    pub fn from_edges(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self::new(top, left, right - left, bottom - top)
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Center of the rectangle.
    pub fn midpoint(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Length of the shared vertical interval, clamped to zero.
    fn vertical_overlap(&self, other: &Rect) -> f64 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }

    /// Length of the shared horizontal interval, clamped to zero.
    fn horizontal_overlap(&self, other: &Rect) -> f64 {
        (self.right().min(other.right()) - self.left.max(other.left)).max(0.0)
    }

    /// Whether the two rectangles share part of a row (same visual line).
    pub fn vertically_overlaps(&self, other: &Rect) -> bool {
        self.vertical_overlap(other) > 0.0
    }

    /// Whether the two rectangles share part of a column.
    pub fn horizontally_overlaps(&self, other: &Rect) -> bool {
        self.horizontal_overlap(other) > 0.0
    }

    /// Intersection over union.
    ///
    /// Returns 0 when the union is empty (both rectangles degenerate in both
    /// axes), where the plain formula would divide zero by zero.
    pub fn overlap_ratio(&self, other: &Rect) -> f64 {
        let intersection = self.horizontal_overlap(other) * self.vertical_overlap(other);
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            return 0.0;
        }
        intersection / union
    }

    /// Whether the overlap ratio exceeds [`DEFAULT_OVERLAP_TOLERANCE`].
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_with_tolerance(other, DEFAULT_OVERLAP_TOLERANCE)
    }

    pub fn overlaps_with_tolerance(&self, other: &Rect, tolerance: f64) -> bool {
        self.overlap_ratio(other) > tolerance
    }

    /// Gap from this rectangle's right edge to `other`'s left edge.
    ///
    /// Directional: meaningful only when `other` lies to the right.
    pub fn horizontal_distance(&self, other: &Rect) -> f64 {
        (other.left - self.right()).abs()
    }

    /// Bottom-to-bottom delta.
    pub fn vertical_distance(&self, other: &Rect) -> f64 {
        (other.bottom() - self.bottom()).abs()
    }

    /// Expand to the union bounding box of `self` and `other`.
    pub fn merge(&mut self, other: &Rect) -> &mut Self {
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        self.top = self.top.min(other.top);
        self.left = self.left.min(other.left);
        self.width = right - self.left;
        self.height = bottom - self.top;
        self
    }

    /// Non-mutating counterpart of [`merge`](Rect::merge).
    pub fn union(&self, other: &Rect) -> Rect {
        let mut merged = *self;
        merged.merge(other);
        merged
    }
}

/// Anything that occupies a rectangle on the page.
///
/// Entities compose a [`Rect`] rather than extend it; this trait exposes the
/// rectangle's measures and predicates on the entity itself by delegation.
pub trait Zone {
    fn rect(&self) -> &Rect;

    fn top(&self) -> f64 {
        self.rect().top
    }

    fn left(&self) -> f64 {
        self.rect().left
    }

    fn width(&self) -> f64 {
        self.rect().width
    }

    fn height(&self) -> f64 {
        self.rect().height
    }

    fn bottom(&self) -> f64 {
        self.rect().bottom()
    }

    fn right(&self) -> f64 {
        self.rect().right()
    }

    fn area(&self) -> f64 {
        self.rect().area()
    }

    fn midpoint(&self) -> Point {
        self.rect().midpoint()
    }

    fn vertically_overlaps<Z: Zone + ?Sized>(&self, other: &Z) -> bool {
        self.rect().vertically_overlaps(other.rect())
    }

    fn horizontally_overlaps<Z: Zone + ?Sized>(&self, other: &Z) -> bool {
        self.rect().horizontally_overlaps(other.rect())
    }

    fn overlap_ratio<Z: Zone + ?Sized>(&self, other: &Z) -> f64 {
        self.rect().overlap_ratio(other.rect())
    }

    fn overlaps<Z: Zone + ?Sized>(&self, other: &Z) -> bool {
        self.rect().overlaps(other.rect())
    }

    fn overlaps_with_tolerance<Z: Zone + ?Sized>(&self, other: &Z, tolerance: f64) -> bool {
        self.rect().overlaps_with_tolerance(other.rect(), tolerance)
    }

    fn horizontal_distance<Z: Zone + ?Sized>(&self, other: &Z) -> f64 {
        self.rect().horizontal_distance(other.rect())
    }

    fn vertical_distance<Z: Zone + ?Sized>(&self, other: &Z) -> f64 {
        self.rect().vertical_distance(other.rect())
    }
}

impl Zone for Rect {
    fn rect(&self) -> &Rect {
        self
    }
}
