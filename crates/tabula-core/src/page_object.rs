//! PageObject enum for dynamically typed entity handling.
//!
//! [`PageObject`] owns one entity of any kind so heterogeneous collections
//! can be passed around; text-element operations that receive one check its
//! kind and fail with [`LayoutError::TypeMismatch`] on anything else.

use crate::column::Column;
use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, Zone};
use crate::line::Line;
use crate::ruling::Ruling;
use crate::text::TextElement;

/// An owned entity of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PageObject {
    /// A bare rectangle.
    Rect(Rect),
    /// A text element.
    Text(TextElement),
    /// A ruling segment.
    Ruling(Ruling),
    /// An assembled line.
    Line(Line),
    /// A grouped column.
    Column(Column),
}

impl PageObject {
    /// Human-readable name of the wrapped kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PageObject::Rect(_) => "rect",
            PageObject::Text(_) => "text element",
            PageObject::Ruling(_) => "ruling",
            PageObject::Line(_) => "line",
            PageObject::Column(_) => "column",
        }
    }

    /// Borrow the wrapped text element.
    pub fn as_text(&self) -> Result<&TextElement> {
        match self {
            PageObject::Text(t) => Ok(t),
            other => Err(LayoutError::TypeMismatch {
                expected: "text element",
                found: other.kind(),
            }),
        }
    }
}

impl Zone for PageObject {
    fn rect(&self) -> &Rect {
        match self {
            PageObject::Rect(r) => r,
            PageObject::Text(t) => t.rect(),
            PageObject::Ruling(r) => r.rect(),
            PageObject::Line(l) => l.rect(),
            PageObject::Column(c) => c.rect(),
        }
    }
}

impl TryFrom<PageObject> for TextElement {
    type Error = LayoutError;

    fn try_from(object: PageObject) -> Result<Self> {
        match object {
            PageObject::Text(t) => Ok(t),
            other => Err(LayoutError::TypeMismatch {
                expected: "text element",
                found: other.kind(),
            }),
        }
    }
}

impl From<Rect> for PageObject {
    fn from(r: Rect) -> Self {
        PageObject::Rect(r)
    }
}

impl From<TextElement> for PageObject {
    fn from(t: TextElement) -> Self {
        PageObject::Text(t)
    }
}

impl From<Ruling> for PageObject {
    fn from(r: Ruling) -> Self {
        PageObject::Ruling(r)
    }
}

impl From<Line> for PageObject {
    fn from(l: Line) -> Self {
        PageObject::Line(l)
    }
}

impl From<Column> for PageObject {
    fn from(c: Column) -> Self {
        PageObject::Column(c)
    }
}
