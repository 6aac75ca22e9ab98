use std::fmt;

use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, Zone};
use crate::text::TextElement;

/// A vertical band of text elements sharing horizontal extent across rows.
///
/// Members stay sorted by `top` ascending after every insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Bounding box; starts at `top = 0`, `height = 0`.
    pub rect: Rect,
    text_elements: Vec<TextElement>,
}

impl Zone for Column {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

fn sort_by_top(elements: &mut [TextElement]) {
    elements.sort_by(|a, b| a.rect.top.total_cmp(&b.rect.top));
}

impl Column {
    /// Create a column spanning `[left, left + width)`.
    ///
    /// The initial members are sorted but do not contribute to the bounds.
    pub fn new(left: f64, width: f64, mut text_elements: Vec<TextElement>) -> Self {
        sort_by_top(&mut text_elements);
        Self {
            rect: Rect::new(0.0, left, width, 0.0),
            text_elements,
        }
    }

    /// Members sorted by `top`.
    pub fn text_elements(&self) -> &[TextElement] {
        &self.text_elements
    }

    /// Consume the column, returning its members sorted by `top`.
    pub fn into_text_elements(self) -> Vec<TextElement> {
        self.text_elements
    }

    pub fn len(&self) -> usize {
        self.text_elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text_elements.is_empty()
    }

    /// Add a member, grow the bounds and re-sort by `top`.
    pub fn push(&mut self, te: TextElement) {
        self.update_boundaries(&te);
        self.text_elements.push(te);
        sort_by_top(&mut self.text_elements);
    }

    /// Expand the bounds to cover `text_element`.
    pub fn update_boundaries(&mut self, text_element: &TextElement) {
        self.rect.merge(&text_element.rect);
    }

    /// Whether `other` shares horizontal extent with this column and could be
    /// fused with it.
    pub fn contains(&self, other: &Column) -> bool {
        self.horizontally_overlaps(other)
    }

    /// Sum of consecutive `top` deltas divided by the member count.
    ///
    /// The divisor is the number of members, not the number of deltas, so the
    /// value is biased toward zero for short columns. Fails with
    /// [`LayoutError::DegenerateGeometry`] for fewer than two members.
    pub fn average_line_distance(&self) -> Result<f64> {
        let n = self.text_elements.len();
        if n < 2 {
            return Err(LayoutError::DegenerateGeometry(format!(
                "average line distance needs at least 2 members, column has {n}"
            )));
        }
        let total: f64 = self
            .text_elements
            .windows(2)
            .map(|pair| pair[1].rect.top - pair[0].rect.top)
            .sum();
        let average = total / n as f64;
        debug!(members = n, average, "column average line distance");
        Ok(average)
    }
}

impl Extend<TextElement> for Column {
    fn extend<I: IntoIterator<Item = TextElement>>(&mut self, iter: I) {
        for te in iter {
            self.push(te);
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts: Vec<&str> = self.text_elements.iter().map(|t| t.text.as_str()).collect();
        write!(
            f,
            "<Column: top={}, left={}, width={}, height={}, text_elements={}>",
            self.rect.top,
            self.rect.left,
            self.rect.width,
            self.rect.height,
            texts.join(", ")
        )
    }
}
