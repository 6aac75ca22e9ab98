use tracing::trace;

use crate::geometry::{Rect, Zone};
use crate::text::TextElement;

/// Text elements inferred to share a visual row.
///
/// Members are kept in insertion order. Callers that need reading order sort
/// by `left` (see [`Line::text`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Bounding box of every element absorbed so far.
    pub rect: Rect,
    /// Members in insertion order.
    pub text_elements: Vec<TextElement>,
}

impl Zone for Line {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text_elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text_elements.len()
    }

    /// Absorb a text element.
    ///
    /// An element that horizontally overlaps an existing member is merged into
    /// that member (first match in insertion order); otherwise it becomes a new
    /// member. The line's bounds grow to cover `t` either way.
    pub fn push(&mut self, t: TextElement) {
        if self.text_elements.is_empty() {
            self.rect = t.rect;
            self.text_elements.push(t);
            return;
        }

        self.rect.merge(&t.rect);
        match self
            .text_elements
            .iter_mut()
            .find(|member| member.horizontally_overlaps(&t))
        {
            Some(member) => {
                trace!(member = %member.text, absorbed = %t.text, "line: same column slot");
                member.merge(t);
            }
            None => self.text_elements.push(t),
        }
    }

    /// Members in left-to-right order.
    pub fn sorted_by_left(&self) -> Vec<&TextElement> {
        let mut sorted: Vec<&TextElement> = self.text_elements.iter().collect();
        sorted.sort_by(|a, b| a.rect.left.total_cmp(&b.rect.left));
        sorted
    }

    /// Member texts concatenated in left-to-right order.
    pub fn text(&self) -> String {
        self.sorted_by_left()
            .into_iter()
            .map(|t| t.text.as_str())
            .collect()
    }
}

impl Extend<TextElement> for Line {
    fn extend<I: IntoIterator<Item = TextElement>>(&mut self, iter: I) {
        for t in iter {
            self.push(t);
        }
    }
}

impl FromIterator<TextElement> for Line {
    fn from_iter<I: IntoIterator<Item = TextElement>>(iter: I) -> Self {
        let mut line = Line::new();
        line.extend(iter);
        line
    }
}
