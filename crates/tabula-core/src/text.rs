use tracing::trace;

use crate::error::Result;
use crate::geometry::{Rect, Zone};
use crate::page_object::PageObject;
use crate::settings::LayoutSettings;

/// A positioned run of text extracted from a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    /// Bounding box of the run.
    pub rect: Rect,
    /// Font name.
    pub font: String,
    /// Font size in points.
    pub font_size: f64,
    /// The text content of this run.
    pub text: String,
}

impl Zone for TextElement {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

/// Distance below which two elements are fragments of the same word:
/// the average font size scaled by the merge tolerance ratio.
pub fn merge_tolerance(a: &TextElement, b: &TextElement, settings: &LayoutSettings) -> f64 {
    ((a.font_size + b.font_size) / 2.0) * settings.merge_tolerance_ratio
}

impl TextElement {
    pub fn new(
        top: f64,
        left: f64,
        width: f64,
        height: f64,
        font: impl Into<String>,
        font_size: f64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            rect: Rect::new(top, left, width, height),
            font: font.into(),
            font_size,
            text: text.into(),
        }
    }

    /// Whether the pair shares a row, or exactly one of them has zero height.
    fn same_row_candidate(&self, other: &TextElement) -> bool {
        let one_side_flat = (self.rect.height == 0.0) != (other.rect.height == 0.0);
        self.vertically_overlaps(other) || one_side_flat
    }

    /// Whether `other` is a fragment of the same word as `self`.
    pub fn should_merge(&self, other: &TextElement) -> bool {
        self.should_merge_with(other, &LayoutSettings::default())
    }

    /// Like [`should_merge`](TextElement::should_merge), with explicit tolerances.
    ///
    /// The row test (vertical overlap, or exactly one zero-height side) is
    /// joined with the distance test: both must hold.
    pub fn should_merge_with(&self, other: &TextElement, settings: &LayoutSettings) -> bool {
        let tolerance = merge_tolerance(self, other, settings);
        let distance = self.horizontal_distance(other);
        let merge = self.same_row_candidate(other) && distance < tolerance;
        trace!(
            left = %self.text,
            right = %other.text,
            distance,
            tolerance,
            merge,
            "should_merge"
        );
        merge
    }

    /// Whether `other` is the next word on the same line, so a space must be
    /// inserted before merging.
    pub fn should_add_space(&self, other: &TextElement) -> bool {
        self.should_add_space_with(other, &LayoutSettings::default())
    }

    /// Like [`should_add_space`](TextElement::should_add_space), with explicit tolerances.
    ///
    /// The distance must fall in `[tolerance, tolerance * character_distance_threshold)`.
    pub fn should_add_space_with(&self, other: &TextElement, settings: &LayoutSettings) -> bool {
        let tolerance = merge_tolerance(self, other, settings);
        let distance = self.horizontal_distance(other);
        let in_band =
            tolerance <= distance && distance < tolerance * settings.character_distance_threshold;
        let add_space = self.same_row_candidate(other) && in_band;
        trace!(
            left = %self.text,
            right = %other.text,
            distance,
            tolerance,
            add_space,
            "should_add_space"
        );
        add_space
    }

    /// Absorb `other`, concatenating text and expanding bounds.
    ///
    /// When the two share a column and `other` sits higher, its text is
    /// prepended; otherwise it is appended. No spaces are inserted or trimmed.
    pub fn merge(&mut self, other: TextElement) -> &mut Self {
        if self.horizontally_overlaps(&other) && other.rect.top < self.rect.top {
            let mut text = other.text;
            text.push_str(&self.text);
            self.text = text;
        } else {
            self.text.push_str(&other.text);
        }
        self.rect.merge(&other.rect);
        self
    }

    /// [`should_merge`](TextElement::should_merge) against a dynamically typed entity.
    pub fn should_merge_object(&self, other: &PageObject) -> Result<bool> {
        Ok(self.should_merge(other.as_text()?))
    }

    /// [`should_add_space`](TextElement::should_add_space) against a dynamically typed entity.
    pub fn should_add_space_object(&self, other: &PageObject) -> Result<bool> {
        Ok(self.should_add_space(other.as_text()?))
    }

    /// [`merge`](TextElement::merge) a dynamically typed entity.
    ///
    /// Fails with [`TypeMismatch`](crate::LayoutError::TypeMismatch) before
    /// touching `self` when `other` is not a text element.
    pub fn merge_object(&mut self, other: PageObject) -> Result<&mut Self> {
        let other = TextElement::try_from(other)?;
        Ok(self.merge(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutError;
    use crate::ruling::Ruling;

    fn make_text(left: f64, text: &str) -> TextElement {
        TextElement::new(10.0, left, 20.0, 10.0, "Helvetica", 10.0, text)
    }

    #[test]
    fn test_merge_tolerance_is_quarter_of_average_size() {
        let a = TextElement::new(0.0, 0.0, 5.0, 5.0, "F", 8.0, "a");
        let b = TextElement::new(0.0, 0.0, 5.0, 5.0, "F", 12.0, "b");
        assert_eq!(merge_tolerance(&a, &b, &LayoutSettings::default()), 2.5);
    }

    #[test]
    fn test_adjacent_fragments_merge_without_space() {
        let a = make_text(10.0, "Hello");
        let b = make_text(31.0, "World");
        assert!(a.should_merge(&b));
        assert!(!a.should_add_space(&b));
    }

    #[test]
    fn test_gap_in_space_band_adds_space() {
        let a = make_text(10.0, "Hello");
        let b = make_text(33.0, "World");
        // gap 3.0 in [2.5, 3.75)
        assert!(!a.should_merge(&b));
        assert!(a.should_add_space(&b));
    }

    #[test]
    fn test_gap_beyond_band_neither_merges_nor_adds_space() {
        let a = make_text(10.0, "Hello");
        let b = make_text(34.0, "World");
        assert!(!a.should_merge(&b));
        assert!(!a.should_add_space(&b));
    }

    #[test]
    fn test_different_rows_do_not_merge() {
        let a = make_text(10.0, "Hello");
        let mut b = make_text(31.0, "World");
        b.rect.top = 40.0;
        assert!(!a.should_merge(&b));
        assert!(!a.should_add_space(&b));
    }

    #[test]
    fn test_one_zero_height_side_merges_when_close() {
        let a = make_text(10.0, "x");
        let mut b = make_text(31.0, "y");
        b.rect.top = 200.0;
        b.rect.height = 0.0;
        assert!(a.should_merge(&b));
        b.rect.left = 40.0;
        assert!(!a.should_merge(&b));
    }

    #[test]
    fn test_one_zero_height_side_adds_space_in_band() {
        let a = make_text(10.0, "x");
        let mut b = make_text(33.0, "y");
        b.rect.top = 200.0;
        b.rect.height = 0.0;
        // gap 3.0 in [2.5, 3.75)
        assert!(a.should_add_space(&b));
        assert!(!a.should_merge(&b));
        b.rect.left = 31.0;
        assert!(!a.should_add_space(&b));
        b.rect.left = 40.0;
        assert!(!a.should_add_space(&b));
    }

    #[test]
    fn test_both_zero_height_do_not_add_space() {
        let mut a = make_text(10.0, "x");
        let mut b = make_text(33.0, "y");
        a.rect.height = 0.0;
        b.rect.height = 0.0;
        assert!(!a.should_add_space(&b));
    }

    #[test]
    fn test_both_zero_height_do_not_merge() {
        let mut a = make_text(10.0, "x");
        let mut b = make_text(31.0, "y");
        a.rect.height = 0.0;
        b.rect.height = 0.0;
        assert!(!a.should_merge(&b));
    }

    #[test]
    fn test_custom_ratio_widens_tolerance() {
        let a = make_text(10.0, "Hello");
        let b = make_text(34.0, "World");
        let settings = LayoutSettings {
            merge_tolerance_ratio: 0.5,
            ..LayoutSettings::default()
        };
        assert!(a.should_merge_with(&b, &settings));
    }

    #[test]
    fn test_merge_appends_and_expands() {
        let mut a = make_text(10.0, "Hello");
        let b = make_text(31.0, "World");
        a.merge(b);
        assert_eq!(a.text, "HelloWorld");
        assert_eq!(a.rect, Rect::new(10.0, 10.0, 41.0, 10.0));
    }

    #[test]
    fn test_merge_prepends_higher_element_in_same_column() {
        let mut a = TextElement::new(20.0, 10.0, 20.0, 10.0, "F", 10.0, "lower");
        let b = TextElement::new(5.0, 15.0, 20.0, 10.0, "F", 10.0, "upper");
        a.merge(b);
        assert_eq!(a.text, "upperlower");
        assert_eq!(a.rect.top, 5.0);
        assert_eq!(a.rect.bottom(), 30.0);
    }

    #[test]
    fn test_merge_does_not_insert_spaces() {
        let mut a = make_text(10.0, "Hello ");
        a.merge(make_text(33.0, " World"));
        assert_eq!(a.text, "Hello  World");
    }

    #[test]
    fn test_merge_object_with_text() {
        let mut a = make_text(10.0, "Hello");
        let b = PageObject::Text(make_text(31.0, "World"));
        assert!(a.should_merge_object(&b).unwrap());
        a.merge_object(b).unwrap();
        assert_eq!(a.text, "HelloWorld");
    }

    #[test]
    fn test_object_forms_reject_non_text() {
        let mut a = make_text(10.0, "Hello");
        let before = a.clone();
        let ruling = PageObject::Ruling(Ruling::new(0.0, 0.0, 100.0, 0.0));
        let expected = LayoutError::TypeMismatch {
            expected: "text element",
            found: "ruling",
        };
        assert_eq!(a.should_merge_object(&ruling), Err(expected.clone()));
        assert_eq!(a.should_add_space_object(&ruling), Err(expected.clone()));
        assert_eq!(a.merge_object(ruling).err(), Some(expected));
        assert_eq!(a, before);
    }
}
