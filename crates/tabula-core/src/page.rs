use tracing::debug;

use crate::geometry::{Rect, Zone};
use crate::ruling::Ruling;
use crate::settings::LayoutSettings;
use crate::text::TextElement;

/// A page's dimensions and metadata together with its extracted content.
///
/// The page rectangle sits at the origin: `top = 0`, `left = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    rect: Rect,
    rotation: i32,
    number: usize,
    /// Raw text elements in extraction order.
    pub texts: Vec<TextElement>,
    /// Raw ruling segments, processed independently of the text.
    pub rulings: Vec<Ruling>,
}

impl Zone for Page {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl Page {
    pub fn new(width: f64, height: f64, rotation: i32, number: usize) -> Self {
        Self::with_texts(width, height, rotation, number, Vec::new())
    }

    pub fn with_texts(
        width: f64,
        height: f64,
        rotation: i32,
        number: usize,
        texts: Vec<TextElement>,
    ) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
            rotation,
            number,
            texts,
            rulings: Vec::new(),
        }
    }

    /// Rotation tag carried from the source document, in degrees.
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Text elements overlapping an area given as `[top, left, bottom, right]`.
    ///
    /// `None` selects the whole page.
    pub fn get_text(&self, area: Option<[f64; 4]>) -> Vec<&TextElement> {
        self.get_text_with(area, &LayoutSettings::default())
    }

    /// Like [`get_text`](Page::get_text), using `settings.overlap_tolerance`.
    pub fn get_text_with(
        &self,
        area: Option<[f64; 4]>,
        settings: &LayoutSettings,
    ) -> Vec<&TextElement> {
        self.get_text_with_tolerance(area, settings.overlap_tolerance)
    }

    /// Like [`get_text`](Page::get_text), with an explicit overlap-ratio threshold.
    pub fn get_text_with_tolerance(
        &self,
        area: Option<[f64; 4]>,
        tolerance: f64,
    ) -> Vec<&TextElement> {
        let [top, left, bottom, right] =
            area.unwrap_or([0.0, 0.0, self.rect.height, self.rect.width]);
        let zone = Rect::from_edges(top, left, bottom, right);
        let selected: Vec<&TextElement> = self
            .texts
            .iter()
            .filter(|t| t.rect.overlaps_with_tolerance(&zone, tolerance))
            .collect();
        debug!(
            page = self.number,
            ?zone,
            total = self.texts.len(),
            selected = selected.len(),
            "page text query"
        );
        selected
    }
}
