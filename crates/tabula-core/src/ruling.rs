//! Ruling segments and their cleanup into a horizontal/vertical grid.
//!
//! Rulings are candidate table borders: rectangles degenerate in one axis.
//! [`clean_rulings`] fuses collinear segments into canonical grid lines in
//! the manner of edge joining, grouping by exact coordinate.

use tracing::debug;

use crate::geometry::{Rect, Zone};
use crate::settings::LayoutSettings;

/// A horizontal (`height == 0`) or vertical (`width == 0`) segment.
///
/// Degeneracy is expected but not enforced; cleanup drops rulings that are
/// neither.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruling {
    pub rect: Rect,
}

impl Zone for Ruling {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl Ruling {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(top, left, width, height),
        }
    }

    /// Whether the segment has zero width.
    pub fn vertical(&self) -> bool {
        self.left() == self.right()
    }

    /// Whether the segment has zero height.
    pub fn horizontal(&self) -> bool {
        self.top() == self.bottom()
    }

    /// Endpoints as `[left, top, right, bottom]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.left(), self.top(), self.right(), self.bottom()]
    }

    /// Segment intersection test.
    ///
    /// Treats both rulings as segments from `(left, top)` to `(right, bottom)`
    /// and solves for the parameters `r` (along `self`) and `s` (along
    /// `other`). Both must fall in the half-open range `[0, 1)`, so touching
    /// at the far end of either segment does not count. Parallel or
    /// zero-length segments never intersect.
    pub fn intersects(&self, other: &Ruling) -> bool {
        let (ax, ay) = (self.left(), self.top());
        let (bx, by) = (self.right(), self.bottom());
        let (cx, cy) = (other.left(), other.top());
        let (dx, dy) = (other.right(), other.bottom());

        let denominator = (bx - ax) * (dy - cy) - (by - ay) * (dx - cx);
        if denominator == 0.0 || !denominator.is_finite() {
            debug!(
                ruling = ?self,
                other = ?other,
                "parallel or degenerate rulings, no intersection"
            );
            return false;
        }

        let r = ((ay - cy) * (dx - cx) - (ax - cx) * (dy - cy)) / denominator;
        let s = ((ay - cy) * (bx - ax) - (ax - cx) * (by - ay)) / denominator;

        (0.0..1.0).contains(&r) && (0.0..1.0).contains(&s)
    }

    /// Attribute-style XML element with two-decimal endpoints.
    pub fn to_xml(&self) -> String {
        format!(
            "<ruling x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" />",
            self.left(),
            self.top(),
            self.right(),
            self.bottom()
        )
    }
}

/// Output of [`clean_rulings`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CleanedRulings {
    pub horizontal: Vec<Ruling>,
    pub vertical: Vec<Ruling>,
}

/// [`clean_rulings_with`] using [`LayoutSettings::default`].
pub fn clean_rulings(rulings: &[Ruling]) -> CleanedRulings {
    clean_rulings_with(rulings, &LayoutSettings::default())
}

/// [`clean_rulings_with_distance`] with `settings.ruling_max_distance`.
pub fn clean_rulings_with(rulings: &[Ruling], settings: &LayoutSettings) -> CleanedRulings {
    clean_rulings_with_distance(rulings, settings.ruling_max_distance)
}

/// Fuse collinear rulings into one canonical segment per coordinate.
///
/// Horizontal rulings are grouped by exact `top` and each group becomes one
/// ruling from the smallest `left` to the largest `right`; vertical rulings
/// are grouped by exact `left` and span from the smallest `top` to the largest
/// `bottom`. Singleton groups pass through unchanged. Rulings that are neither
/// horizontal nor vertical are dropped; a zero-length ruling is both and lands
/// in both groups.
///
/// `max_distance` is accepted but not applied: grouping is by exact coordinate
/// equality only. No cross-filtering between the two orientations is done.
pub fn clean_rulings_with_distance(rulings: &[Ruling], max_distance: f64) -> CleanedRulings {
    let horizontals: Vec<Ruling> = rulings.iter().copied().filter(Ruling::horizontal).collect();
    let verticals: Vec<Ruling> = rulings.iter().copied().filter(Ruling::vertical).collect();
    let dropped = rulings
        .iter()
        .filter(|r| !r.horizontal() && !r.vertical())
        .count();

    let horizontal = fuse_collinear(
        horizontals,
        |r| r.top(),
        |r| (r.left(), r.right()),
        |proto, start, end| Ruling::new(proto.top(), start, end - start, 0.0),
    );
    let vertical = fuse_collinear(
        verticals,
        |r| r.left(),
        |r| (r.top(), r.bottom()),
        |proto, start, end| Ruling::new(start, proto.left(), 0.0, end - start),
    );

    debug!(
        input = rulings.len(),
        dropped,
        horizontal = horizontal.len(),
        vertical = vertical.len(),
        max_distance,
        "cleaned rulings"
    );

    CleanedRulings {
        horizontal,
        vertical,
    }
}

/// Group rulings by an exact collinear key and fuse each multi-member group
/// into one ruling spanning the group's extent. Output is ordered by key.
fn fuse_collinear<K, S, B>(mut rulings: Vec<Ruling>, key: K, span: S, build: B) -> Vec<Ruling>
where
    K: Fn(&Ruling) -> f64,
    S: Fn(&Ruling) -> (f64, f64),
    B: Fn(&Ruling, f64, f64) -> Ruling,
{
    // Sort by collinear key first, then by span start
    rulings.sort_by(|a, b| {
        key(a)
            .total_cmp(&key(b))
            .then_with(|| span(a).0.total_cmp(&span(b).0))
    });

    let mut result = Vec::new();
    let mut i = 0;
    while i < rulings.len() {
        let group_key = key(&rulings[i]);
        let mut j = i + 1;
        while j < rulings.len() && key(&rulings[j]) == group_key {
            j += 1;
        }

        if j - i == 1 {
            result.push(rulings[i]);
        } else {
            // -0.0 and 0.0 share a group but not a sort position
            let group = &rulings[i..j];
            let start = group
                .iter()
                .map(|r| span(r).0)
                .fold(f64::INFINITY, f64::min);
            let end = group
                .iter()
                .map(|r| span(r).1)
                .fold(f64::NEG_INFINITY, f64::max);
            result.push(build(&rulings[i], start, end));
        }
        i = j;
    }
    result
}
