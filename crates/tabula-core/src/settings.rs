//! Tolerance constants used by the clustering heuristics.
//!
//! The constants are collected in [`LayoutSettings`] and passed explicitly to
//! the `*_with` forms of the text and ruling operations; the plain forms use
//! [`LayoutSettings::default`].

/// Fraction of the average font size below which two text elements are
/// considered fragments of the same word.
pub const MERGE_TOLERANCE_RATIO: f64 = 0.25;

/// Multiplier applied to the merge tolerance to obtain the upper bound of the
/// "next word on the same line" band.
pub const CHARACTER_DISTANCE_THRESHOLD: f64 = 1.5;

/// Default `max_distance` accepted by ruling cleanup.
pub const DEFAULT_RULING_MAX_DISTANCE: f64 = 4.0;

/// Minimum overlap ratio for two entities to count as overlapping.
pub const DEFAULT_OVERLAP_TOLERANCE: f64 = 1e-5;

/// Options for the clustering heuristics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSettings {
    /// Fraction of the average font size used as the merge tolerance.
    pub merge_tolerance_ratio: f64,
    /// Upper bound of the space-insertion band, as a multiple of the merge tolerance.
    pub character_distance_threshold: f64,
    /// Ruling cleanup distance. Accepted but not applied: grouping is by exact coordinate.
    pub ruling_max_distance: f64,
    /// Overlap-ratio threshold for [`Rect::overlaps`](crate::Rect::overlaps).
    pub overlap_tolerance: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            merge_tolerance_ratio: MERGE_TOLERANCE_RATIO,
            character_distance_threshold: CHARACTER_DISTANCE_THRESHOLD,
            ruling_max_distance: DEFAULT_RULING_MAX_DISTANCE,
            overlap_tolerance: DEFAULT_OVERLAP_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_use_named_constants() {
        let settings = LayoutSettings::default();
        assert_eq!(settings.merge_tolerance_ratio, 0.25);
        assert_eq!(settings.character_distance_threshold, 1.5);
        assert_eq!(settings.ruling_max_distance, 4.0);
        assert_eq!(settings.overlap_tolerance, 1e-5);
    }

    #[test]
    fn test_settings_can_be_overridden() {
        let settings = LayoutSettings {
            merge_tolerance_ratio: 0.5,
            ..LayoutSettings::default()
        };
        assert_eq!(settings.merge_tolerance_ratio, 0.5);
        assert_eq!(settings.character_distance_threshold, 1.5);
    }
}
