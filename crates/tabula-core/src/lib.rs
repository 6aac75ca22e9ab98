//! tabula-core: geometric clustering core for PDF table extraction.
//!
//! Reconstructs tabular layout from positioned text fragments and ruling
//! segments extracted from a page:
//!
//! - [`TextElement`]s that are fragments of the same word or line are merged
//!   ([`TextElement::should_merge`], [`TextElement::should_add_space`]).
//! - [`Line`]s collect elements sharing a visual row.
//! - [`Column`]s collect elements sharing a vertical band across rows.
//! - [`clean_rulings`] fuses collinear [`Ruling`] segments into a grid.
//!
//! Everything upstream (content-stream decoding, fonts) and downstream
//! (table boundaries, export) lives outside this crate. Diagnostics are
//! emitted through [`tracing`]; enable the `serde` feature for the JSON
//! shapes consumed by exporters.

pub mod column;
pub mod error;
pub mod geometry;
pub mod line;
pub mod page;
pub mod page_object;
pub mod ruling;
#[cfg(feature = "serde")]
mod serialize;
pub mod settings;
pub mod text;

pub use column::Column;
pub use error::{LayoutError, Result};
pub use geometry::{Point, Rect, Zone};
pub use line::Line;
pub use page::Page;
pub use page_object::PageObject;
pub use ruling::{
    CleanedRulings, Ruling, clean_rulings, clean_rulings_with, clean_rulings_with_distance,
};
pub use settings::{
    CHARACTER_DISTANCE_THRESHOLD, DEFAULT_OVERLAP_TOLERANCE, DEFAULT_RULING_MAX_DISTANCE,
    LayoutSettings, MERGE_TOLERANCE_RATIO,
};
pub use text::{TextElement, merge_tolerance};
