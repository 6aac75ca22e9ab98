//! `serde::Serialize` impls for the downstream wire format.
//!
//! Field names and order are fixed by existing consumers:
//!
//! - [`TextElement`]: `top, left, width, height, font, text` (no font size)
//! - [`Ruling`]: the 4-tuple `[left, top, right, bottom]`
//! - [`Page`]: `width, height, number, rotation, texts`
//! - [`Line`] and [`Column`]: `top, left, width, height, text_elements`

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use crate::column::Column;
use crate::geometry::{Rect, Zone};
use crate::line::Line;
use crate::page::Page;
use crate::ruling::Ruling;
use crate::text::TextElement;

fn serialize_rect_fields<S: SerializeStruct>(state: &mut S, rect: &Rect) -> Result<(), S::Error> {
    state.serialize_field("top", &rect.top)?;
    state.serialize_field("left", &rect.left)?;
    state.serialize_field("width", &rect.width)?;
    state.serialize_field("height", &rect.height)
}

impl Serialize for TextElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TextElement", 6)?;
        serialize_rect_fields(&mut state, &self.rect)?;
        state.serialize_field("font", &self.font)?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Ruling {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Page", 5)?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("number", &self.number())?;
        state.serialize_field("rotation", &self.rotation())?;
        state.serialize_field("texts", &self.texts)?;
        state.end()
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Line", 5)?;
        serialize_rect_fields(&mut state, &self.rect)?;
        state.serialize_field("text_elements", &self.text_elements)?;
        state.end()
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Column", 5)?;
        serialize_rect_fields(&mut state, &self.rect)?;
        state.serialize_field("text_elements", self.text_elements())?;
        state.end()
    }
}
