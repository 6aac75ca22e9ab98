//! JSON shape tests for the downstream wire format.
//!
//! Consumers rely on exact field names and order, so these tests compare
//! serialized strings rather than round-tripping values.

#![cfg(feature = "serde")]

use tabula_core::*;

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("serialize failed")
}

#[test]
fn test_rect_shape() {
    let r = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(
        to_json(&r),
        r#"{"top":1.0,"left":2.0,"width":3.0,"height":4.0}"#
    );
}

#[test]
fn test_rect_roundtrip() {
    let r = Rect::new(1.5, 2.5, 3.5, 4.5);
    let restored: Rect = serde_json::from_str(&to_json(&r)).unwrap();
    assert_eq!(restored, r);
}

#[test]
fn test_text_element_shape_omits_font_size() {
    let t = TextElement::new(10.0, 20.0, 30.0, 8.0, "Helvetica", 8.0, "Total");
    assert_eq!(
        to_json(&t),
        r#"{"top":10.0,"left":20.0,"width":30.0,"height":8.0,"font":"Helvetica","text":"Total"}"#
    );
}

#[test]
fn test_ruling_is_edge_tuple() {
    let r = Ruling::new(100.0, 10.0, 50.0, 0.0);
    assert_eq!(to_json(&r), "[10.0,100.0,60.0,100.0]");
}

#[test]
fn test_page_shape() {
    let page = Page::with_texts(
        612.0,
        792.0,
        90,
        2,
        vec![TextElement::new(0.0, 0.0, 5.0, 5.0, "F", 5.0, "x")],
    );
    assert_eq!(
        to_json(&page),
        concat!(
            r#"{"width":612.0,"height":792.0,"number":2,"rotation":90,"texts":["#,
            r#"{"top":0.0,"left":0.0,"width":5.0,"height":5.0,"font":"F","text":"x"}]}"#
        )
    );
}

#[test]
fn test_cleaned_rulings_shape() {
    let grid = clean_rulings(&[
        Ruling::new(10.0, 0.0, 5.0, 0.0),
        Ruling::new(0.0, 3.0, 0.0, 5.0),
    ]);
    assert_eq!(
        to_json(&grid),
        r#"{"horizontal":[[0.0,10.0,5.0,10.0]],"vertical":[[3.0,0.0,3.0,5.0]]}"#
    );
}

#[test]
fn test_line_and_column_shapes() {
    let line: Line = vec![TextElement::new(0.0, 0.0, 5.0, 5.0, "F", 5.0, "x")]
        .into_iter()
        .collect();
    let value: serde_json::Value = serde_json::from_str(&to_json(&line)).unwrap();
    assert_eq!(value["width"], 5.0);
    assert_eq!(value["text_elements"][0]["text"], "x");

    let mut column = Column::new(0.0, 5.0, Vec::new());
    column.push(TextElement::new(7.0, 0.0, 5.0, 5.0, "F", 5.0, "y"));
    let value: serde_json::Value = serde_json::from_str(&to_json(&column)).unwrap();
    assert_eq!(value["top"], 0.0);
    assert_eq!(value["height"], 12.0);
    assert_eq!(value["text_elements"][0]["text"], "y");
}

#[test]
fn test_settings_roundtrip() {
    let settings = LayoutSettings::default();
    let restored: LayoutSettings = serde_json::from_str(&to_json(&settings)).unwrap();
    assert_eq!(restored, settings);
}
