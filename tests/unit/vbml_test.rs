//! Unit tests for VBML components

use serde_json::json;
use vesta::vbml::{Alignment, Justify, Position, Style};
use vesta::{encode_text, Component, TextOptions};

#[test]
fn builder_sets_style_fields() {
    let component = Component::new("{{greeting}}")
        .height(2)
        .width(22)
        .justify(Justify::Center)
        .align(Alignment::Bottom)
        .absolute_position(0, 4);

    assert_eq!(component.template(), Some("{{greeting}}"));
    assert!(component.raw_characters().is_none());
    assert_eq!(
        component.style(),
        &Style {
            height: Some(2),
            width: Some(22),
            justify: Some(Justify::Center),
            align: Some(Alignment::Bottom),
            absolute_position: Some(Position { x: 0, y: 4 }),
        }
    );
}

#[test]
fn encoded_grid_as_raw_characters() {
    let rows = encode_text("hi", &TextOptions::default()).unwrap();
    let component = Component::from_raw_characters(rows.clone());

    assert_eq!(component.raw_characters(), Some(&rows));
    assert_eq!(component.template(), None);
    assert_eq!(
        serde_json::to_value(&component).unwrap(),
        json!({ "rawCharacters": rows })
    );
}

#[test]
fn default_style_is_empty() {
    assert!(Style::default().is_empty());
    assert!(!Component::new("x").width(1).style().is_empty());
}

#[test]
fn components_serialize_in_order() {
    let components = vec![
        Component::new("top").height(3),
        Component::new("bottom").height(3).justify(Justify::Right),
    ];
    assert_eq!(
        serde_json::to_value(&components).unwrap(),
        json!([
            {"template": "top", "style": {"height": 3}},
            {"template": "bottom", "style": {"height": 3, "justify": "right"}}
        ])
    );
}
