use super::*;
use serde_json::json;

#[test]
fn malformed_positions_are_filtered_not_rejected() {
    let layer: Layer = serde_json::from_value(json!({
        "name": "L",
        "elements": [
            { "id": "ok", "type": "circle", "position": { "x": 1, "z": 2.5 } },
            { "id": "str", "position": { "x": "1", "z": 2 } },
            { "id": "missing-z", "position": { "x": 1 } },
            { "id": "null", "position": null },
            { "id": "none" },
            { "id": "scalar", "position": 7 }
        ]
    }))
    .unwrap();

    let ids: Vec<&str> = layer
        .filtered_elements()
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["ok"]);
    assert_eq!(layer.elements.len(), 6);
    assert_eq!(layer.elements[0].shape, ElementShape::Circle);
}

#[test]
fn layer_defaults_match_editor_defaults() {
    let layer: Layer = serde_json::from_value(json!({ "name": "L" })).unwrap();
    assert!(layer.visible);
    assert_eq!(layer.tick_delay, 20);
    assert_eq!(layer.particle, "reddust");
    assert_eq!(layer.color, "#ffffff");
    assert_eq!(layer.repeat, 1);
    assert_eq!(layer.repeat_interval, 1);
    assert_eq!(layer.targeter, "Origin");
    assert_eq!(layer.effect_type, PrimitiveKind::Particles);
    assert_eq!(layer, Layer::new("", "L"));
}

#[test]
fn element_attributes_fall_back_to_layer() {
    let layer = Layer::new("l", "L");
    let plain = Element::at("a", 0.0, 0.0);
    let custom = Element::at("b", 0.0, 0.0)
        .with_color("#00ff00")
        .with_repeat(4);
    assert_eq!(layer.color_of(&plain), "#ffffff");
    assert_eq!(layer.color_of(&custom), "#00ff00");
    assert_eq!(layer.repeat_of(&plain), 1);
    assert_eq!(layer.repeat_of(&custom), 4);
    assert_eq!(layer.repeat_of(&plain.clone().with_repeat(0)), 1);
    assert_eq!(layer.particle_of(&plain), "reddust");
}

#[test]
fn unknown_tags_are_tolerated() {
    let el: Element = serde_json::from_value(json!({
        "id": "x",
        "type": "hexagon",
        "position": { "x": 0, "z": 0 }
    }))
    .unwrap();
    assert_eq!(el.shape, ElementShape::Other);

    let layer: Layer =
        serde_json::from_value(json!({ "name": "L", "effectType": "particlewhirl" })).unwrap();
    assert_eq!(layer.effect_type, PrimitiveKind::Unsupported);
    assert_eq!(layer.effect_type.mechanic(), "e:p");
}

#[test]
fn authored_placement_includes_vertical_offset() {
    let el = Element::at("a", 1.0, 2.0).with_y_offset(3.0);
    let p = el.authored_placement().unwrap();
    assert_eq!((p.x, p.z, p.y_offset), (1.0, 2.0, 3.0));
}
