use super::*;
use std::f64::consts::TAU;

fn polygon(n: usize, radius: f64, gid: &str) -> Vec<Element> {
    (0..n)
        .map(|i| {
            let a = i as f64 / n as f64 * TAU;
            Element::at(format!("{gid}-{i}"), 3.0 + radius * a.cos(), -1.0 + radius * a.sin())
                .with_shape(ElementShape::Circle)
                .with_group(gid, GroupOrigin::Authored)
        })
        .collect()
}

fn items<'a>(els: &'a [Element], color: impl Fn(usize) -> &'static str) -> Vec<DrawItem<'a>> {
    els.iter()
        .enumerate()
        .map(|(i, e)| DrawItem {
            element: e,
            placement: e.authored_placement().unwrap().translated(Default::default(), 2.0),
            color: color(i).to_owned(),
            repeat: 1,
        })
        .collect()
}

#[test]
fn regular_polygon_of_one_color_collapses_to_one_ring() {
    let els = polygon(8, 2.0, "ring-1");
    let items = items(&els, |_| "#ff0000");
    let out = collapse_rings(&items);

    assert_eq!(out.len(), 1);
    let Drawn::Ring(ring) = &out[0] else {
        panic!("expected a ring");
    };
    assert_eq!(ring.members, 8);
    assert!((ring.center.x - 3.0).abs() < 1e-9 && (ring.center.y + 1.0).abs() < 1e-9);
    assert!((ring.radius - 2.0).abs() < 1e-9);
    assert!((ring.y_offset - 2.0).abs() < 1e-9);
    assert_eq!(ring.origin, GroupOrigin::Authored);
}

#[test]
fn one_differing_color_keeps_every_member() {
    let els = polygon(6, 1.0, "ring-1");
    let items = items(&els, |i| if i == 4 { "#00ff00" } else { "#ff0000" });
    let out = collapse_rings(&items);
    assert_eq!(out.len(), 6);
    assert!(out.iter().all(|d| matches!(d, Drawn::Single(_))));
}

#[test]
fn hex_case_does_not_break_color_equality() {
    let els = polygon(4, 1.0, "ring-1");
    let items = items(&els, |i| if i % 2 == 0 { "#FF0000" } else { "#ff0000" });
    assert_eq!(collapse_rings(&items).len(), 1);
}

#[test]
fn small_or_non_circle_groups_are_not_collapsed() {
    let pair = polygon(2, 1.0, "pair");
    assert_eq!(collapse_rings(&items(&pair, |_| "#ffffff")).len(), 2);

    let squares: Vec<Element> = polygon(5, 1.0, "sq")
        .into_iter()
        .map(|e| e.with_shape(ElementShape::Square))
        .collect();
    assert_eq!(collapse_rings(&items(&squares, |_| "#ffffff")).len(), 5);
}

#[test]
fn groups_keep_first_appearance_order() {
    let mut els = vec![Element::at("solo", 0.0, 0.0)];
    els.extend(polygon(3, 1.0, "g1"));
    els.push(Element::at("tail", 9.0, 9.0).with_group("g2", GroupOrigin::Inferred));
    // Interleave a member of g1 after g2 started.
    let late = Element::at("g1-late", 3.0, 0.0)
        .with_shape(ElementShape::Square)
        .with_group("g1", GroupOrigin::Authored);
    els.push(late);

    let items = items(&els, |_| "#ffffff");
    let out = collapse_rings(&items);
    let ids: Vec<&str> = out
        .iter()
        .map(|d| match d {
            Drawn::Single(item) => item.element.id.as_str(),
            Drawn::Ring(_) => "ring",
        })
        .collect();
    assert_eq!(ids, vec!["solo", "g1-0", "g1-1", "g1-2", "g1-late", "tail"]);
}
