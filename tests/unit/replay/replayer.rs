use super::*;
use crate::scene::{
    action::PositionSample,
    model::{Element, Layer},
};

fn scene() -> Vec<Layer> {
    vec![Layer::new("l1", "Main").with_elements([
        Element::at("a", 0.0, 0.0),
        Element::at("b", 5.0, 5.0).with_y_offset(1.0).with_color("#00ff00"),
    ])]
}

#[test]
fn single_move_updates_live_position_and_emits_one_frame() {
    let log = vec![ActionRecord::moved(["a"], (1.0, 0.0, 0.0), 5)];
    let out = replay(&log, &scene());

    assert_eq!(out.position("a"), Some(Placement::new(1.0, 0.0, 0.0)));
    assert_eq!(out.frames.len(), 1);
    assert_eq!(out.frames[0].delay, 5);
    assert_eq!(out.frames[0].elements[0].id, "a");
}

#[test]
fn move_deltas_accumulate_in_log_order() {
    let deltas = [(1.0, 2.0, 0.5), (-3.0, 0.25, 0.0), (0.5, -1.0, -2.0), (4.0, 4.0, 1.0)];
    let log: Vec<ActionRecord> = deltas
        .iter()
        .map(|d| ActionRecord::moved(["b"], *d, 1))
        .collect();
    let out = replay(&log, &scene());

    let (sx, sz, sy) = deltas
        .iter()
        .fold((0.0, 0.0, 0.0), |acc, d| (acc.0 + d.0, acc.1 + d.1, acc.2 + d.2));
    let p = out.position("b").unwrap();
    assert!((p.x - (5.0 + sx)).abs() < 1e-12);
    assert!((p.z - (5.0 + sz)).abs() < 1e-12);
    assert!((p.y_offset - (1.0 + sy)).abs() < 1e-12);
    assert_eq!(out.frames.len(), deltas.len());
}

#[test]
fn unknown_ids_are_never_created() {
    let log = vec![
        ActionRecord::moved(["ghost"], (1.0, 1.0, 0.0), 3),
        ActionRecord::snapshot(
            ActionKind::TransformEnd,
            vec![PositionSample::new("ghost", 9.0, 9.0, 0.0)],
            3,
        ),
    ];
    let out = replay(&log, &scene());

    assert!(out.position("ghost").is_none());
    assert!(out.frames.is_empty());
}

#[test]
fn absolute_snapshots_overwrite_and_zero_delays_become_one() {
    let log = vec![ActionRecord::snapshot(
        ActionKind::MoveContinuous,
        vec![PositionSample::new("a", 7.0, -2.0, 0.5)],
        0,
    )];
    let out = replay(&log, &scene());

    assert_eq!(out.position("a"), Some(Placement::new(7.0, -2.0, 0.5)));
    assert_eq!(out.frames[0].delay, 1);
}

#[test]
fn zero_moves_and_informational_records_produce_no_frames() {
    let log = vec![
        ActionRecord::moved(["a"], (0.0, 0.0, 0.0), 4),
        ActionRecord::new(ActionKind::ElementAdd, ["a"], 4),
        ActionRecord::new(ActionKind::Other, ["a"], 4),
    ];
    let out = replay(&log, &scene());
    assert!(!out.has_frames());
    assert_eq!(out.position("a"), Some(Placement::new(0.0, 0.0, 0.0)));
}

#[test]
fn idle_holds_authored_positions_for_its_own_delay() {
    let log = vec![
        ActionRecord::moved(["a"], (2.0, 0.0, 0.0), 1),
        ActionRecord::new(ActionKind::Idle, ["a"], 0),
        ActionRecord::new(ActionKind::Idle, ["b"], 12),
    ];
    let out = replay(&log, &scene());

    assert_eq!(out.frames.len(), 3);
    assert_eq!(out.frames[1].delay, 0);
    assert_eq!(out.frames[1].elements[0].placement, Placement::new(0.0, 0.0, 0.0));
    assert_eq!(out.frames[2].delay, 12);
    assert_eq!(out.frames[2].elements[0].placement, Placement::new(5.0, 5.0, 1.0));
}

#[test]
fn idle_prefers_recorded_last_positions() {
    let mut idle = ActionRecord::new(ActionKind::Idle, ["a"], 6);
    idle.data.last_positions = Some(vec![PositionSample::new("a", 3.0, 3.0, 0.0)]);
    let out = replay(&[idle], &scene());

    assert_eq!(out.frames[0].elements[0].placement, Placement::new(3.0, 3.0, 0.0));
    assert_eq!(out.position("a"), Some(Placement::new(0.0, 0.0, 0.0)));
}

#[test]
fn attribute_pass_overwrites_color_and_repeat() {
    let mut color = ActionRecord::new(ActionKind::Color, ["a", "b"], 0);
    color.data.color = Some("#123456".to_owned());
    let mut count = ActionRecord::new(ActionKind::ParticleCount, ["b"], 0);
    count.data.particle_count = Some(7);
    let mut recolor = ActionRecord::new(ActionKind::Color, ["b"], 0);
    recolor.data.color = Some("#abcdef".to_owned());

    let out = replay(&[color, count, recolor], &scene());
    assert_eq!(out.color("a"), Some("#123456"));
    assert_eq!(out.color("b"), Some("#abcdef"));
    assert_eq!(out.repeat("b"), Some(7));
    assert_eq!(out.repeat("a"), None);
    assert!(!out.has_frames());
}

#[test]
fn replay_leaves_the_scene_untouched() {
    let layers = scene();
    let before = layers.clone();
    let _ = replay(&[ActionRecord::moved(["a"], (1.0, 1.0, 1.0), 1)], &layers);
    assert_eq!(layers, before);
}
