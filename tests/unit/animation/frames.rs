use super::*;
use crate::foundation::core::MAX_FRAMES;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn manual_counts_are_clamped() {
    let modes = ModeFlags::default();
    let settings = ModeSettings::default();
    for requested in [0, 5000, -3] {
        let n = frame_count(&modes, &settings, FrameSpec::manual(requested));
        assert!((1..=MAX_FRAMES).contains(&n), "{requested} -> {n}");
    }
    assert_eq!(frame_count(&modes, &settings, FrameSpec::manual(37)), 37);
}

#[test]
fn auto_count_is_longest_active_duration() {
    let settings = ModeSettings::default();
    let moving = ModeFlags {
        move_mode: true,
        ..ModeFlags::default()
    };
    // ceil(10 / 0.5)
    assert_eq!(frame_count(&moving, &settings, FrameSpec::auto()), 20);

    let both = ModeFlags {
        move_mode: true,
        rotate_mode: true,
        ..ModeFlags::default()
    };
    // floor(5 * 20)
    assert_eq!(frame_count(&both, &settings, FrameSpec::auto()), 100);

    let rainbow = ModeFlags {
        rainbow_mode: true,
        ..ModeFlags::default()
    };
    assert_eq!(frame_count(&rainbow, &settings, FrameSpec::auto()), 60);

    assert_eq!(
        frame_count(&ModeFlags::default(), &settings, FrameSpec::auto()),
        1
    );
}

#[test]
fn auto_count_is_not_capped_like_manual_counts() {
    let mut settings = ModeSettings::default();
    settings.move_mode.speed = 0.01;
    settings.move_mode.max_distance = 20.0;
    let moving = ModeFlags {
        move_mode: true,
        ..ModeFlags::default()
    };
    // ceil(20 / 0.01)
    assert_eq!(frame_count(&moving, &settings, FrameSpec::auto()), 2000);
    assert_eq!(
        frame_count(&moving, &settings, FrameSpec::manual(2000)),
        MAX_FRAMES
    );
}

#[test]
fn zero_speed_translation_has_no_duration() {
    let mut settings = ModeSettings::default();
    settings.move_mode.speed = 0.0;
    let moving = ModeFlags {
        move_mode: true,
        ..ModeFlags::default()
    };
    assert_eq!(frame_count(&moving, &settings, FrameSpec::auto()), 1);
}

#[test]
fn rise_cutoff_rounds_up() {
    let s = RiseSettings {
        speed: 0.3,
        max_height: 1.0,
    };
    assert_eq!(rise_cutoff(&s), Some(4));
    let flat = RiseSettings {
        speed: 1.0,
        max_height: 0.0,
    };
    assert_eq!(rise_cutoff(&flat), Some(0));
    let still = RiseSettings {
        speed: 0.0,
        max_height: 5.0,
    };
    assert_eq!(rise_cutoff(&still), None);
}

#[test]
fn translation_follows_compass_and_caps_distance() {
    let s = MoveSettings {
        speed: 1.0,
        max_distance: 3.0,
        direction: 0,
        elevation: 6.0,
    };
    // Direction 0 points along +z.
    let (h, v) = translate_offset(&s, 2);
    assert!(approx(h.x, 0.0) && approx(h.y, 2.0));
    assert!(approx(v, 4.0));

    let (h, v) = translate_offset(&s, 10);
    assert!(approx(h.hypot(), 3.0));
    assert!(approx(v, 6.0));

    let east = MoveSettings { direction: 6, ..s };
    let (h, _) = translate_offset(&east, 1);
    assert!(approx(h.x, 1.0) && approx(h.y, 0.0));
}

#[test]
fn no_direction_keeps_only_elevation() {
    let s = MoveSettings {
        speed: 1.0,
        max_distance: 4.0,
        direction: NO_DIRECTION,
        elevation: 2.0,
    };
    let (h, v) = translate_offset(&s, 2);
    assert_eq!(h, Vec2::ZERO);
    assert!(approx(v, 1.0));

    let degenerate = MoveSettings {
        max_distance: 0.0,
        ..s
    };
    assert_eq!(translate_offset(&degenerate, 5).1, 0.0);
}

#[test]
fn orbit_offset_is_relative_to_start() {
    let orbit = Orbit::around(Point::new(1.0, 1.0), Point::new(2.0, 1.0));
    let zero = orbit.offset(0.0);
    assert!(approx(zero.x, 0.0) && approx(zero.y, 0.0));

    let quarter = orbit.offset(0.25);
    assert!(approx(quarter.x, -1.0) && approx(quarter.y, 1.0));

    let full = orbit.offset(1.0);
    assert!(approx(full.hypot(), 0.0));
}

#[test]
fn satellite_circles_at_fixed_radius() {
    let s = LocalRotateSettings {
        speed: 1.0,
        radius: 0.5,
    };
    assert!(approx(satellite_offset(&s, 0).x, 0.5));
    for frame in [3, 17, 40] {
        assert!(approx(satellite_offset(&s, frame).hypot(), 0.5));
    }
    assert_eq!(satellite_frames(&s), 63);
}
