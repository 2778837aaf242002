use std::f64::consts::{PI, TAU};

use crate::{
    foundation::core::{FrameMode, Point, Vec2, clamp_frame_count},
    scene::modes::{
        LocalRotateSettings, ModeFlags, ModeSettings, MoveSettings, NO_DIRECTION, RiseSettings,
    },
};

/// Script frames per second of a period expressed in seconds.
pub const FRAMES_PER_SECOND: f64 = 20.0;

/// Satellite angle advance per frame and unit of speed, in radians.
pub const SATELLITE_ANGLE_STEP: f64 = 0.1;

/// Caller choice of how many frames to synthesize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSpec {
    /// Auto or manual.
    pub mode: FrameMode,
    /// Requested count, only read in manual mode.
    pub manual_count: i64,
}

impl FrameSpec {
    /// Derive the count from the active modes.
    pub fn auto() -> Self {
        Self::default()
    }

    /// Use `count`, clamped into `[1, MAX_FRAMES]`.
    pub fn manual(count: i64) -> Self {
        Self {
            mode: FrameMode::Manual,
            manual_count: count,
        }
    }
}

// `as` saturates at `u32::MAX`.
fn whole_frames(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v as u32
    } else {
        0
    }
}

/// Frames a translation needs to reach its distance cap.
pub fn move_frames(s: &MoveSettings) -> u32 {
    if s.speed > 0.0 {
        whole_frames((s.max_distance / s.speed).ceil())
    } else {
        0
    }
}

/// Frames of one full orbit or hue cycle of `period` seconds.
pub fn period_frames(period: f64) -> u32 {
    whole_frames((period * FRAMES_PER_SECOND).floor())
}

/// Frames of one full satellite revolution.
pub fn satellite_frames(s: &LocalRotateSettings) -> u32 {
    if s.speed > 0.0 {
        whole_frames((TAU / (s.speed * SATELLITE_ANGLE_STEP)).ceil())
    } else {
        0
    }
}

/// First frame index a rise animation no longer draws, `None` when it never stops.
///
/// A zero height gives a cutoff of 0: the rising layer draws nothing.
pub fn rise_cutoff(s: &RiseSettings) -> Option<u32> {
    if s.speed > 0.0 {
        Some(whole_frames((s.max_height / s.speed).ceil()))
    } else {
        None
    }
}

/// Number of frames to synthesize for the active modes.
///
/// Manual counts are clamped into `[1, MAX_FRAMES]`. Auto counts are the longest active
/// duration and at least one; they are not capped.
pub fn frame_count(modes: &ModeFlags, settings: &ModeSettings, spec: FrameSpec) -> u32 {
    if spec.mode == FrameMode::Manual {
        return clamp_frame_count(spec.manual_count);
    }

    let durations = [
        (modes.move_mode, move_frames(&settings.move_mode)),
        (modes.rotate_mode, period_frames(settings.rotate_mode.period)),
        (modes.rainbow_mode, period_frames(settings.rainbow_mode.period)),
        (
            modes.rise_mode,
            rise_cutoff(&settings.rise_mode).unwrap_or(0),
        ),
        (
            modes.local_rotate_mode,
            satellite_frames(&settings.local_rotate_mode),
        ),
    ];
    durations
        .into_iter()
        .filter_map(|(on, n)| on.then_some(n))
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Horizontal and vertical translation after `frame` frames.
pub fn translate_offset(s: &MoveSettings, frame: u32) -> (Vec2, f64) {
    let distance = (f64::from(frame) * s.speed).min(s.max_distance);
    let horizontal = if s.direction == NO_DIRECTION {
        Vec2::ZERO
    } else {
        let angle = f64::from(s.direction) / 8.0 * TAU + PI / 2.0;
        Vec2::from_angle(angle) * distance
    };
    let vertical = if s.max_distance > 0.0 {
        s.elevation * (distance / s.max_distance)
    } else {
        0.0
    };
    (horizontal, vertical)
}

/// Satellite offset around an already combined position after `frame` frames.
pub fn satellite_offset(s: &LocalRotateSettings, frame: u32) -> Vec2 {
    Vec2::from_angle(f64::from(frame) * s.speed * SATELLITE_ANGLE_STEP) * s.radius
}

/// Fixed orbit of one element around a shared center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    center: Point,
    radius: f64,
    initial_angle: f64,
    start: Point,
}

impl Orbit {
    /// Orbit of `start` around `center`.
    pub fn around(center: Point, start: Point) -> Self {
        let arm = start - center;
        Self {
            center,
            radius: arm.hypot(),
            initial_angle: arm.atan2(),
            start,
        }
    }

    /// Displacement from the start position after `turns` full revolutions.
    pub fn offset(&self, turns: f64) -> Vec2 {
        let angle = self.initial_angle + turns * TAU;
        (self.center + Vec2::from_angle(angle) * self.radius) - self.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frames.rs"]
mod tests;
