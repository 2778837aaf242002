use std::time::{SystemTime, UNIX_EPOCH};

pub use kurbo::{Point, Vec2};

/// Upper bound for a manually requested frame count.
pub const MAX_FRAMES: u32 = 1000;

/// Resolved spatial state of one element: planar `(x, z)` position plus vertical offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Horizontal x offset.
    pub x: f64,
    /// Horizontal z offset.
    pub z: f64,
    /// Vertical offset.
    #[serde(default)]
    pub y_offset: f64,
}

impl Placement {
    /// Build a placement from raw components.
    pub fn new(x: f64, z: f64, y_offset: f64) -> Self {
        Self { x, z, y_offset }
    }

    /// Planar part as a `kurbo` point (`z` maps to the point's `y`).
    pub fn planar(self) -> Point {
        Point::new(self.x, self.z)
    }

    /// Shift by a planar delta and a vertical delta.
    pub fn translated(self, planar: Vec2, dy: f64) -> Self {
        Self {
            x: self.x + planar.x,
            z: self.z + planar.y,
            y_offset: self.y_offset + dy,
        }
    }
}

/// One element of a keyframe: id, element-local placement and, when already known, its color.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameElement {
    /// Element id.
    pub id: String,
    /// Element-local placement (layer and skill vertical offsets not yet applied).
    pub placement: Placement,
    /// Resolved color; `None` means "resolve from the live snapshot at emit time".
    pub color: Option<String>,
}

impl FrameElement {
    /// Frame entry without a resolved color.
    pub fn new(id: impl Into<String>, placement: Placement) -> Self {
        Self {
            id: id.into(),
            placement,
            color: None,
        }
    }
}

/// One discrete emitted state: a delay followed by the element placements drawn after it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Frame {
    /// Ticks to wait before drawing this frame.
    pub delay: u32,
    /// Drawn elements, in draw order.
    pub elements: Vec<FrameElement>,
}

/// How the synthesized frame count is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameMode {
    /// Derive the count from the active animation modes.
    #[default]
    Auto,
    /// Use the caller-supplied count, clamped to `[1, MAX_FRAMES]`.
    Manual,
}

/// Clamp a caller-supplied frame count into `[1, MAX_FRAMES]`.
pub fn clamp_frame_count(requested: i64) -> u32 {
    requested.clamp(1, i64::from(MAX_FRAMES)) as u32
}

/// Arithmetic mean of a set of planar points, `None` when empty.
pub fn centroid(points: impl IntoIterator<Item = Point>) -> Option<Point> {
    let mut sum = Vec2::ZERO;
    let mut n = 0usize;
    for p in points {
        sum += p.to_vec2();
        n += 1;
    }
    if n == 0 {
        return None;
    }
    Some((sum / n as f64).to_point())
}

/// Current wall-clock time as an RFC 3339 UTC timestamp (second precision).
pub fn now_utc_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format_utc_timestamp(secs)
}

/// Format seconds since the Unix epoch as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_utc_timestamp(unix_secs: u64) -> String {
    let days = (unix_secs / 86_400) as i64;
    let rem = unix_secs % 86_400;
    let (hh, mm, ss) = (rem / 3600, (rem % 3600) / 60, rem % 60);

    // Civil-from-days over 400-year eras, epoch shifted to 0000-03-01.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    format!("{year:04}-{month:02}-{day:02}T{hh:02}:{mm:02}:{ss:02}Z")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
