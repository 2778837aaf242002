use serde::{Deserialize, Serialize};

use crate::foundation::core::Placement;

/// Kind of a recorded editor interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Relative move by a delta.
    Move,
    /// Absolute positions sampled while dragging.
    MoveContinuous,
    /// Absolute positions sampled during a gizmo transform.
    TransformUpdate,
    /// Final absolute positions of a gizmo transform.
    TransformEnd,
    /// Color change.
    Color,
    /// Repeat-count change.
    ParticleCount,
    /// Element creation (informational only).
    ElementAdd,
    /// Pause holding the last known positions.
    Idle,
    /// Any other editor interaction (selection, rotate/scale previews, ...); ignored.
    #[serde(other)]
    Other,
}

impl ActionKind {
    /// Kinds whose payload carries absolute positions.
    pub fn is_absolute(self) -> bool {
        matches!(
            self,
            Self::MoveContinuous | Self::TransformUpdate | Self::TransformEnd
        )
    }
}

/// Absolute position of one element inside an action payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSample {
    /// Element id.
    pub id: String,
    /// Horizontal x coordinate.
    pub x: f64,
    /// Horizontal z coordinate.
    pub z: f64,
    /// Vertical offset.
    #[serde(default)]
    pub y_offset: f64,
}

impl PositionSample {
    /// Build a sample.
    pub fn new(id: impl Into<String>, x: f64, z: f64, y_offset: f64) -> Self {
        Self {
            id: id.into(),
            x,
            z,
            y_offset,
        }
    }

    /// Sample as a placement.
    pub fn placement(&self) -> Placement {
        Placement::new(self.x, self.z, self.y_offset)
    }
}

/// Payload of an action record; which fields are set depends on the kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionData {
    /// `move`: x delta.
    pub delta_x: Option<f64>,
    /// `move`: z delta.
    pub delta_z: Option<f64>,
    /// `move`: vertical delta.
    pub delta_y_offset: Option<f64>,
    /// `color`: new color.
    pub color: Option<String>,
    /// `particle_count`: new repeat count.
    pub particle_count: Option<u32>,
    /// `move_continuous`: sampled positions.
    pub positions: Option<Vec<PositionSample>>,
    /// `transform_*`: current positions.
    pub current_positions: Option<Vec<PositionSample>>,
    /// `idle`: positions to hold.
    pub last_positions: Option<Vec<PositionSample>>,
}

impl ActionData {
    /// Absolute positions carried by the payload (`currentPositions` wins over `positions`).
    pub fn absolute_positions(&self) -> &[PositionSample] {
        self.current_positions
            .as_deref()
            .or(self.positions.as_deref())
            .unwrap_or(&[])
    }

    /// `(dx, dz, dy)` delta of a `move`, missing components are zero.
    pub fn delta(&self) -> (f64, f64, f64) {
        (
            self.delta_x.unwrap_or(0.0),
            self.delta_z.unwrap_or(0.0),
            self.delta_y_offset.unwrap_or(0.0),
        )
    }
}

/// One immutable entry of the chronological interaction log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// Record identifier.
    #[serde(default)]
    pub id: String,
    /// Editor timestamp in milliseconds.
    #[serde(default)]
    pub timestamp: f64,
    /// Record kind.
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Target element ids.
    #[serde(default)]
    pub element_ids: Vec<String>,
    /// Kind-specific payload.
    #[serde(default)]
    pub data: ActionData,
    /// Ticks to wait before the next frame.
    #[serde(default)]
    pub delay_ticks: u32,
}

impl ActionRecord {
    /// Record of `kind` targeting `element_ids` with an empty payload.
    pub fn new<I, S>(kind: ActionKind, element_ids: I, delay_ticks: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: String::new(),
            timestamp: 0.0,
            kind,
            element_ids: element_ids.into_iter().map(Into::into).collect(),
            data: ActionData::default(),
            delay_ticks,
        }
    }

    /// Relative move of `element_ids` by `(dx, dz, dy)`.
    pub fn moved<I, S>(element_ids: I, (dx, dz, dy): (f64, f64, f64), delay_ticks: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rec = Self::new(ActionKind::Move, element_ids, delay_ticks);
        rec.data.delta_x = Some(dx);
        rec.data.delta_z = Some(dz);
        rec.data.delta_y_offset = Some(dy);
        rec
    }

    /// Absolute snapshot of `kind` carrying `samples`.
    pub fn snapshot(kind: ActionKind, samples: Vec<PositionSample>, delay_ticks: u32) -> Self {
        let ids: Vec<String> = samples.iter().map(|s| s.id.clone()).collect();
        let mut rec = Self::new(kind, ids, delay_ticks);
        rec.data.current_positions = Some(samples);
        rec
    }
}
