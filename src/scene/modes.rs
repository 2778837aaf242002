use serde::{Deserialize, Serialize};

use crate::foundation::error::{AuraError, AuraResult};

/// Declarative animation and ordering toggles shared by all layers of one compile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModeFlags {
    /// Translate along a compass direction.
    pub move_mode: bool,
    /// Orbit around the layer centroid.
    pub rotate_mode: bool,
    /// Small satellite circle around each element.
    pub local_rotate_mode: bool,
    /// Rise vertically until a height cutoff.
    pub rise_mode: bool,
    /// Cycle the hue of every element over time.
    pub rainbow_mode: bool,
    /// Fixed hue gradient across the element order.
    pub static_rainbow_mode: bool,
    /// Nearest-neighbour ordering.
    pub proximity_mode: bool,
    /// Explicit chain ordering.
    pub chain_mode: bool,
    /// Merge consecutive identical point-particle lines.
    pub performance_mode: bool,
}

impl ModeFlags {
    /// True when any mode that produces more than one frame is on.
    pub fn any_animation(&self) -> bool {
        self.move_mode
            || self.rotate_mode
            || self.local_rotate_mode
            || self.rise_mode
            || self.rainbow_mode
    }

    /// True when any mode that displaces elements horizontally is on.
    pub fn any_spatial(&self) -> bool {
        self.move_mode || self.rotate_mode || self.local_rotate_mode
    }

    /// Human-readable names of the active modes, in a fixed order.
    pub fn active_names(&self) -> Vec<&'static str> {
        [
            (self.rotate_mode, "Rotate Mode"),
            (self.rainbow_mode, "Rainbow Mode"),
            (self.rise_mode, "Rise Mode"),
            (self.local_rotate_mode, "Local Rotate Mode"),
            (self.proximity_mode, "Proximity Chain"),
            (self.chain_mode, "Manual Chain"),
            (self.static_rainbow_mode, "Static Rainbow"),
            (self.move_mode, "Move Mode"),
            (self.performance_mode, "Performance Mode"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

/// Compass direction value meaning "no horizontal movement".
pub const NO_DIRECTION: i32 = -1;

/// Translate-mode settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveSettings {
    /// Distance per frame.
    pub speed: f64,
    /// Distance cap.
    pub max_distance: f64,
    /// 8-way compass index, or [`NO_DIRECTION`].
    pub direction: i32,
    /// Vertical rise reached at `max_distance`.
    pub elevation: f64,
}

impl Default for MoveSettings {
    fn default() -> Self {
        Self {
            speed: 0.5,
            max_distance: 10.0,
            direction: 0,
            elevation: 0.0,
        }
    }
}

/// Orbit-mode settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RotateSettings {
    /// Seconds per revolution (20 frames per second).
    pub period: f64,
}

impl Default for RotateSettings {
    fn default() -> Self {
        Self { period: 5.0 }
    }
}

/// Local-satellite settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalRotateSettings {
    /// Angular speed factor.
    pub speed: f64,
    /// Satellite radius.
    pub radius: f64,
}

impl Default for LocalRotateSettings {
    fn default() -> Self {
        Self {
            speed: 1.0,
            radius: 0.5,
        }
    }
}

/// Rise-mode settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiseSettings {
    /// Height gained per frame.
    pub speed: f64,
    /// Height after which frames are dropped.
    pub max_height: f64,
}

impl Default for RiseSettings {
    fn default() -> Self {
        Self {
            speed: 0.5,
            max_height: 10.0,
        }
    }
}

/// Proximity-ordering settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProximitySettings {
    /// Elements between two step delays.
    pub step: u32,
    /// Step delay in ticks.
    pub delay: u32,
}

impl Default for ProximitySettings {
    fn default() -> Self {
        Self { step: 5, delay: 2 }
    }
}

/// Hue-cycling settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RainbowSettings {
    /// Seconds per full hue cycle (20 frames per second).
    pub period: f64,
}

impl Default for RainbowSettings {
    fn default() -> Self {
        Self { period: 3.0 }
    }
}

/// Numeric configuration for every mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModeSettings {
    /// Translate mode.
    pub move_mode: MoveSettings,
    /// Orbit mode.
    pub rotate_mode: RotateSettings,
    /// Local satellite mode.
    pub local_rotate_mode: LocalRotateSettings,
    /// Rise mode.
    pub rise_mode: RiseSettings,
    /// Proximity ordering.
    pub proximity_mode: ProximitySettings,
    /// Hue cycling.
    pub rainbow_mode: RainbowSettings,
}

impl ModeSettings {
    /// Reject settings no frame can be synthesized from.
    pub fn validate(&self) -> AuraResult<()> {
        fn non_negative(name: &str, v: f64) -> AuraResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(AuraError::validation(format!(
                    "{name} must be a finite, non-negative number (got {v})"
                )));
            }
            Ok(())
        }

        non_negative("moveMode.speed", self.move_mode.speed)?;
        non_negative("moveMode.maxDistance", self.move_mode.max_distance)?;
        if !self.move_mode.elevation.is_finite() {
            return Err(AuraError::validation("moveMode.elevation must be finite"));
        }
        if !(NO_DIRECTION..8).contains(&self.move_mode.direction) {
            return Err(AuraError::validation(format!(
                "moveMode.direction must be -1 or a compass index 0..=7 (got {})",
                self.move_mode.direction
            )));
        }
        non_negative("rotateMode.period", self.rotate_mode.period)?;
        non_negative("localRotateMode.speed", self.local_rotate_mode.speed)?;
        non_negative("localRotateMode.radius", self.local_rotate_mode.radius)?;
        non_negative("riseMode.speed", self.rise_mode.speed)?;
        non_negative("riseMode.maxHeight", self.rise_mode.max_height)?;
        non_negative("rainbowMode.period", self.rainbow_mode.period)?;
        if self.proximity_mode.step == 0 {
            return Err(AuraError::validation("proximityMode.step must be > 0"));
        }
        Ok(())
    }
}

/// One entry of an authored chain sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChainItem {
    /// A group of elements played together, in the listed order.
    #[serde(rename_all = "camelCase")]
    Element {
        /// Member element ids.
        element_ids: Vec<String>,
    },
    /// An explicit pause.
    Delay {
        /// Pause length in ticks.
        delay: u32,
    },
}

impl ChainItem {
    /// Group item for `ids`.
    pub fn group<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Element {
            element_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Delay item.
    pub fn delay(ticks: u32) -> Self {
        Self::Delay { delay: ticks }
    }
}

impl<'de> Deserialize<'de> for ChainItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(tag = "type", rename_all = "lowercase")]
        enum Repr {
            #[serde(rename_all = "camelCase")]
            Element {
                #[serde(default)]
                element_ids: Option<Vec<String>>,
                #[serde(default)]
                element_id: Option<String>,
            },
            Delay {
                #[serde(default)]
                delay: Option<u32>,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Element {
                element_ids,
                element_id,
            } => Ok(Self::Element {
                element_ids: element_ids
                    .or_else(|| element_id.map(|id| vec![id]))
                    .unwrap_or_default(),
            }),
            // A missing or zero delay still pauses for one tick.
            Repr::Delay { delay } => Ok(Self::Delay {
                delay: delay.filter(|d| *d > 0).unwrap_or(1),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/modes.rs"]
mod tests;
