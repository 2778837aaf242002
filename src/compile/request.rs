use crate::{
    animation::frames::FrameSpec,
    foundation::{
        core::FrameMode,
        error::{AuraError, AuraResult},
    },
    scene::{
        action::ActionRecord,
        model::Layer,
        modes::{ChainItem, ModeFlags, ModeSettings},
    },
};

fn default_skill_name() -> String {
    "MySkill".to_owned()
}

fn default_frame_layer_delay() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_frame_layer_loop_delay() -> u32 {
    10
}

fn default_source() -> String {
    "2D Editor".to_owned()
}

/// Skill-wide output settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSettings {
    /// Name of the generated skill.
    #[serde(default = "default_skill_name")]
    pub skill_name: String,
    /// Vertical offset added to every line.
    #[serde(default)]
    pub y_offset: f64,
    /// Ticks between two frame layers of a sequence.
    #[serde(default = "default_frame_layer_delay", alias = "gifFrameDelay")]
    pub frame_layer_delay: u32,
    /// Append a loop pause after a frame-layer sequence.
    #[serde(default = "default_true", alias = "gifLoop")]
    pub frame_layer_loop: bool,
    /// Loop pause length in ticks.
    #[serde(default = "default_frame_layer_loop_delay", alias = "gifLoopDelay")]
    pub frame_layer_loop_delay: u32,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            skill_name: default_skill_name(),
            y_offset: 0.0,
            frame_layer_delay: default_frame_layer_delay(),
            frame_layer_loop: true,
            frame_layer_loop_delay: default_frame_layer_loop_delay(),
        }
    }
}

/// Everything one compile call reads.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileRequest {
    /// Scene layers in order.
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Skill-wide settings.
    #[serde(default)]
    pub settings: ScriptSettings,
    /// Mode toggles.
    #[serde(default)]
    pub modes: ModeFlags,
    /// Mode settings.
    #[serde(default)]
    pub mode_settings: ModeSettings,
    /// Frame count selection.
    #[serde(default)]
    pub frame_mode: FrameMode,
    /// Requested count in manual frame mode.
    #[serde(default)]
    pub manual_frame_count: i64,
    /// Authored chain sequence.
    #[serde(default)]
    pub chain_items: Vec<ChainItem>,
    /// Recorded interaction log.
    #[serde(default)]
    pub action_records: Vec<ActionRecord>,
    /// Caller context label ("2D Editor", "3D Editor", ...).
    #[serde(default = "default_source")]
    pub source: String,
    /// Run the ring optimizer.
    #[serde(default)]
    pub optimize: bool,
}

impl Default for CompileRequest {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            settings: ScriptSettings::default(),
            modes: ModeFlags::default(),
            mode_settings: ModeSettings::default(),
            frame_mode: FrameMode::Auto,
            manual_frame_count: 0,
            chain_items: Vec::new(),
            action_records: Vec::new(),
            source: default_source(),
            optimize: false,
        }
    }
}

impl CompileRequest {
    /// Request over `layers` with every other input at its default.
    pub fn new(layers: Vec<Layer>) -> Self {
        Self {
            layers,
            ..Self::default()
        }
    }

    /// Parse a JSON request.
    pub fn from_json(text: &str) -> AuraResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Frame count choice of this request.
    pub fn frame_spec(&self) -> FrameSpec {
        FrameSpec {
            mode: self.frame_mode,
            manual_count: self.manual_frame_count,
        }
    }

    /// Elements across all layers, before filtering.
    pub fn element_count(&self) -> usize {
        self.layers.iter().map(|l| l.elements.len()).sum()
    }

    /// Reject inputs no script can be generated from.
    pub fn validate(&self) -> AuraResult<()> {
        if self.settings.skill_name.trim().is_empty() {
            return Err(AuraError::validation("settings.skillName must not be empty"));
        }
        if !self.settings.y_offset.is_finite() {
            return Err(AuraError::validation("settings.yOffset must be finite"));
        }
        for layer in &self.layers {
            if !layer.y_offset.is_finite() || !layer.alpha.is_finite() {
                return Err(AuraError::validation(format!(
                    "layer \"{}\" has a non-finite yOffset or alpha",
                    layer.name
                )));
            }
        }
        self.mode_settings.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/request.rs"]
mod tests;
