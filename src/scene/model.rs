use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    foundation::core::{Placement, Point},
    scene::params::PrimitiveParams,
};

/// Shape tag assigned by the editor tool that created an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementShape {
    /// Free-hand point.
    #[default]
    Free,
    /// Member of a circle outline.
    Circle,
    /// Member of a square outline.
    Square,
    /// Member of a triangle outline.
    Triangle,
    /// Member of a straight line.
    Line,
    /// Point sampled from an imported image.
    Image,
    /// Point sampled from an imported mesh.
    Obj,
    /// Point sampled from an imported animation frame.
    Gif,
    /// Any tag this compiler does not know about.
    #[serde(other)]
    Other,
}

/// How the members of a shape group were put together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOrigin {
    /// Drawn as one shape with an editor tool.
    #[default]
    Authored,
    /// Detected after the fact (for example by ring detection on imported points).
    Inferred,
}

/// Planar element position as stored by the editor.
///
/// Coordinates that are missing, non-numeric or non-finite deserialize to `None`; such
/// elements are filtered out before compilation instead of failing the request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal x coordinate.
    #[serde(default, deserialize_with = "lenient_coord")]
    pub x: Option<f64>,
    /// Horizontal z coordinate.
    #[serde(default, deserialize_with = "lenient_coord")]
    pub z: Option<f64>,
}

impl Position {
    /// Build a fully specified position.
    pub fn new(x: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            z: Some(z),
        }
    }
}

fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_f64()).filter(|v| v.is_finite()))
}

fn lenient_position<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| Position::deserialize(v).ok()))
}

/// A single particle element placed on a layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Identifier, unique within the owning layer.
    pub id: String,
    /// Shape tag of the tool that produced the element.
    #[serde(rename = "type", default)]
    pub shape: ElementShape,
    /// Planar position; `None` when missing or malformed.
    #[serde(default, deserialize_with = "lenient_position")]
    pub position: Option<Position>,
    /// Vertical offset relative to the layer.
    #[serde(default)]
    pub y_offset: Option<f64>,
    /// Element color override.
    #[serde(default)]
    pub color: Option<String>,
    /// Particle override.
    #[serde(default)]
    pub particle: Option<String>,
    /// Repeat count override.
    #[serde(default, rename = "elementCount")]
    pub repeat: Option<u32>,
    /// Shared tag of elements forming one shape.
    #[serde(default)]
    pub group_id: Option<String>,
    /// How the shape group was formed.
    #[serde(default)]
    pub group_origin: Option<GroupOrigin>,
    /// Free-form editor metadata, carried through untouched.
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl Element {
    /// Free-hand element at `(x, z)`.
    pub fn at(id: impl Into<String>, x: f64, z: f64) -> Self {
        Self {
            id: id.into(),
            position: Some(Position::new(x, z)),
            ..Self::default()
        }
    }

    /// Replace the shape tag.
    pub fn with_shape(mut self, shape: ElementShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the color override.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Put the element in a shape group.
    pub fn with_group(mut self, group_id: impl Into<String>, origin: GroupOrigin) -> Self {
        self.group_id = Some(group_id.into());
        self.group_origin = Some(origin);
        self
    }

    /// Set the vertical offset.
    pub fn with_y_offset(mut self, y_offset: f64) -> Self {
        self.y_offset = Some(y_offset);
        self
    }

    /// Set the repeat count override.
    pub fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = Some(repeat);
        self
    }

    /// Planar position if both coordinates are usable.
    pub fn planar(&self) -> Option<Point> {
        let pos = self.position?;
        Some(Point::new(pos.x?, pos.z?))
    }

    /// Authored placement (position plus vertical offset) if the position is usable.
    pub fn authored_placement(&self) -> Option<Placement> {
        let p = self.planar()?;
        let y = self.y_offset.filter(|v| v.is_finite()).unwrap_or(0.0);
        Some(Placement::new(p.x, p.y, y))
    }
}

/// Script primitive a layer is rendered with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// Plain point particle (`e:p`).
    #[default]
    Particles,
    /// Helix drawn along a line.
    ParticleLineHelix,
    /// Orbiting particle points.
    ParticleOrbital,
    /// Flat ring.
    ParticleRing,
    /// Straight particle line.
    ParticleLine,
    /// Ring swept along a line.
    ParticleLineRing,
    /// Sphere shell.
    ParticleSphere,
    /// Tornado column.
    ParticleTornado,
    /// Unknown primitive; rendered as a point particle.
    #[serde(other)]
    Unsupported,
}

impl PrimitiveKind {
    /// Script mechanic name.
    pub fn mechanic(self) -> &'static str {
        match self {
            Self::Particles | Self::Unsupported => "e:p",
            Self::ParticleLineHelix => "particlelinehelix",
            Self::ParticleOrbital => "particleorbital",
            Self::ParticleRing => "particlering",
            Self::ParticleLine => "particleline",
            Self::ParticleLineRing => "particlelinering",
            Self::ParticleSphere => "particlesphere",
            Self::ParticleTornado => "particletornado",
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_delay() -> u32 {
    20
}

fn default_particle() -> String {
    "reddust".to_owned()
}

fn default_color() -> String {
    "#ffffff".to_owned()
}

fn default_alpha() -> f64 {
    1.0
}

fn default_one() -> u32 {
    1
}

fn default_targeter() -> String {
    "Origin".to_owned()
}

/// An ordered set of elements sharing render defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Layer identifier.
    #[serde(default)]
    pub id: String,
    /// Display name, echoed as a script comment.
    #[serde(default)]
    pub name: String,
    /// Hidden layers are skipped entirely.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Elements in authored order.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Delay emitted before a static layer, in ticks.
    #[serde(default = "default_tick_delay")]
    pub tick_delay: u32,
    /// Default particle.
    #[serde(default = "default_particle")]
    pub particle: String,
    /// Default color.
    #[serde(default = "default_color")]
    pub color: String,
    /// Particle amount per line.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Default repeat count.
    #[serde(default = "default_one")]
    pub repeat: u32,
    /// Ticks between repeats.
    #[serde(default = "default_one")]
    pub repeat_interval: u32,
    /// Target selector the offsets are relative to.
    #[serde(default = "default_targeter")]
    pub targeter: String,
    /// Vertical offset added to every element.
    #[serde(default)]
    pub y_offset: f64,
    /// Primitive used for every line of this layer.
    #[serde(default)]
    pub effect_type: PrimitiveKind,
    /// Primitive-specific parameters.
    #[serde(default)]
    pub effect_params: PrimitiveParams,
    /// Marks the layer as one frame of a frame-layer sequence.
    #[serde(default)]
    pub is_gif_frame: bool,
    /// Position of the layer inside its frame-layer sequence.
    #[serde(default)]
    pub frame_index: Option<u32>,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            visible: true,
            elements: Vec::new(),
            tick_delay: default_tick_delay(),
            particle: default_particle(),
            color: default_color(),
            alpha: default_alpha(),
            repeat: 1,
            repeat_interval: 1,
            targeter: default_targeter(),
            y_offset: 0.0,
            effect_type: PrimitiveKind::Particles,
            effect_params: PrimitiveParams::default(),
            is_gif_frame: false,
            frame_index: None,
        }
    }
}

impl Layer {
    /// Visible layer with editor defaults.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append elements in order.
    pub fn with_elements(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.elements.extend(elements);
        self
    }

    /// Elements with a usable position, in authored order.
    pub fn filtered_elements(&self) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| e.planar().is_some())
            .collect()
    }

    /// Element lookup by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Effective particle of `el`.
    pub fn particle_of<'a>(&'a self, el: &'a Element) -> &'a str {
        el.particle.as_deref().unwrap_or(&self.particle)
    }

    /// Effective color of `el`.
    pub fn color_of<'a>(&'a self, el: &'a Element) -> &'a str {
        el.color.as_deref().unwrap_or(&self.color)
    }

    /// Effective repeat count of `el` (zero counts fall back to the layer).
    pub fn repeat_of(&self, el: &Element) -> u32 {
        el.repeat.filter(|r| *r > 0).unwrap_or(self.repeat)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
