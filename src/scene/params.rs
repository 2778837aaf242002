use serde::{Deserialize, Serialize};

/// Primitive-specific parameter bag attached to a layer.
///
/// Every field is optional; each primitive grammar reads its own subset and drops the
/// fields that are unset or blank.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrimitiveParams {
    // Line family.
    pub distance_between: Option<f64>,
    pub start_y_offset: Option<f64>,
    pub target_y_offset: Option<f64>,
    pub from_origin: Option<bool>,
    pub max_distance: Option<f64>,

    // Helix.
    pub helix_length: Option<f64>,
    pub helix_radius: Option<f64>,
    pub helix_rotation: Option<f64>,

    // Orbital.
    pub radius: Option<f64>,
    pub points: Option<f64>,
    pub ticks: Option<f64>,
    pub interval: Option<f64>,
    pub rotation_x: Option<f64>,
    pub rotation_y: Option<f64>,
    pub rotation_z: Option<f64>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub offset_z: Option<f64>,
    pub angular_velocity_x: Option<f64>,
    pub angular_velocity_y: Option<f64>,
    pub angular_velocity_z: Option<f64>,
    pub rotate: Option<bool>,
    pub reversed: Option<bool>,

    // Ring.
    pub ring_points: Option<f64>,
    pub ring_radius: Option<f64>,

    // Zig-zag line.
    pub zigzag: Option<bool>,
    pub zigzags: Option<f64>,
    pub zigzag_offset: Option<f64>,

    // Line ring (editor stores these keys lower-case).
    pub ringpoints: Option<f64>,
    pub ringradius: Option<f64>,

    // Sphere.
    pub sphere_radius: Option<f64>,

    // Tornado.
    pub max_radius: Option<f64>,
    pub tornado_height: Option<f64>,
    pub tornado_interval: Option<f64>,
    pub tornado_duration: Option<f64>,
    pub rotation_speed: Option<f64>,
    pub slice_height: Option<f64>,
    pub stop_on_caster_death: Option<bool>,
    pub stop_on_entity_death: Option<bool>,
    pub cloud_particle: Option<String>,
    pub cloud_size: Option<f64>,
    pub cloud_amount: Option<f64>,
    pub cloud_h_spread: Option<f64>,
    pub cloud_v_spread: Option<f64>,
    pub cloud_p_speed: Option<f64>,
    pub cloud_y_offset: Option<f64>,
}

impl PrimitiveParams {
    /// Copy of `self` describing a ring with `points` members of the given `radius`.
    pub fn with_ring(&self, points: usize, radius: f64) -> Self {
        Self {
            ring_points: Some(points as f64),
            ring_radius: Some(radius),
            ..self.clone()
        }
    }
}
