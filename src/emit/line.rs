use std::borrow::Cow;

use crate::{
    emit::params::ParamList,
    foundation::core::Placement,
    scene::{model::PrimitiveKind, params::PrimitiveParams},
};

/// Fully resolved arguments of one primitive invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSpec<'a> {
    /// Primitive grammar.
    pub kind: PrimitiveKind,
    /// Particle name.
    pub particle: &'a str,
    /// Color string.
    pub color: String,
    /// Particle amount.
    pub amount: f64,
    /// Repeat count.
    pub repeat: u32,
    /// Ticks between repeats.
    pub interval: u32,
    /// Final offsets relative to the targeter.
    pub placement: Placement,
    /// Target selector.
    pub targeter: &'a str,
    /// Primitive parameters.
    pub params: Cow<'a, PrimitiveParams>,
}

impl LineSpec<'_> {
    /// Render as one script line.
    pub fn render(&self) -> String {
        render_line(
            self.kind,
            self.particle,
            &self.color,
            self.amount,
            self.repeat,
            self.interval,
            self.placement.x,
            self.placement.z,
            self.placement.y_offset,
            self.targeter,
            &self.params,
        )
    }
}

fn fixed4(v: f64) -> String {
    let text = format!("{v:.4}");
    // Values that round to zero never carry a sign.
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_owned(),
        _ => text,
    }
}

/// Render one primitive invocation line.
///
/// Each primitive reads its own ordered subset of `params`; unknown primitives use the
/// point-particle grammar. Offsets are written with exactly four decimals.
#[allow(clippy::too_many_arguments)]
pub fn render_line(
    kind: PrimitiveKind,
    particle: &str,
    color: &str,
    amount: f64,
    repeat: u32,
    interval: u32,
    x: f64,
    z: f64,
    y: f64,
    targeter: &str,
    params: &PrimitiveParams,
) -> String {
    let p = params;
    let body = match kind {
        PrimitiveKind::Particles | PrimitiveKind::Unsupported => ParamList::new()
            .set("particle", particle)
            .set("color", color)
            .set("amount", amount)
            .set("size", 1.0)
            .set("repeat", repeat)
            .set("repeatInterval", interval),
        PrimitiveKind::ParticleLineHelix => ParamList::new()
            .push("Fo", p.from_origin)
            .push("db", p.distance_between)
            .push("hl", p.helix_length)
            .push("syo", p.start_y_offset)
            .push("tyo", p.target_y_offset)
            .set("particle", particle)
            .set("color", color)
            .push("hr", p.helix_radius)
            .set("speed", interval)
            .push("md", p.max_distance),
        PrimitiveKind::ParticleOrbital => ParamList::new()
            .push("r", p.radius)
            .push("points", p.points)
            .push("t", p.ticks)
            .push("i", p.interval)
            .push("rotX", p.rotation_x)
            .push("rotY", p.rotation_y)
            .push("rotZ", p.rotation_z)
            .push("offx", p.offset_x)
            .push("offy", p.offset_y)
            .push("offz", p.offset_z)
            .push("avx", p.angular_velocity_x)
            .push("avy", p.angular_velocity_y)
            .push("avz", p.angular_velocity_z)
            .push("rotate", p.rotate)
            .push("reversed", p.reversed)
            .set("particle", particle)
            .set("color", color),
        PrimitiveKind::ParticleRing => ParamList::new()
            .set("particle", particle)
            .set("color", color)
            .push("radius", p.ring_radius)
            .push("points", p.ring_points)
            .set("amount", amount),
        PrimitiveKind::ParticleLine => ParamList::new()
            .push("db", p.distance_between)
            .push("syo", p.start_y_offset)
            .push("tyo", p.target_y_offset)
            .push("fo", p.from_origin)
            .push("zz", p.zigzag)
            .push("zzs", p.zigzags)
            .push("zzo", p.zigzag_offset)
            .push("md", p.max_distance)
            .set("particle", particle)
            .set("color", color),
        PrimitiveKind::ParticleLineRing => ParamList::new()
            .push("db", p.distance_between)
            .push("syo", p.start_y_offset)
            .push("tyo", p.target_y_offset)
            .push("fo", p.from_origin)
            .push("rp", p.ringpoints)
            .push("rr", p.ringradius)
            .push("md", p.max_distance)
            .set("particle", particle)
            .set("color", color),
        PrimitiveKind::ParticleSphere => ParamList::new()
            .set("particle", particle)
            .set("color", color)
            .set("amount", amount)
            .push("radius", p.sphere_radius),
        PrimitiveKind::ParticleTornado => ParamList::new()
            .set("p", particle)
            .push("cp", p.cloud_particle.as_deref())
            .push("mr", p.max_radius)
            .push("h", p.tornado_height)
            .push("i", p.tornado_interval)
            .push("d", p.tornado_duration)
            .push("rs", p.rotation_speed)
            .push("sh", p.slice_height)
            .push("scd", p.stop_on_caster_death)
            .push("sed", p.stop_on_entity_death)
            .push("cs", p.cloud_size)
            .push("ca", p.cloud_amount)
            .push("chs", p.cloud_h_spread)
            .push("cvs", p.cloud_v_spread)
            .push("cps", p.cloud_p_speed)
            .push("cyo", p.cloud_y_offset),
    };

    format!(
        "  - {}{{{}}} @{}{{xoffset={};zoffset={};yoffset={}}}",
        kind.mechanic(),
        body.build(),
        targeter,
        fixed4(x),
        fixed4(z),
        fixed4(y),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/emit/line.rs"]
mod tests;
