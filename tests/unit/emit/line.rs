use super::*;

fn point(kind: PrimitiveKind, params: &PrimitiveParams) -> String {
    render_line(
        kind, "reddust", "#ff0000", 1.0, 2, 1, 1.5, -0.25, 0.0, "Origin", params,
    )
}

#[test]
fn point_particle_grammar() {
    assert_eq!(
        point(PrimitiveKind::Particles, &PrimitiveParams::default()),
        "  - e:p{p=reddust;c=#ff0000;a=1;size=1;repeat=2;repeatI=1} \
         @Origin{xoffset=1.5000;zoffset=-0.2500;yoffset=0.0000}"
    );
}

#[test]
fn unknown_primitives_fall_back_to_point_particles() {
    let params = PrimitiveParams::default();
    assert_eq!(
        point(PrimitiveKind::Unsupported, &params),
        point(PrimitiveKind::Particles, &params)
    );
}

#[test]
fn ring_grammar_reads_ring_fields() {
    let params = PrimitiveParams::default().with_ring(8, 2.5);
    assert_eq!(
        point(PrimitiveKind::ParticleRing, &params),
        "  - particlering{p=reddust;c=#ff0000;radius=2.5;points=8;a=1} \
         @Origin{xoffset=1.5000;zoffset=-0.2500;yoffset=0.0000}"
    );
}

#[test]
fn helix_uses_repeat_interval_as_speed() {
    let params = PrimitiveParams {
        from_origin: Some(true),
        helix_length: Some(4.0),
        helix_radius: Some(0.5),
        max_distance: Some(0.0),
        ..PrimitiveParams::default()
    };
    let line = render_line(
        PrimitiveKind::ParticleLineHelix,
        "flame",
        "#ffffff",
        1.0,
        1,
        3,
        0.0,
        0.0,
        2.0,
        "Self",
        &params,
    );
    assert_eq!(
        line,
        "  - particlelinehelix{Fo=true;hl=4;p=flame;c=#ffffff;hr=0.5;s=3} \
         @Self{xoffset=0.0000;zoffset=0.0000;yoffset=2.0000}"
    );
}

#[test]
fn tornado_and_orbital_grammars() {
    let params = PrimitiveParams {
        max_radius: Some(3.0),
        tornado_height: Some(6.0),
        cloud_particle: Some("cloud".to_owned()),
        stop_on_caster_death: Some(true),
        radius: Some(2.0),
        points: Some(5.0),
        reversed: Some(false),
        ..PrimitiveParams::default()
    };
    assert!(point(PrimitiveKind::ParticleTornado, &params)
        .starts_with("  - particletornado{p=reddust;cp=cloud;mr=3;h=6;scd=true} @Origin{"));
    assert!(point(PrimitiveKind::ParticleOrbital, &params)
        .starts_with("  - particleorbital{r=2;points=5;p=reddust;c=#ff0000} @Origin{"));
}

#[test]
fn line_family_grammars() {
    let params = PrimitiveParams {
        distance_between: Some(0.2),
        zigzag: Some(true),
        zigzags: Some(3.0),
        ringpoints: Some(6.0),
        ringradius: Some(1.0),
        sphere_radius: Some(4.0),
        ..PrimitiveParams::default()
    };
    assert!(point(PrimitiveKind::ParticleLine, &params)
        .starts_with("  - particleline{db=0.2;zz=true;zzs=3;p=reddust;c=#ff0000} @"));
    assert!(point(PrimitiveKind::ParticleLineRing, &params)
        .starts_with("  - particlelinering{db=0.2;rp=6;rr=1;p=reddust;c=#ff0000} @"));
    assert!(point(PrimitiveKind::ParticleSphere, &params)
        .starts_with("  - particlesphere{p=reddust;c=#ff0000;a=1;radius=4} @"));
}

#[test]
fn offsets_always_have_four_decimals() {
    let line = render_line(
        PrimitiveKind::Particles,
        "reddust",
        "#ffffff",
        1.0,
        1,
        1,
        -1e-9,
        1.0 / 3.0,
        12.345678,
        "Origin",
        &PrimitiveParams::default(),
    );
    assert!(line.ends_with("@Origin{xoffset=0.0000;zoffset=0.3333;yoffset=12.3457}"));
}

#[test]
fn line_spec_renders_like_render_line() {
    let spec = LineSpec {
        kind: PrimitiveKind::Particles,
        particle: "reddust",
        color: "#ff0000".to_owned(),
        amount: 1.0,
        repeat: 2,
        interval: 1,
        placement: Placement::new(1.5, -0.25, 0.0),
        targeter: "Origin",
        params: Cow::Owned(PrimitiveParams::default()),
    };
    assert_eq!(
        spec.render(),
        point(PrimitiveKind::Particles, &PrimitiveParams::default())
    );
}
