use crate::{
    animation::frames::{
        FrameSpec, Orbit, frame_count, rise_cutoff, satellite_offset, translate_offset,
    },
    foundation::{
        color::hue_hex,
        core::{Frame, FrameElement, Placement, Vec2, centroid},
    },
    replay::replayer::Replay,
    scene::{
        model::{Element, Layer},
        modes::{ModeFlags, ModeSettings},
    },
};

/// Everything the synthesizer reads for one layer.
#[derive(Clone, Copy, Debug)]
pub struct SynthInput<'a> {
    /// Layer supplying defaults.
    pub layer: &'a Layer,
    /// Filtered elements in draw order.
    pub elements: &'a [&'a Element],
    /// Active modes.
    pub modes: &'a ModeFlags,
    /// Mode settings.
    pub settings: &'a ModeSettings,
    /// Frame count choice.
    pub frames: FrameSpec,
    /// Live snapshot produced by replay.
    pub live: &'a Replay,
}

/// Stateless frame synthesizer for static and procedurally animated layers.
pub struct Synthesizer;

impl Synthesizer {
    /// Produce the frames of one layer.
    ///
    /// Without an animation mode the layer is a single frame delayed by its own tick delay.
    /// Otherwise the first emitted frame has delay 0 and every following frame delay 1.
    /// Every frame lists the input elements in input order with a resolved color.
    #[tracing::instrument(
        skip(input),
        fields(layer = %input.layer.name, elements = input.elements.len())
    )]
    pub fn synthesize(input: &SynthInput<'_>) -> Vec<Frame> {
        if !input.modes.any_animation() {
            let elements = (0..input.elements.len())
                .map(|idx| Self::element_at(input, idx, 0, 1, &[]))
                .collect();
            return vec![Frame {
                delay: input.layer.tick_delay,
                elements,
            }];
        }

        let total = frame_count(input.modes, input.settings, input.frames);
        let cutoff = input
            .modes
            .rise_mode
            .then(|| rise_cutoff(&input.settings.rise_mode))
            .flatten();

        let orbits: Vec<Orbit> = if input.modes.rotate_mode {
            let center =
                centroid(input.elements.iter().filter_map(|e| e.planar())).unwrap_or_default();
            input
                .elements
                .iter()
                .map(|e| Orbit::around(center, e.planar().unwrap_or(center)))
                .collect()
        } else {
            Vec::new()
        };

        let mut frames = Vec::new();
        for frame in 0..total {
            if cutoff.is_some_and(|c| frame >= c) {
                continue;
            }
            let elements = (0..input.elements.len())
                .map(|idx| Self::element_at(input, idx, frame, total, &orbits))
                .collect();
            frames.push(Frame {
                delay: if frames.is_empty() { 0 } else { 1 },
                elements,
            });
        }

        tracing::debug!(frames = frames.len(), total, "layer frames synthesized");
        frames
    }

    fn element_at(
        input: &SynthInput<'_>,
        idx: usize,
        frame: u32,
        total: u32,
        orbits: &[Orbit],
    ) -> FrameElement {
        let el = input.elements[idx];
        let modes = input.modes;
        let settings = input.settings;

        let base = input
            .live
            .position(&el.id)
            .or_else(|| el.authored_placement())
            .unwrap_or_default();

        let mut planar = Vec2::ZERO;
        let mut dy = 0.0;
        if modes.move_mode {
            let (h, v) = translate_offset(&settings.move_mode, frame);
            planar += h;
            dy += v;
        }
        if let Some(orbit) = orbits.get(idx) {
            planar += orbit.offset(f64::from(frame) / f64::from(total));
        }
        if modes.rise_mode {
            dy += settings.rise_mode.speed * f64::from(frame);
        }

        let mut placement: Placement = base.translated(planar, dy);
        if modes.local_rotate_mode {
            placement =
                placement.translated(satellite_offset(&settings.local_rotate_mode, frame), 0.0);
        }

        FrameElement {
            id: el.id.clone(),
            placement,
            color: Some(resolve_color(input, el, idx, frame, total)),
        }
    }
}

/// Color of `el` at `frame`, never written back into the element.
pub fn resolve_color(
    input: &SynthInput<'_>,
    el: &Element,
    idx: usize,
    frame: u32,
    total: u32,
) -> String {
    if input.modes.rainbow_mode {
        return hue_hex(f64::from(frame) / f64::from(total.max(1)));
    }
    if input.modes.static_rainbow_mode {
        let count = input.elements.len();
        let hue = if count > 1 {
            idx as f64 / (count - 1) as f64
        } else {
            0.0
        };
        return hue_hex(hue);
    }
    input
        .live
        .color(&el.id)
        .unwrap_or_else(|| input.layer.color_of(el))
        .to_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/synth.rs"]
mod tests;
