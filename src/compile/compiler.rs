use std::borrow::Cow;

use crate::{
    animation::synth::{SynthInput, Synthesizer},
    compile::request::CompileRequest,
    emit::{
        line::LineSpec,
        script::{ScriptHeader, ScriptWriter},
    },
    foundation::{
        core::{Frame, Placement, now_utc_timestamp},
        error::AuraResult,
    },
    notify::{banner::FALLBACK_BANNER, webhook::EffectSummary},
    optimize::{
        compact::compact,
        ring::{DrawItem, Drawn, collapse_rings},
    },
    order::plan::{OrderSource, OrderStep, arrange},
    replay::replayer::{Replay, replay},
    scene::{
        model::{Element, GroupOrigin, Layer, PrimitiveKind},
        modes::ChainItem,
    },
};

/// Text inputs that vary between runs but not between stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptContext {
    /// Generation timestamp written into the header.
    pub generated_at: String,
    /// Community link written into header and footer.
    pub banner: String,
}

impl ScriptContext {
    /// Context with explicit values.
    pub fn new(generated_at: impl Into<String>, banner: impl Into<String>) -> Self {
        Self {
            generated_at: generated_at.into(),
            banner: banner.into(),
        }
    }

    /// Current time and the static community link.
    pub fn offline() -> Self {
        Self::new(now_utc_timestamp(), FALLBACK_BANNER)
    }
}

/// Line statistics of a compiled script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptStats {
    /// Layers in the request.
    pub layers: usize,
    /// Elements in the request, before filtering.
    pub elements: usize,
    /// Delay and primitive lines written.
    pub lines: usize,
    /// Frames written across all layers.
    pub frames: usize,
}

/// A compiled script and its statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledScript {
    /// Final script text.
    pub text: String,
    /// Counters for summaries.
    pub stats: ScriptStats,
}

impl CompiledScript {
    /// Notification summary of this script.
    pub fn summary(&self, request: &CompileRequest, generated_at: &str) -> EffectSummary {
        EffectSummary {
            skill_name: request.settings.skill_name.clone(),
            source: request.source.clone(),
            layer_count: self.stats.layers,
            element_count: self.stats.elements,
            line_count: self.stats.lines,
            active_modes: request
                .modes
                .active_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            optimized: request.optimize,
            generated_at: generated_at.to_owned(),
        }
    }
}

/// Compile `request` into a script.
///
/// A replay with recorded frames plays those frames back and skips every other stage.
/// Otherwise frame layers are written as a timed sequence, then each remaining visible
/// layer is ordered, synthesized, optionally optimized and emitted.
#[tracing::instrument(
    skip(request, ctx),
    fields(layers = request.layers.len(), skill = %request.settings.skill_name)
)]
pub fn compile(request: &CompileRequest, ctx: &ScriptContext) -> AuraResult<CompiledScript> {
    request.validate()?;

    let live = replay(&request.action_records, &request.layers);
    let mut out = ScriptWriter::new(&request.settings.skill_name);
    let mut frames = 0;

    if live.has_frames() {
        frames += emit_recorded(request, &live, &mut out);
    } else {
        frames += emit_frame_layers(request, &live, &mut out);
        for layer in request.layers.iter().filter(|l| l.visible && !l.is_gif_frame) {
            frames += emit_layer(request, layer, &live, &mut out);
        }
    }

    let chain_groups = (request.modes.chain_mode && !request.chain_items.is_empty()).then(|| {
        request
            .chain_items
            .iter()
            .filter(|i| matches!(i, ChainItem::Element { .. }))
            .count()
    });
    let header = ScriptHeader {
        generated_at: &ctx.generated_at,
        banner: &ctx.banner,
        element_count: request.element_count(),
        active_modes: request.modes.active_names(),
        recorded_actions: request.action_records.len(),
        chain_groups,
    };
    let stats = ScriptStats {
        layers: request.layers.len(),
        elements: request.element_count(),
        lines: out.instruction_count(),
        frames,
    };
    tracing::debug!(lines = stats.lines, frames, "script compiled");

    Ok(CompiledScript {
        text: out.finish(&header),
        stats,
    })
}

/// Compile `request`, turning any failure into a single comment line.
pub fn compile_or_comment(request: &CompileRequest, ctx: &ScriptContext) -> String {
    match compile(request, ctx) {
        Ok(script) => script.text,
        Err(err) => {
            tracing::warn!(error = %err, "script generation failed");
            format!("# Error generating script: {err}")
        }
    }
}

/// Resolve the banner, compile, and fire the notification after the text is ready.
#[cfg(feature = "network")]
pub async fn compile_and_notify(
    request: &CompileRequest,
    banner: &crate::notify::banner::BannerConfig,
    notify: &crate::notify::webhook::NotifyConfig,
) -> String {
    let ctx = ScriptContext::new(
        now_utc_timestamp(),
        crate::notify::banner::fetch_banner(banner).await,
    );
    match compile(request, &ctx) {
        Ok(script) => {
            crate::notify::webhook::dispatch(notify, script.summary(request, &ctx.generated_at));
            script.text
        }
        Err(err) => {
            tracing::warn!(error = %err, "script generation failed");
            format!("# Error generating script: {err}")
        }
    }
}

/// Per-layer attribute resolution shared by all emit paths.
struct LayerLines<'a> {
    request: &'a CompileRequest,
    layer: &'a Layer,
    live: &'a Replay,
}

impl<'a> LayerLines<'a> {
    fn draw_item(&self, el: &'a Element, local: Placement, color: Option<&str>) -> DrawItem<'a> {
        let color = color
            .or_else(|| self.live.color(&el.id))
            .unwrap_or_else(|| self.layer.color_of(el))
            .to_owned();
        let repeat = self
            .live
            .repeat(&el.id)
            .filter(|r| *r > 0)
            .unwrap_or_else(|| self.layer.repeat_of(el));
        DrawItem {
            element: el,
            placement: Placement::new(
                local.x,
                local.z,
                local.y_offset + self.layer.y_offset + self.request.settings.y_offset,
            ),
            color,
            repeat,
        }
    }

    fn spec(&self, item: &DrawItem<'a>) -> LineSpec<'a> {
        LineSpec {
            kind: self.layer.effect_type,
            particle: self.layer.particle_of(item.element),
            color: item.color.clone(),
            amount: self.layer.alpha,
            repeat: item.repeat,
            interval: self.layer.repeat_interval,
            placement: item.placement,
            targeter: &self.layer.targeter,
            params: Cow::Borrowed(&self.layer.effect_params),
        }
    }

    /// Write one contiguous run of draws, through the optional optimizer passes.
    fn flush(&self, run: &mut Vec<DrawItem<'a>>, out: &mut ScriptWriter) {
        if run.is_empty() {
            return;
        }
        let mut specs = Vec::with_capacity(run.len());
        if self.request.optimize {
            for drawn in collapse_rings(run) {
                match drawn {
                    Drawn::Single(item) => specs.push(self.spec(item)),
                    Drawn::Ring(ring) => {
                        out.comment(format_args!(
                            "Ring {} ({} points, {})",
                            ring.group_id,
                            ring.members,
                            match ring.origin {
                                GroupOrigin::Authored => "authored",
                                GroupOrigin::Inferred => "inferred",
                            }
                        ));
                        specs.push(LineSpec {
                            kind: PrimitiveKind::ParticleRing,
                            particle: &self.layer.particle,
                            color: ring.color.clone(),
                            amount: self.layer.alpha,
                            repeat: self.layer.repeat,
                            interval: self.layer.repeat_interval,
                            placement: ring.placement(),
                            targeter: &self.layer.targeter,
                            params: Cow::Owned(
                                self.layer.effect_params.with_ring(ring.members, ring.radius),
                            ),
                        });
                    }
                }
            }
        } else {
            specs.extend(run.iter().map(|item| self.spec(item)));
        }
        if self.request.modes.performance_mode {
            specs = compact(specs);
        }
        for spec in &specs {
            out.primitive(spec.render());
        }
        run.clear();
    }
}

fn emit_recorded(request: &CompileRequest, live: &Replay, out: &mut ScriptWriter) -> usize {
    out.comment("Action Recording Mode - Base canvas elements skipped, only actions shown");
    out.comment(format_args!("Action Recording Animation: {} frames", live.frames.len()));

    for (index, frame) in live.frames.iter().enumerate() {
        // The first recorded frame always plays immediately.
        if index > 0 && frame.delay > 0 {
            out.delay(frame.delay);
        }
        // One run per owning layer, in first-appearance order.
        let mut runs: Vec<(LayerLines<'_>, Vec<DrawItem<'_>>)> = Vec::new();
        for fe in &frame.elements {
            let Some((layer, el)) = owner(request, &fe.id) else {
                continue;
            };
            let slot = match runs.iter().position(|(l, _)| std::ptr::eq(l.layer, layer)) {
                Some(slot) => slot,
                None => {
                    let lines = LayerLines {
                        request,
                        layer,
                        live,
                    };
                    runs.push((lines, Vec::new()));
                    runs.len() - 1
                }
            };
            let (lines, run) = &mut runs[slot];
            run.push(lines.draw_item(el, fe.placement, fe.color.as_deref()));
        }
        for (lines, mut run) in runs {
            lines.flush(&mut run, out);
        }
    }
    live.frames.len()
}

/// First visible layer holding a drawable element `id`.
fn owner<'r>(request: &'r CompileRequest, id: &str) -> Option<(&'r Layer, &'r Element)> {
    request
        .layers
        .iter()
        .filter(|l| l.visible)
        .find_map(|l| Some((l, l.element(id).filter(|e| e.planar().is_some())?)))
}

fn emit_frame_layers(request: &CompileRequest, live: &Replay, out: &mut ScriptWriter) -> usize {
    let mut sequence: Vec<&Layer> = request
        .layers
        .iter()
        .filter(|l| l.visible && l.is_gif_frame)
        .collect();
    if sequence.is_empty() {
        return 0;
    }
    sequence.sort_by_key(|l| l.frame_index.unwrap_or(0));

    let settings = &request.settings;
    let count = sequence.len();
    out.comment(format_args!("Frame Layer Animation: {count} frames"));
    for (index, layer) in sequence.into_iter().enumerate() {
        let elements = layer.filtered_elements();
        out.comment(format_args!(
            "Frame {}/{count} ({} elements)",
            index + 1,
            elements.len()
        ));
        if index > 0 {
            out.delay(settings.frame_layer_delay);
        }
        let lines = LayerLines {
            request,
            layer,
            live,
        };
        let mut run: Vec<DrawItem<'_>> = elements
            .into_iter()
            .filter_map(|el| {
                let local = live.position(&el.id).or_else(|| el.authored_placement())?;
                Some(lines.draw_item(el, local, None))
            })
            .collect();
        lines.flush(&mut run, out);
        if index + 1 < count {
            out.blank();
        }
    }
    if settings.frame_layer_loop {
        out.comment("Loop animation");
        out.delay(settings.frame_layer_loop_delay);
    }
    count
}

fn emit_layer(
    request: &CompileRequest,
    layer: &Layer,
    live: &Replay,
    out: &mut ScriptWriter,
) -> usize {
    let elements = layer.filtered_elements();
    if elements.is_empty() {
        return 0;
    }
    out.comment(&layer.name);

    let modes = &request.modes;
    let plan = arrange(&elements, &request.chain_items, modes, &request.mode_settings);
    if plan.source == OrderSource::Chain && modes.any_animation() {
        out.comment("Chain Mode + Animation: Element order follows chain sequence");
    }

    let frames: Vec<Frame> = Synthesizer::synthesize(&SynthInput {
        layer,
        elements: &plan.order,
        modes,
        settings: &request.mode_settings,
        frames: request.frame_spec(),
        live,
    });
    let animated = modes.any_animation();
    let lines = LayerLines {
        request,
        layer,
        live,
    };

    let mut run: Vec<DrawItem<'_>> = Vec::with_capacity(plan.order.len());
    for frame in &frames {
        // A static layer always opens with its own tick delay.
        if frame.delay > 0 || !animated {
            out.delay(frame.delay);
        }
        for step in &plan.steps {
            match step {
                OrderStep::Draw(i) => {
                    let (Some(&el), Some(fe)) = (plan.order.get(*i), frame.elements.get(*i)) else {
                        continue;
                    };
                    run.push(lines.draw_item(el, fe.placement, fe.color.as_deref()));
                }
                OrderStep::Delay(ticks) => {
                    lines.flush(&mut run, out);
                    out.delay(*ticks);
                }
                OrderStep::Group { number, members } => {
                    lines.flush(&mut run, out);
                    let (kind, plural) = if *members > 1 {
                        ("Group", "s")
                    } else {
                        ("Element", "")
                    };
                    out.comment(format_args!("Chain {kind} {number} ({members} element{plural})"));
                }
            }
        }
        lines.flush(&mut run, out);
    }
    frames.len()
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
