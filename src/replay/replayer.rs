use std::collections::HashMap;

use crate::{
    foundation::core::{Frame, FrameElement, Placement},
    scene::{
        action::{ActionKind, ActionRecord},
        model::Layer,
    },
};

/// Attribute overrides established by the log on top of the authored element values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveAttributes {
    /// Live color, if any was authored or recorded.
    pub color: Option<String>,
    /// Live repeat count, if any was authored or recorded.
    pub repeat: Option<u32>,
}

/// Result of replaying an action log over a scene.
#[derive(Clone, Debug, Default)]
pub struct Replay {
    /// Live placement per element id.
    pub positions: HashMap<String, Placement>,
    /// Live attributes per element id.
    pub attributes: HashMap<String, LiveAttributes>,
    /// Recorded keyframes, in log order. Empty when the log moved nothing.
    pub frames: Vec<Frame>,
}

impl Replay {
    /// Live placement of `id`.
    pub fn position(&self, id: &str) -> Option<Placement> {
        self.positions.get(id).copied()
    }

    /// Live color of `id`.
    pub fn color(&self, id: &str) -> Option<&str> {
        self.attributes.get(id)?.color.as_deref()
    }

    /// Live repeat count of `id`.
    pub fn repeat(&self, id: &str) -> Option<u32> {
        self.attributes.get(id)?.repeat
    }

    /// Whether recorded playback replaces static/procedural generation.
    pub fn has_frames(&self) -> bool {
        !self.frames.is_empty()
    }
}

/// Replay `log` in order over the elements of `layers`.
///
/// Positions and attributes start from the authored values of every element with a usable
/// position (the first occurrence wins when ids repeat across layers). Absolute snapshots
/// overwrite, `move` deltas accumulate, and ids that were never authored are ignored.
#[tracing::instrument(skip(log, layers), fields(records = log.len(), layers = layers.len()))]
pub fn replay(log: &[ActionRecord], layers: &[Layer]) -> Replay {
    let mut out = Replay::default();
    let mut authored: HashMap<&str, Placement> = HashMap::new();

    for layer in layers {
        for el in layer.filtered_elements() {
            let Some(placement) = el.authored_placement() else {
                continue;
            };
            if authored.contains_key(el.id.as_str()) {
                continue;
            }
            authored.insert(el.id.as_str(), placement);
            out.positions.insert(el.id.clone(), placement);
            out.attributes.insert(
                el.id.clone(),
                LiveAttributes {
                    color: el.color.clone().filter(|c| !c.is_empty()),
                    repeat: el.repeat.filter(|r| *r > 0),
                },
            );
        }
    }

    for record in log {
        if let Some(frame) = replay_positions(record, &authored, &mut out.positions) {
            out.frames.push(frame);
        }
    }
    for record in log {
        replay_attributes(record, &mut out.attributes);
    }

    tracing::debug!(frames = out.frames.len(), "action log replayed");
    out
}

fn replay_positions(
    record: &ActionRecord,
    authored: &HashMap<&str, Placement>,
    live: &mut HashMap<String, Placement>,
) -> Option<Frame> {
    let elements: Vec<FrameElement> = match record.kind {
        kind if kind.is_absolute() => record
            .data
            .absolute_positions()
            .iter()
            .filter_map(|sample| {
                let slot = live.get_mut(&sample.id)?;
                *slot = sample.placement();
                Some(FrameElement::new(sample.id.clone(), *slot))
            })
            .collect(),
        ActionKind::Move => {
            let (dx, dz, dy) = record.data.delta();
            if dx == 0.0 && dz == 0.0 && dy == 0.0 {
                return None;
            }
            record
                .element_ids
                .iter()
                .filter_map(|id| {
                    let slot = live.get_mut(id)?;
                    *slot = Placement::new(slot.x + dx, slot.z + dz, slot.y_offset + dy);
                    Some(FrameElement::new(id.clone(), *slot))
                })
                .collect()
        }
        ActionKind::Idle => {
            // Idle holds a pose for exactly its own delay.
            let elements: Vec<FrameElement> = match record.data.last_positions.as_deref() {
                Some(held) => held
                    .iter()
                    .map(|s| FrameElement::new(s.id.clone(), s.placement()))
                    .collect(),
                None => record
                    .element_ids
                    .iter()
                    .filter_map(|id| {
                        let placement = *authored.get(id.as_str())?;
                        Some(FrameElement::new(id.clone(), placement))
                    })
                    .collect(),
            };
            if elements.is_empty() {
                return None;
            }
            return Some(Frame {
                delay: record.delay_ticks,
                elements,
            });
        }
        _ => return None,
    };

    if elements.is_empty() {
        return None;
    }
    Some(Frame {
        delay: record.delay_ticks.max(1),
        elements,
    })
}

fn replay_attributes(record: &ActionRecord, attributes: &mut HashMap<String, LiveAttributes>) {
    match record.kind {
        ActionKind::Color => {
            let Some(color) = record.data.color.as_deref().filter(|c| !c.is_empty()) else {
                return;
            };
            for id in &record.element_ids {
                if let Some(attr) = attributes.get_mut(id) {
                    attr.color = Some(color.to_owned());
                }
            }
        }
        ActionKind::ParticleCount => {
            let Some(count) = record.data.particle_count else {
                return;
            };
            for id in &record.element_ids {
                if let Some(attr) = attributes.get_mut(id) {
                    attr.repeat = Some(count);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/replay/replayer.rs"]
mod tests;
