use std::collections::HashMap;

use crate::{
    foundation::{
        color::same_color,
        core::{Placement, Point, centroid},
    },
    scene::model::{Element, ElementShape, GroupOrigin},
};

/// One element resolved for drawing in a specific frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem<'a> {
    /// Source element (shape tag and group membership).
    pub element: &'a Element,
    /// Final offsets, vertical offset already including layer and skill offsets.
    pub placement: Placement,
    /// Resolved color.
    pub color: String,
    /// Resolved repeat count.
    pub repeat: u32,
}

/// A shape group collapsed into a single ring primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct RingGroup {
    /// Shared group id.
    pub group_id: String,
    /// How the group was formed.
    pub origin: GroupOrigin,
    /// Mean member position.
    pub center: Point,
    /// Mean member distance to `center`.
    pub radius: f64,
    /// Mean member vertical offset.
    pub y_offset: f64,
    /// Shared member color.
    pub color: String,
    /// Number of members.
    pub members: usize,
}

impl RingGroup {
    /// Ring center and height as a placement.
    pub fn placement(&self) -> Placement {
        Placement::new(self.center.x, self.center.y, self.y_offset)
    }
}

/// Output of the ring pass.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawn<'i, 'a> {
    /// Draw this item on its own.
    Single(&'i DrawItem<'a>),
    /// Draw one ring for a whole group.
    Ring(RingGroup),
}

/// Collapse qualifying shape groups into rings.
///
/// Items are grouped by `groupId` (ungrouped items stand alone), groups in order of first
/// appearance. A group becomes one ring when every member is a circle member, it has more
/// than two members and all colors match. Other groups keep one entry per member.
pub fn collapse_rings<'i, 'a>(items: &'i [DrawItem<'a>]) -> Vec<Drawn<'i, 'a>> {
    let mut groups: Vec<Vec<&'i DrawItem<'a>>> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for item in items {
        match item.element.group_id.as_deref() {
            Some(gid) => match slots.get(gid) {
                Some(&slot) => groups[slot].push(item),
                None => {
                    slots.insert(gid, groups.len());
                    groups.push(vec![item]);
                }
            },
            None => groups.push(vec![item]),
        }
    }

    let mut out = Vec::with_capacity(items.len());
    for group in groups {
        match ring_of(&group) {
            Some(ring) => {
                tracing::debug!(
                    group = %ring.group_id,
                    members = ring.members,
                    "group collapsed into ring"
                );
                out.push(Drawn::Ring(ring));
            }
            None => out.extend(group.into_iter().map(Drawn::Single)),
        }
    }
    out
}

fn ring_of(group: &[&DrawItem<'_>]) -> Option<RingGroup> {
    let first = group.first()?;
    let group_id = first.element.group_id.clone()?;
    if group.len() <= 2
        || !group.iter().all(|m| m.element.shape == ElementShape::Circle)
        || !group.iter().all(|m| same_color(&m.color, &first.color))
    {
        return None;
    }

    let n = group.len() as f64;
    let center = centroid(group.iter().map(|m| m.placement.planar()))?;
    let radius = group
        .iter()
        .map(|m| (m.placement.planar() - center).hypot())
        .sum::<f64>()
        / n;
    let y_offset = group.iter().map(|m| m.placement.y_offset).sum::<f64>() / n;

    Some(RingGroup {
        group_id,
        origin: first.element.group_origin.unwrap_or_default(),
        center,
        radius,
        y_offset,
        color: first.color.clone(),
        members: group.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/ring.rs"]
mod tests;
