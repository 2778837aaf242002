use crate::{
    order::{
        chain::{ChainStep, chain_order},
        proximity::proximity_order,
    },
    scene::{
        model::Element,
        modes::{ChainItem, ModeFlags, ModeSettings},
    },
};

/// Where the draw order of a layer came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderSource {
    /// Authored layer order.
    Layer,
    /// Explicit chain sequence.
    Chain,
    /// Nearest-neighbour tour.
    Proximity,
}

/// One step of a layer walk, repeated for every frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderStep {
    /// Draw the element at this index of [`Arrangement::order`].
    Draw(usize),
    /// Pause for the given ticks.
    Delay(u32),
    /// Chain group banner: group number and member count.
    Group {
        /// 1-based group number.
        number: usize,
        /// Members drawn for the group.
        members: usize,
    },
}

/// Draw order of one layer plus the pauses and banners interleaved with it.
#[derive(Clone, Debug)]
pub struct Arrangement<'a> {
    /// Which ordering produced `order`.
    pub source: OrderSource,
    /// Elements in draw order; every filtered element exactly once.
    pub order: Vec<&'a Element>,
    /// Walk over `order`.
    pub steps: Vec<OrderStep>,
}

/// Order the filtered `elements` of one layer.
///
/// A non-empty chain referencing the layer wins over proximity. Chain pauses and banners
/// are only kept for layers that are not animated. Proximity step pauses are inserted
/// after every `step`-th element (never after the last) while no spatial animation runs.
pub fn arrange<'a>(
    elements: &[&'a Element],
    chain: &[ChainItem],
    modes: &ModeFlags,
    settings: &ModeSettings,
) -> Arrangement<'a> {
    if modes.chain_mode
        && let Some(walk) = chain_order(elements, chain)
    {
        let keep_markers = !modes.any_animation();
        let mut order = Vec::with_capacity(elements.len());
        let mut steps = Vec::with_capacity(walk.len());
        for step in walk {
            match step {
                ChainStep::Element(el) => {
                    steps.push(OrderStep::Draw(order.len()));
                    order.push(el);
                }
                ChainStep::Delay(ticks) if keep_markers => steps.push(OrderStep::Delay(ticks)),
                ChainStep::Group { number, members } if keep_markers => {
                    steps.push(OrderStep::Group { number, members })
                }
                _ => {}
            }
        }
        return Arrangement {
            source: OrderSource::Chain,
            order,
            steps,
        };
    }

    if modes.proximity_mode {
        let order = proximity_order(elements);
        let mut steps = Vec::with_capacity(order.len());
        let step = settings.proximity_mode.step.max(1) as usize;
        let pauses = !modes.any_spatial();
        for i in 0..order.len() {
            steps.push(OrderStep::Draw(i));
            if pauses && (i + 1) % step == 0 && i + 1 < order.len() {
                steps.push(OrderStep::Delay(settings.proximity_mode.delay));
            }
        }
        return Arrangement {
            source: OrderSource::Proximity,
            order,
            steps,
        };
    }

    Arrangement {
        source: OrderSource::Layer,
        order: elements.to_vec(),
        steps: (0..elements.len()).map(OrderStep::Draw).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/order/plan.rs"]
mod tests;
