use std::collections::HashSet;

use crate::scene::{model::Element, modes::ChainItem};

/// One entry of a chain walk over a layer.
#[derive(Clone, Debug, PartialEq)]
pub enum ChainStep<'a> {
    /// Start of an authored group: 1-based group number and members present in the layer.
    Group {
        /// Group number among all element items of the chain.
        number: usize,
        /// Members drawn for this group.
        members: usize,
    },
    /// Draw one element.
    Element(&'a Element),
    /// Explicit pause.
    Delay(u32),
}

/// Walk `items` over the filtered `elements` of one layer.
///
/// Group members are drawn in authored order, at most once each, and only when they belong
/// to `elements`. Elements the chain never references follow in layer order. Returns
/// `None` when no element of the layer is referenced, so the caller can keep layer order.
pub fn chain_order<'a>(
    elements: &[&'a Element],
    items: &[ChainItem],
) -> Option<Vec<ChainStep<'a>>> {
    let referenced: HashSet<&str> = items
        .iter()
        .flat_map(|item| match item {
            ChainItem::Element { element_ids } => element_ids.as_slice(),
            ChainItem::Delay { .. } => &[],
        })
        .map(String::as_str)
        .collect();
    if !elements.iter().any(|e| referenced.contains(e.id.as_str())) {
        return None;
    }

    let mut placed: HashSet<&str> = HashSet::new();
    let mut steps = Vec::new();
    let mut number = 0;
    for item in items {
        match item {
            ChainItem::Delay { delay } => steps.push(ChainStep::Delay(*delay)),
            ChainItem::Element { element_ids } => {
                number += 1;
                let members: Vec<&'a Element> = element_ids
                    .iter()
                    .filter_map(|id| elements.iter().copied().find(|e| &e.id == id))
                    .filter(|e| placed.insert(e.id.as_str()))
                    .collect();
                if members.is_empty() {
                    continue;
                }
                steps.push(ChainStep::Group {
                    number,
                    members: members.len(),
                });
                steps.extend(members.into_iter().map(ChainStep::Element));
            }
        }
    }

    steps.extend(
        elements
            .iter()
            .copied()
            .filter(|e| !placed.contains(e.id.as_str()))
            .map(ChainStep::Element),
    );
    Some(steps)
}

#[cfg(test)]
#[path = "../../tests/unit/order/chain.rs"]
mod tests;
