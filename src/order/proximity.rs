use crate::scene::model::Element;

/// Greedy nearest-neighbour tour over `elements`, starting at the first one.
///
/// Distance is squared planar distance; ties go to the earliest remaining element. The
/// result is a permutation of the input.
pub fn proximity_order<'a>(elements: &[&'a Element]) -> Vec<&'a Element> {
    let mut remaining: Vec<&'a Element> = elements.to_vec();
    let mut ordered = Vec::with_capacity(remaining.len());
    if remaining.is_empty() {
        return ordered;
    }

    let mut current = remaining.remove(0);
    ordered.push(current);
    while !remaining.is_empty() {
        let from = current.planar().unwrap_or_default();
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, candidate) in remaining.iter().enumerate() {
            let d = (candidate.planar().unwrap_or_default() - from).hypot2();
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }
        current = remaining.remove(best);
        ordered.push(current);
    }
    ordered
}

#[cfg(test)]
#[path = "../../tests/unit/order/proximity.rs"]
mod tests;
