use crate::{emit::line::LineSpec, scene::model::PrimitiveKind};

/// Merge runs of identical point-particle lines into one line with a multiplied repeat.
pub fn compact(lines: Vec<LineSpec<'_>>) -> Vec<LineSpec<'_>> {
    let mut runs: Vec<(LineSpec<'_>, u32)> = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some((last, run)) = runs.last_mut()
            && is_point(line.kind)
            && *last == line
        {
            *run += 1;
            continue;
        }
        runs.push((line, 1));
    }
    runs.into_iter()
        .map(|(mut line, run)| {
            line.repeat = line.repeat.saturating_mul(run);
            line
        })
        .collect()
}

fn is_point(kind: PrimitiveKind) -> bool {
    matches!(kind, PrimitiveKind::Particles | PrimitiveKind::Unsupported)
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/compact.rs"]
mod tests;
