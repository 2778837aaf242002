use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    compile::{compiler::ScriptContext, request::ScriptSettings},
    emit::{
        line::LineSpec,
        script::{RULE, footer_lines},
    },
    foundation::{
        core::Placement,
        error::{AuraError, AuraResult},
    },
    replay::replayer::replay,
    scene::{action::ActionRecord, model::Layer},
};

const BOX_TOP: &str = "# ┌─────────────────────────────────────────────────────────────┐";
const BOX_BOTTOM: &str = "# └─────────────────────────────────────────────────────────────┘";

/// One independent scene of a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Scene layers.
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Skill settings; an empty skill name falls back to `Effect_<n>`.
    #[serde(default)]
    pub settings: ScriptSettings,
    /// Recorded interactions, replayed for final positions and attributes.
    #[serde(default)]
    pub action_records: Vec<ActionRecord>,
    /// Creation timestamp as stored by the editor.
    #[serde(default)]
    pub created_at: String,
}

/// A named collection of sessions exported as one script.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Sessions in export order.
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl Project {
    /// Parse a JSON project.
    pub fn from_json(text: &str) -> AuraResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Render every session of `project` as its own skill.
///
/// Sessions are exported as static snapshots: the action log only contributes final
/// positions and attributes, and no mode or ordering stage runs.
#[tracing::instrument(
    skip(project, ctx),
    fields(project = %project.name, sessions = project.sessions.len())
)]
pub fn compile_project(project: &Project, ctx: &ScriptContext) -> AuraResult<String> {
    let mut out = vec![
        "# AuraFX Multi-Effect Project".to_owned(),
        format!("# Project: {}", project.name),
    ];
    if let Some(desc) = project.description.as_deref().filter(|d| !d.is_empty()) {
        out.push(format!("# Description: {desc}"));
    }
    out.push(format!("# Generated at: {}", ctx.generated_at));
    out.push(format!("# Total Sessions: {}", project.sessions.len()));
    out.push(RULE.to_owned());
    out.push(String::new());

    for (index, session) in project.sessions.iter().enumerate() {
        if !session.settings.y_offset.is_finite() {
            return Err(AuraError::validation(format!(
                "session \"{}\" has a non-finite yOffset",
                session.name
            )));
        }
        session_lines(index, session, &mut out);
    }

    out.extend(footer_lines(&ctx.banner));
    Ok(out.join("\n"))
}

fn session_lines(index: usize, session: &Session, out: &mut Vec<String>) {
    let element_count: usize = session.layers.iter().map(|l| l.elements.len()).sum();
    out.push(BOX_TOP.to_owned());
    out.push(format!("# │ Session {}: {}", index + 1, session.name));
    if let Some(desc) = session.description.as_deref().filter(|d| !d.is_empty()) {
        out.push(format!("# │ Description: {desc}"));
    }
    out.push(format!("# │ Elements: {element_count}"));
    out.push(format!("# │ Created: {}", session.created_at));
    out.push(BOX_BOTTOM.to_owned());
    out.push(String::new());

    let skill = match session.settings.skill_name.trim() {
        "" => format!("Effect_{}", index + 1),
        name => name.to_owned(),
    };
    out.push(format!("{skill}:"));
    out.push("  Skills:".to_owned());

    let live = replay(&session.action_records, &session.layers);
    for (layer_index, layer) in session.layers.iter().enumerate() {
        let elements = layer.filtered_elements();
        if !layer.visible || elements.is_empty() {
            continue;
        }
        out.push(format!("    # Layer {}: {}", layer_index + 1, layer.name));
        for el in elements {
            let Some(local) = live.position(&el.id).or_else(|| el.authored_placement()) else {
                continue;
            };
            let line = LineSpec {
                kind: layer.effect_type,
                particle: layer.particle_of(el),
                color: live.color(&el.id).unwrap_or_else(|| layer.color_of(el)).to_owned(),
                amount: layer.alpha,
                repeat: live
                    .repeat(&el.id)
                    .filter(|r| *r > 0)
                    .unwrap_or_else(|| layer.repeat_of(el)),
                interval: layer.repeat_interval,
                placement: Placement::new(
                    local.x,
                    local.z,
                    local.y_offset + layer.y_offset + session.settings.y_offset,
                ),
                targeter: &layer.targeter,
                params: Cow::Borrowed(&layer.effect_params),
            };
            out.push(line.render());
        }
        out.push(String::new());
    }
    out.push(String::new());
}

#[cfg(test)]
#[path = "../../tests/unit/compile/project.rs"]
mod tests;
