use std::fmt::Display;

/// Horizontal rule framing header and footer blocks.
pub const RULE: &str = "# ═══════════════════════════════════════════════════════════════";

/// Project home page echoed in generated scripts.
pub const SITE_URL: &str = "https://aurafx.online";

/// Facts summarized at the top of a script.
#[derive(Clone, Debug, Default)]
pub struct ScriptHeader<'a> {
    /// RFC 3339 generation timestamp.
    pub generated_at: &'a str,
    /// Community link text.
    pub banner: &'a str,
    /// Elements across all layers, before filtering.
    pub element_count: usize,
    /// Display names of the active modes.
    pub active_modes: Vec<&'static str>,
    /// Length of the action log.
    pub recorded_actions: usize,
    /// Element items of the chain, when chain mode is on and the chain is not empty.
    pub chain_groups: Option<usize>,
}

/// Line-oriented builder for one skill body.
#[derive(Clone, Debug)]
pub struct ScriptWriter {
    lines: Vec<String>,
    instructions: usize,
}

impl ScriptWriter {
    /// Start the skill `skill_name`.
    pub fn new(skill_name: &str) -> Self {
        Self {
            lines: vec![format!("{skill_name}:"), "  Skills:".to_owned()],
            instructions: 0,
        }
    }

    /// Indented comment inside the skill.
    pub fn comment(&mut self, text: impl Display) {
        self.lines.push(format!("  # {text}"));
    }

    /// `delay <ticks>` directive.
    pub fn delay(&mut self, ticks: u32) {
        self.lines.push(format!("  - delay {ticks}"));
        self.instructions += 1;
    }

    /// Already rendered primitive line.
    pub fn primitive(&mut self, line: String) {
        self.lines.push(line);
        self.instructions += 1;
    }

    /// Empty separator line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Delay and primitive lines written so far.
    pub fn instruction_count(&self) -> usize {
        self.instructions
    }

    /// Frame the body with header and footer and join into the final text.
    pub fn finish(self, header: &ScriptHeader<'_>) -> String {
        let mut out = header_lines(header, self.instructions);
        out.extend(self.lines);
        out.extend(footer_lines(header.banner));
        out.join("\n")
    }
}

fn header_lines(h: &ScriptHeader<'_>, instructions: usize) -> Vec<String> {
    let mut out = vec![
        RULE.to_owned(),
        "# 🎆 CREATED WITH AURAFX.ONLINE - FREE PARTICLE EFFECT GENERATOR".to_owned(),
        format!("# ⚡ Create your own effects: {SITE_URL}"),
        format!("# 💬 Join our Discord: {}", h.banner),
        "# 🚀 No registration required - 100% Free!".to_owned(),
        RULE.to_owned(),
        format!("# Generated: {}", h.generated_at),
        format!("# Elements: {}", h.element_count),
        format!("# Total Lines: {instructions}"),
    ];
    if !h.active_modes.is_empty() {
        out.push(format!("# Active Modes: {}", h.active_modes.join(", ")));
    }
    if h.recorded_actions > 0 {
        out.push(format!(
            "# Action Recording: {} recorded actions",
            h.recorded_actions
        ));
    }
    if let Some(groups) = h.chain_groups {
        out.push(format!("# Chain Mode: {groups} groups"));
    }
    out
}

/// Closing block shared by every script kind.
pub fn footer_lines(banner: &str) -> Vec<String> {
    vec![
        RULE.to_owned(),
        "# 🎉 Effect complete! Share your creation with friends!".to_owned(),
        format!("# 🔗 Create more effects: {SITE_URL}"),
        format!("# ⭐ Join our community: {banner}"),
        RULE.to_owned(),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/emit/script.rs"]
mod tests;
