use std::{borrow::Cow, fmt};

/// Long parameter names and the short keys the script engine expects.
const ALIASES: &[(&str, &str)] = &[
    ("particle", "p"),
    ("mob", "m"),
    ("amount", "a"),
    ("count", "a"),
    ("spread", "offset"),
    ("hSpread", "hs"),
    ("vSpread", "vs"),
    ("xSpread", "xs"),
    ("zSpread", "zs"),
    ("speed", "s"),
    ("yOffset", "y"),
    ("viewDistance", "vd"),
    ("fromorigin", "fo"),
    ("directional", "d"),
    ("directionReversed", "dr"),
    ("direction", "dir"),
    ("fixedyaw", "yaw"),
    ("fixedpitch", "pitch"),
    ("color", "c"),
    ("exactoffsets", "eo"),
    ("useEyeLocation", "uel"),
    ("forwardOffset", "sfo"),
    ("sideOffset", "sso"),
    ("repeatInterval", "repeatI"),
    ("targetInterval", "targetI"),
];

/// Short key for `key`; keys without an alias are written as-is.
pub fn alias(key: &str) -> &str {
    ALIASES
        .iter()
        .find(|(long, _)| *long == key)
        .map_or(key, |(_, short)| *short)
}

/// A single parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue<'a> {
    /// Free text (particle names, colors).
    Text(Cow<'a, str>),
    /// Numeric value.
    Number(f64),
    /// Boolean switch.
    Flag(bool),
}

impl ParamValue<'_> {
    /// Blank values are never written: zero, `false`, empty text and non-finite numbers.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => *n == 0.0 || !n.is_finite(),
            Self::Flag(b) => !b,
        }
    }
}

impl fmt::Display for ParamValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl<'a> From<&'a str> for ParamValue<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl From<String> for ParamValue<'_> {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

impl From<f64> for ParamValue<'_> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for ParamValue<'_> {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for ParamValue<'_> {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// Ordered parameter list under construction.
#[derive(Clone, Debug, Default)]
pub struct ParamList<'a> {
    entries: Vec<(&'static str, Option<ParamValue<'a>>)>,
}

impl<'a> ParamList<'a> {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key`, unset when `value` is `None`.
    pub fn push<V: Into<ParamValue<'a>>>(mut self, key: &'static str, value: Option<V>) -> Self {
        self.entries.push((key, value.map(Into::into)));
        self
    }

    /// Append a value that is always present (it can still be blank).
    pub fn set<V: Into<ParamValue<'a>>>(self, key: &'static str, value: V) -> Self {
        self.push(key, Some(value))
    }

    /// `k=v;k=v` body: blank and unset values are dropped, keys are shortened, and a key
    /// whose short form was already written is skipped.
    pub fn build(&self) -> String {
        let mut used: Vec<&str> = Vec::with_capacity(self.entries.len());
        let mut out = String::new();
        for (key, value) in &self.entries {
            let Some(value) = value.as_ref().filter(|v| !v.is_blank()) else {
                continue;
            };
            let short = alias(key);
            if used.contains(&short) {
                continue;
            }
            used.push(short);
            if !out.is_empty() {
                out.push(';');
            }
            out.push_str(short);
            out.push('=');
            out.push_str(&value.to_string());
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/params.rs"]
mod tests;
