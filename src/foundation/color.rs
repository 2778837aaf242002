use serde::{Deserialize, Serialize};

/// Straight 8-bit RGB color as written into scripts (`#rrggbb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (alpha dropped), case-insensitive.
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(format!("invalid hex color \"{s}\""));
        }

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        match s.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in s.chars().enumerate() {
                    let nib = c
                        .to_digit(16)
                        .ok_or_else(|| format!("invalid hex digit '{c}'"))?
                        as u8;
                    out[i] = nib * 17;
                }
                Ok(Self::new(out[0], out[1], out[2]))
            }
            6 | 8 => Ok(Self::new(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            _ => Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA".to_owned()),
        }
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// HSV to RGB conversion with `h`, `s`, `v` in `[0, 1]`; `h` wraps.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb8 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    fn to_u8(x: f64) -> u8 {
        (x * 255.0).round().clamp(0.0, 255.0) as u8
    }
    Rgb8::new(to_u8(r), to_u8(g), to_u8(b))
}

/// Fully saturated, full value color for a hue in `[0, 1]`, as `#rrggbb`.
pub fn hue_hex(h: f64) -> String {
    hsv_to_rgb(h, 1.0, 1.0).to_hex()
}

/// Compare two script color strings.
///
/// Hex colors compare by value (`#FF0000 == #ff0000`); anything else compares textually.
pub fn same_color(a: &str, b: &str) -> bool {
    match (Rgb8::parse_hex(a), Rgb8::parse_hex(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => a == b,
    }
}
