//! Value types shared by the accumulator and the cursor: bounding boxes,
//! number formatting and style attributes.

use std::collections::BTreeMap;
use std::fmt;

use glam::DVec2;

/// Axis-aligned bounding box.
///
/// Unlike an "empty until expanded" box, this one always contains at least one
/// point: a cursor starts with `min == max == origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// A degenerate box containing only `point`.
    pub fn at(point: DVec2) -> Self {
        Bounds {
            min: point,
            max: point,
        }
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// `viewBox` attribute value: `"min.x min.y width height"`.
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            fmt_num(self.min.x),
            fmt_num(self.min.y),
            fmt_num(self.width()),
            fmt_num(self.height())
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::at(DVec2::ZERO)
    }
}

/// Separator placed between serialized commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Space,
    Newline,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Space => " ",
            Delimiter::Newline => "\n",
        }
    }
}

/// How commands are turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FormatOptions {
    pub delimiter: Delimiter,
    /// Significant figures. `None` writes the shortest round-trip form.
    pub precision: Option<u8>,
}

impl FormatOptions {
    pub fn format(&self, value: f64) -> String {
        match self.precision {
            Some(sig_figs) => fmt_num_precision(value, i32::from(sig_figs.max(1))),
            None => fmt_num(value),
        }
    }
}

/// Shortest round-trip decimal form; negative zero is written `0`.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Format with the given number of significant figures, trailing zeros
/// trimmed (C's `%g` without the exponent form).
pub fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return fmt_num(value);
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Style keys a renderer reads when materializing a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    Stroke,
    Fill,
    StrokeWidth,
}

impl StyleKey {
    /// Attribute name as written on an SVG element.
    pub fn attribute_name(self) -> &'static str {
        match self {
            StyleKey::Stroke => "stroke",
            StyleKey::Fill => "fill",
            StyleKey::StrokeWidth => "stroke-width",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute_name())
    }
}

/// Opaque style values keyed by [`StyleKey`]. Values are never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleAttributes {
    entries: BTreeMap<StyleKey, String>,
}

impl StyleAttributes {
    pub fn get(&self, key: StyleKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub(crate) fn set(&mut self, key: StyleKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    pub fn stroke(&self) -> Option<&str> {
        self.get(StyleKey::Stroke)
    }

    pub fn fill(&self) -> Option<&str> {
        self.get(StyleKey::Fill)
    }

    /// Entries in key order (stroke, fill, stroke-width).
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
