//! Typed property values shared by the style records.

use serde::{Serialize, Serializer};
use std::fmt;

/// A resolved width-typed measurement (widths, paddings, spacing, indent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Width {
    /// Explicit zero (`w:type="nil"`)
    Zero,
    /// Automatic sizing
    Auto,
    /// Points (converted from twentieths of a point)
    Points(f64),
    /// Percentage (converted from fiftieths of a percent)
    Percent(f64),
}

impl Width {
    /// Build a width from a raw magnitude and OOXML unit type.
    ///
    /// Returns `None` for unit types that carry no usable value.
    pub fn from_units(magnitude: i64, unit: &str) -> Option<Self> {
        match unit {
            "nil" => Some(Width::Zero),
            "auto" => Some(Width::Auto),
            "dxa" => Some(Width::Points(magnitude as f64 / 20.0)),
            "pct" => Some(Width::Percent(magnitude as f64 / 50.0)),
            _ => None,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Zero => f.write_str("0"),
            Width::Auto => f.write_str("auto"),
            Width::Points(v) => write!(f, "{}pt", format_significant(*v, 3)),
            Width::Percent(v) => write!(f, "{}%", format_significant(*v, 3)),
        }
    }
}

impl Serialize for Width {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A table margin produced by justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Margin {
    /// Automatic margin (pushes the table away from that side)
    Auto,
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("auto")
    }
}

/// Format `value` like C's `%.<precision>g`.
///
/// Trailing zeros are dropped, and exponent notation is used when the
/// decimal exponent is below -4 or at least `precision`.
pub fn format_significant(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return if value.is_finite() {
            "0".to_string()
        } else {
            value.to_string()
        };
    }
    let precision = precision.max(1);

    // Rounding to the requested digits first gives the exponent %g decides on.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
