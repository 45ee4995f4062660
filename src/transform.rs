//! `transform` attribute parsing and application.
//!
//! All six standard SVG transform functions are recognized; translate and
//! scale are applied to path data, the rest are reported and skipped.

use crate::Diagnostics;
use crate::path::{coerce_number, map_coordinates};

/// A single function from a `transform` attribute, in textual order.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    Translate { tx: f64, ty: f64 },
    Scale { sx: f64, sy: f64 },
    Rotate(Vec<f64>),
    SkewX(Vec<f64>),
    SkewY(Vec<f64>),
    Matrix(Vec<f64>),
}

impl Transform {
    fn from_name(name: &str, args: Vec<f64>) -> Option<Self> {
        match name {
            "translate" => {
                let tx = args.first().copied().unwrap_or(0.0);
                let ty = args.get(1).copied().unwrap_or(0.0);
                Some(Transform::Translate { tx, ty })
            }
            "scale" => {
                let sx = args.first().copied().unwrap_or(0.0);
                let sy = args.get(1).copied().unwrap_or(sx);
                Some(Transform::Scale { sx, sy })
            }
            "rotate" => Some(Transform::Rotate(args)),
            "skewX" => Some(Transform::SkewX(args)),
            "skewY" => Some(Transform::SkewY(args)),
            "matrix" => Some(Transform::Matrix(args)),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transform::Translate { .. } => "translate",
            Transform::Scale { .. } => "scale",
            Transform::Rotate(_) => "rotate",
            Transform::SkewX(_) => "skewX",
            Transform::SkewY(_) => "skewY",
            Transform::Matrix(_) => "matrix",
        }
    }
}

/// Parse a `transform` attribute into its function list.
///
/// Arguments are split on whitespace and commas; malformed numbers coerce
/// to 0. Function names outside the six standard ones never match and are
/// ignored.
pub fn parse_transform_list(attr: &str) -> Vec<Transform> {
    let mut transforms = Vec::new();
    let mut rest = attr;

    while let Some(open) = rest.find('(') {
        let name = rest[..open].trim().trim_start_matches(',').trim();
        let close = match rest[open + 1..].find(')') {
            Some(i) => open + 1 + i,
            None => break,
        };
        let args = rest[open + 1..close]
            .split(|c: char| c.is_ascii_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(coerce_number)
            .collect();
        if let Some(transform) = Transform::from_name(name, args) {
            transforms.push(transform);
        }
        rest = &rest[close + 1..];
    }

    transforms
}

/// Apply every supported transform in `attr` to the path data, left to
/// right, each consuming the previous result (SVG composition order).
///
/// An absent attribute returns the input unchanged. Unsupported transform
/// functions are reported and skipped; the rest of the list still applies.
pub fn apply_transform_attr(d: &str, attr: Option<&str>, diag: &mut Diagnostics) -> String {
    let Some(attr) = attr else {
        return d.to_string();
    };

    let mut path = d.to_string();
    for transform in parse_transform_list(attr) {
        match transform {
            Transform::Translate { tx, ty } => {
                path = map_coordinates(&path, |x, _| x + tx, |y, _| y + ty);
            }
            Transform::Scale { sx, sy } => {
                path = map_coordinates(&path, |x, _| x * sx, |y, _| y * sy);
            }
            other => {
                diag.warn(format!(
                    "SVG transform '{}' is not currently supported",
                    other.name()
                ));
            }
        }
    }
    path
}
