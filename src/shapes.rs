//! Conversion of primitive shapes into path elements.
//!
//! Each converter is the identity for elements of any other type. A
//! converted element carries only `d` and the original `transform`; other
//! source attributes do not survive conversion.

use crate::ast::Element;
use crate::error::IkonError;
use crate::path::format_number;

/// Convert a `circle` into a full circle drawn as two semicircular arcs.
///
/// `index` is the element's position in the flattened document; the sweep
/// flag alternates with its parity as `(index + 1) % 2`.
pub fn circle_to_path(el: Element, index: usize) -> Result<Element, IkonError> {
    if !el.is("circle") {
        return Ok(el);
    }

    let cx = require_number(&el, "cx")?;
    let cy = require_number(&el, "cy")?;
    let r = require_number(&el, "r")?;
    let sweep = (index + 1) % 2;

    let x = format_number(cx);
    let y1 = format_number(cy - r);
    let y2 = format_number(cy + r);
    let r = format_number(r);
    let d = format!("M {x} {y1} A {r} {r} 0 0 {sweep} {x} {y2} A {r} {r} 0 0 {sweep} {x} {y1}");

    Ok(into_path(el, d))
}

/// Convert a `polygon` into a closed sequence of line segments.
///
/// The coordinate tokens of `points` are reused verbatim.
pub fn polygon_to_path(el: Element) -> Result<Element, IkonError> {
    if !el.is("polygon") {
        return Ok(el);
    }

    let points = el
        .get_attr("points")
        .ok_or_else(|| missing(&el, "points"))?;
    let tokens: Vec<&str> = points
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.len() < 4 || tokens.len() % 2 != 0 {
        return Err(IkonError::InvalidSvg(format!(
            "<polygon> has malformed points: '{}'",
            points
        )));
    }

    let mut d = String::from("M");
    for (i, pair) in tokens.chunks(2).enumerate() {
        if i > 0 {
            d.push_str(" L");
        }
        d.push(' ');
        d.push_str(pair[0]);
        d.push(' ');
        d.push_str(pair[1]);
    }
    d.push_str(" z");

    Ok(into_path(el, d))
}

/// Convert a `rect` into a closed rectangle path.
pub fn rect_to_path(el: Element) -> Result<Element, IkonError> {
    if !el.is("rect") {
        return Ok(el);
    }

    let x = optional_number(&el, "x")?;
    let y = optional_number(&el, "y")?;
    let width = require_number(&el, "width")?;
    let height = require_number(&el, "height")?;

    let d = format!(
        "M {} {} H {} V {} H {} z",
        format_number(x),
        format_number(y),
        format_number(x + width),
        format_number(y + height),
        format_number(x)
    );

    Ok(into_path(el, d))
}

fn into_path(el: Element, d: String) -> Element {
    let mut path = Element::new("path");
    path.set_attr("d", d);
    if let Some(transform) = el.get_attr("transform") {
        path.set_attr("transform", transform);
    }
    path
}

fn missing(el: &Element, attribute: &str) -> IkonError {
    IkonError::MissingAttribute {
        element: el.name.clone(),
        attribute: attribute.into(),
    }
}

fn require_number(el: &Element, name: &str) -> Result<f64, IkonError> {
    let value = el.get_attr(name).ok_or_else(|| missing(el, name))?;
    parse_finite(el, name, value)
}

fn optional_number(el: &Element, name: &str) -> Result<f64, IkonError> {
    match el.get_attr(name) {
        Some(value) => parse_finite(el, name, value),
        None => Ok(0.0),
    }
}

fn parse_finite(el: &Element, name: &str, value: &str) -> Result<f64, IkonError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| {
            IkonError::InvalidSvg(format!(
                "<{}> attribute '{}' is not a number: '{}'",
                el.name, name, value
            ))
        })
}
