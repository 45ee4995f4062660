//! Icon normalization.
//!
//! One SVG source becomes one flattened path: parse, flatten the element
//! tree, convert primitive shapes, apply transforms, filter, join.

use crate::Diagnostics;
use crate::ast::Element;
use crate::error::IkonError;
use crate::parse::parse_svg;
use crate::shapes::{circle_to_path, polygon_to_path, rect_to_path};
use crate::transform::apply_transform_attr;

/// Element types the pipeline understands. Anything else produces a
/// warning and is filtered out.
const KNOWN_ELEMENTS: [&str; 5] = ["path", "g", "circle", "polygon", "rect"];

/// A normalized icon: every visible shape collapsed into one path string
/// in the source viewBox.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub name: String,
    /// The raw SVG source
    pub content: String,
    pub view_box: String,
    pub path_data: String,
}

impl Icon {
    /// Render the icon back out as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        svg_document(&self.view_box, &self.path_data)
    }
}

/// Format a viewBox and path as a standalone SVG document.
pub fn svg_document(view_box: &str, path_data: &str) -> String {
    format!(
        "<svg\n  xmlns='http://www.w3.org/2000/svg'\n  viewBox='{}'>\n  <path d='{}' />\n</svg>",
        view_box, path_data
    )
}

/// Normalize one SVG source into an [`Icon`].
///
/// Warnings (unsupported elements, unsupported transforms) accumulate in
/// `diag` and never abort the parse; structurally invalid input (missing
/// viewBox, a shape without its required attributes) is an error.
pub fn parse_icon(name: &str, content: &str, diag: &mut Diagnostics) -> Result<Icon, IkonError> {
    let root = parse_svg(content)?;
    let view_box = root
        .get_attr("viewBox")
        .ok_or_else(|| IkonError::MissingAttribute {
            element: root.name.clone(),
            attribute: "viewBox".into(),
        })?
        .to_string();

    let mut flat = Vec::new();
    flatten_into(root.children, &mut flat);

    let mut paths = Vec::new();
    for (index, el) in flat.into_iter().enumerate() {
        if !KNOWN_ELEMENTS.contains(&el.name.as_str()) {
            diag.warn(format!(
                "SVG <{}> element is not currently supported",
                el.name
            ));
        }
        let el = circle_to_path(el, index)?;
        let el = polygon_to_path(el)?;
        let el = rect_to_path(el)?;
        if !el.is("path") {
            continue;
        }
        let d = el.get_attr("d").ok_or_else(|| IkonError::MissingAttribute {
            element: "path".into(),
            attribute: "d".into(),
        })?;
        let d = apply_transform_attr(d, el.get_attr("transform"), diag);
        if el.get_attr("fill") == Some("none") {
            continue;
        }
        paths.push(d);
    }

    Ok(Icon {
        name: name.into(),
        content: content.into(),
        view_box,
        path_data: paths.join(" "),
    })
}

/// Flatten a subtree into a single ordered sequence, depth-first with
/// parents before children. `defs` and `clipPath` subtrees are definitions
/// rather than rendered geometry and are excluded entirely.
fn flatten_into(children: Vec<Element>, out: &mut Vec<Element>) {
    for mut child in children {
        if child.is("defs") || child.is("clipPath") {
            continue;
        }
        let grandchildren = std::mem::take(&mut child.children);
        out.push(child);
        flatten_into(grandchildren, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> (Icon, Diagnostics) {
        let mut diag = Diagnostics::default();
        let icon = parse_icon("Test", content, &mut diag).unwrap();
        (icon, diag)
    }

    #[test]
    fn test_single_path() {
        let (icon, diag) = parse("<svg viewBox='0 0 32 32'><path d='M16,4l14,26H2L16,4z'/></svg>");
        assert_eq!(icon.view_box, "0 0 32 32");
        assert_eq!(icon.path_data, "M16,4l14,26H2L16,4z");
        assert!(diag.is_empty());
    }

    #[test]
    fn test_multiple_paths_joined() {
        let (icon, _) = parse(
            "<svg viewBox='0 0 32 32'>\
             <path d='M0 0 H32 V4 H0z'/>\
             <path d='M0 32 H32 V28 H0z'/>\
             </svg>",
        );
        assert_eq!(icon.path_data, "M0 0 H32 V4 H0z M0 32 H32 V28 H0z");
    }

    #[test]
    fn test_nested_groups_flattened_in_order() {
        let (icon, _) = parse(
            "<svg viewBox='0 0 8 8'>\
             <g><path d='M0 0'/><g><path d='M1 1'/></g></g>\
             <path d='M2 2'/>\
             </svg>",
        );
        assert_eq!(icon.path_data, "M0 0 M1 1 M2 2");
    }

    #[test]
    fn test_defs_excluded() {
        let (icon, _) = parse("<svg viewBox='0 0 32 32'><defs><path d='M 0 0 L 32 32'/></defs></svg>");
        assert_eq!(icon.path_data, "");
    }

    #[test]
    fn test_clip_path_excluded_at_depth() {
        let (icon, _) = parse(
            "<svg viewBox='0 0 32 32'>\
             <g><clipPath><g><path d='M9 9'/></g></clipPath><path d='M1 1'/></g>\
             </svg>",
        );
        assert_eq!(icon.path_data, "M1 1");
    }

    #[test]
    fn test_fill_none_excluded() {
        let (icon, _) = parse("<svg viewBox='0 0 32 32'><path fill='none' d='M0 0 L32 32'/></svg>");
        assert_eq!(icon.path_data, "");
    }

    #[test]
    fn test_converted_circle_loses_fill() {
        // conversion keeps only d and transform, so the fill filter does
        // not see the original fill='none'
        let (icon, _) = parse(
            "<svg viewBox='0 0 32 32'><circle fill='none' cx='16' cy='12' r='4'/></svg>",
        );
        assert_eq!(icon.path_data, "M 16 8 A 4 4 0 0 1 16 16 A 4 4 0 0 1 16 8");
    }

    #[test]
    fn test_rect_with_translate() {
        let (icon, _) = parse(
            "<svg viewBox='0 0 72 48'>\
             <rect transform='translate(40 20)' x='2' y='9' width='28' height='14'/>\
             </svg>",
        );
        assert_eq!(icon.path_data, "M 42 29 H 70 V 43 H 42 z");
    }

    #[test]
    fn test_unsupported_element_warns_and_drops() {
        let (icon, diag) = parse(
            "<svg viewBox='0 0 8 8'><ellipse cx='1' cy='1' rx='2' ry='3'/><path d='M0 0'/></svg>",
        );
        assert_eq!(icon.path_data, "M0 0");
        assert_eq!(
            diag.warnings(),
            ["SVG <ellipse> element is not currently supported"]
        );
    }

    #[test]
    fn test_circle_index_uses_flattened_position() {
        // the circle is the second flattened element (after the g), so its
        // sweep flag is (1 + 1) % 2 = 0
        let (icon, _) = parse(
            "<svg viewBox='0 0 8 8'><g><circle cx='2' cy='2' r='1'/></g></svg>",
        );
        assert_eq!(icon.path_data, "M 2 1 A 1 1 0 0 0 2 3 A 1 1 0 0 0 2 1");
    }

    #[test]
    fn test_missing_view_box_is_error() {
        let mut diag = Diagnostics::default();
        let err = parse_icon("Test", "<svg><path d='M0 0'/></svg>", &mut diag).unwrap_err();
        assert!(matches!(err, IkonError::MissingAttribute { .. }));
    }

    #[test]
    fn test_path_without_d_is_error() {
        let mut diag = Diagnostics::default();
        let err = parse_icon("Test", "<svg viewBox='0 0 8 8'><path/></svg>", &mut diag).unwrap_err();
        assert!(matches!(err, IkonError::MissingAttribute { .. }));
    }

    #[test]
    fn test_to_svg_round_trip() {
        let (icon, _) = parse("<svg viewBox='0 0 32 32'><path d='M16,4l14,26H2L16,4z'/></svg>");
        let svg = icon.to_svg();
        let mut diag = Diagnostics::default();
        let again = parse_icon("Test", &svg, &mut diag).unwrap();
        assert_eq!(again.view_box, icon.view_box);
        assert_eq!(again.path_data, icon.path_data);
    }
}
