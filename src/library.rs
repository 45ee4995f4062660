//! Persisted icon library.
//!
//! A library is a JSON file of normalized icons. Adding an icon runs the
//! full normalization pipeline, so the stored records carry only the
//! viewBox and flattened path data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Diagnostics;
use crate::error::IkonError;
use crate::icon::{parse_icon, svg_document};

/// Default library file name.
pub const LIBRARY_FILE: &str = "ikon.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    pub version: String,
    pub icons: Vec<LibraryIcon>,
}

/// One stored icon. Serialized field names mirror the JSON file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryIcon {
    pub name: String,
    #[serde(rename = "viewBox")]
    pub view_box: String,
    #[serde(rename = "pathData")]
    pub path_data: String,
}

impl LibraryIcon {
    /// Render the stored icon back to a standalone SVG.
    pub fn to_svg(&self) -> String {
        svg_document(&self.view_box, &self.path_data)
    }
}

impl Default for Library {
    fn default() -> Self {
        Self {
            name: "icons".into(),
            version: "1.0.0".into(),
            icons: Vec::new(),
        }
    }
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self, IkonError> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), IkonError> {
        Ok(fs::write(path, serde_json::to_string_pretty(self)?)?)
    }

    pub fn get_icon(&self, name: &str) -> Option<&LibraryIcon> {
        self.icons.iter().find(|icon| icon.name == name)
    }

    /// Normalize and add one icon. Returns false when the name is already
    /// taken; the existing icon wins.
    pub fn add(&mut self, name: &str, svg: &str, diag: &mut Diagnostics) -> Result<bool, IkonError> {
        if self.get_icon(name).is_some() {
            return Ok(false);
        }
        let icon = parse_icon(name, svg, diag)?;
        self.icons.push(LibraryIcon {
            name: icon.name,
            view_box: icon.view_box,
            path_data: icon.path_data,
        });
        Ok(true)
    }

    /// Remove an icon by name. Returns false when no such icon exists.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.icons.len();
        self.icons.retain(|icon| icon.name != name);
        self.icons.len() != before
    }

    /// Add several icons; duplicates are skipped. Returns how many were
    /// actually added.
    pub fn import<'a>(
        &mut self,
        icons: impl IntoIterator<Item = (&'a str, &'a str)>,
        diag: &mut Diagnostics,
    ) -> Result<usize, IkonError> {
        let mut added = 0;
        for (name, svg) in icons {
            if self.add(name, svg, diag)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Render one stored icon as SVG.
    pub fn export(&self, name: &str) -> Option<String> {
        self.get_icon(name).map(LibraryIcon::to_svg)
    }

    /// Render every stored icon as SVG, in insertion order.
    pub fn export_all(&self) -> Vec<(String, String)> {
        self.icons
            .iter()
            .map(|icon| (icon.name.clone(), icon.to_svg()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "<svg viewBox='0 0 32 32'><path d='M16,4l14,26H2L16,4z'/></svg>";
    const BARS: &str = "<svg viewBox='0 0 32 32'>\
                        <path d='M0 0 H32 V4 H0z'/>\
                        <path d='M0 32 H32 V28 H0z'/>\
                        </svg>";

    #[test]
    fn test_add_normalizes() {
        let mut lib = Library::default();
        let mut diag = Diagnostics::default();
        assert!(lib.add("basic", BASIC, &mut diag).unwrap());
        assert_eq!(lib.icons.len(), 1);
        assert_eq!(lib.icons[0].view_box, "0 0 32 32");
        assert_eq!(lib.icons[0].path_data, "M16,4l14,26H2L16,4z");
    }

    #[test]
    fn test_add_skips_duplicates() {
        let mut lib = Library::default();
        let mut diag = Diagnostics::default();
        assert!(lib.add("basic", BASIC, &mut diag).unwrap());
        assert!(!lib.add("basic", BARS, &mut diag).unwrap());
        assert_eq!(lib.icons.len(), 1);
        assert_eq!(lib.icons[0].path_data, "M16,4l14,26H2L16,4z");
    }

    #[test]
    fn test_remove() {
        let mut lib = Library::default();
        let mut diag = Diagnostics::default();
        lib.add("basic", BASIC, &mut diag).unwrap();
        assert!(lib.remove("basic"));
        assert!(lib.icons.is_empty());
        assert!(!lib.remove("basic"));
    }

    #[test]
    fn test_import() {
        let mut lib = Library::default();
        let mut diag = Diagnostics::default();
        let added = lib
            .import([("basic", BASIC), ("bars", BARS)], &mut diag)
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(lib.icons.len(), 2);
    }

    #[test]
    fn test_export() {
        let mut lib = Library::default();
        let mut diag = Diagnostics::default();
        lib.add("basic", BASIC, &mut diag).unwrap();
        let svg = lib.export("basic").unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox='0 0 32 32'"));
        assert!(svg.contains("M16,4l14,26H2L16,4z"));
        assert!(lib.export("missing").is_none());
    }

    #[test]
    fn test_export_all_keeps_order() {
        let mut lib = Library::default();
        let mut diag = Diagnostics::default();
        lib.add("basic", BASIC, &mut diag).unwrap();
        lib.add("bars", BARS, &mut diag).unwrap();
        let names: Vec<_> = lib.export_all().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["basic", "bars"]);
    }

    #[test]
    fn test_json_field_names() {
        let mut lib = Library::new("test-icons");
        let mut diag = Diagnostics::default();
        lib.add("basic", BASIC, &mut diag).unwrap();
        let json = serde_json::to_string_pretty(&lib).unwrap();
        assert!(json.contains("\"viewBox\""));
        assert!(json.contains("\"pathData\""));
        assert!(json.contains("\"test-icons\""));

        let back: Library = serde_json::from_str(&json).unwrap();
        assert_eq!(back.icons, lib.icons);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LIBRARY_FILE);

        let mut lib = Library::default();
        let mut diag = Diagnostics::default();
        lib.add("basic", BASIC, &mut diag).unwrap();
        lib.save(&path).unwrap();

        let back = Library::load(&path).unwrap();
        assert_eq!(back.name, lib.name);
        assert_eq!(back.icons, lib.icons);
    }
}
