//! ikon - an SVG icon compiler
//!
//! ikon normalizes each icon's vector geometry into a single flattened
//! path and renders it through a component template.

mod ast;
mod error;
mod grammar;
mod icon;
mod library;
mod parse;
mod path;
mod shapes;
mod templates;
mod transform;

pub use ast::*;
pub use error::*;
pub use icon::*;
pub use library::*;
pub use parse::*;
pub use path::*;
pub use shapes::*;
pub use templates::*;
pub use transform::*;

/// A named SVG source.
#[derive(Debug, Clone)]
pub struct SvgFile {
    pub name: String,
    pub content: String,
}

/// A generated source module.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub content: String,
}

/// Append-only collection of non-fatal warnings from a pipeline run.
/// Warnings never affect returned values.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Generation options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Template each icon renders through
    pub template: Template,
    /// Emit an index barrel module
    pub index: bool,
    /// Emit a runtime Icon wrapper module (implies the index)
    pub icon_component: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            template: Template::Default,
            index: false,
            icon_component: false,
        }
    }
}

/// Outcome of a generation run.
///
/// Icons that fail to normalize are reported in `failures` without
/// aborting the rest of the batch.
#[derive(Debug)]
pub struct Generated {
    pub components: Vec<Component>,
    pub diagnostics: Diagnostics,
    pub failures: Vec<(String, IkonError)>,
}

/// Generate components with default options.
pub fn generate(files: &[SvgFile]) -> Result<Generated, IkonError> {
    generate_with_options(files, &Options::default())
}

/// Generate one component per icon, plus the optional index and wrapper
/// modules. Components keep input order; the index lists icon components
/// only.
pub fn generate_with_options(files: &[SvgFile], options: &Options) -> Result<Generated, IkonError> {
    let renderer = Renderer::new(&options.template)?;
    let mut diagnostics = Diagnostics::default();
    let mut components = Vec::new();
    let mut failures = Vec::new();

    for file in files {
        match parse_icon(&file.name, &file.content, &mut diagnostics) {
            Ok(icon) => components.push(renderer.render(&icon)?),
            Err(err) => failures.push((file.name.clone(), err)),
        }
    }

    if options.index || options.icon_component {
        let names: Vec<String> = components.iter().map(|c| c.name.clone()).collect();
        if options.icon_component {
            components.push(icon_wrapper_component());
        }
        components.push(index_component(&names));
    }

    Ok(Generated {
        components,
        diagnostics,
        failures,
    })
}
