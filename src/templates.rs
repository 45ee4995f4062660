//! Component templates.
//!
//! Each icon renders through one template into a source module. The two
//! built-in templates produce React components; a custom template is any
//! minijinja source with `name`, `viewBox` and `pathData` in scope.

use minijinja::{Environment, context};

use crate::Component;
use crate::error::IkonError;
use crate::icon::Icon;

const DEFAULT_TEMPLATE: &str = r#"import React from 'react'

const {{ name }}Icon = ({
  size,
  color,
  ...props
}) => (
  <svg
    {...props}
    viewBox='{{ viewBox }}'
    width={size}
    height={size}
    fill={color}
  >
    <path d='{{ pathData }}' />
  </svg>
)

{{ name }}Icon.displayName = '{{ name }}Icon'

{{ name }}Icon.defaultProps = {
  size: 24,
  color: 'currentcolor'
}

export default {{ name }}Icon"#;

const STYLED_SYSTEM_TEMPLATE: &str = r#"import React from 'react'
import styled from 'styled-components'
import { space, color } from 'styled-system'

const Icon = ({
  size,
  ...props
}) => (
  <svg
    {...props}
    viewBox='{{ viewBox }}'
    width={size}
    height={size}
    fill='currentcolor'
  >
    <path d='{{ pathData }}' />
  </svg>
)

const {{ name }}Icon = styled(Icon)([], space, color)

{{ name }}Icon.displayName = '{{ name }}Icon'

{{ name }}Icon.defaultProps = {
  size: 24
}

export default {{ name }}Icon"#;

const ICON_WRAPPER: &str = r#"import React from 'react'
import * as Icons from './index'

const Icon = ({ name, ...props }) => {
  const Component = Icons[name]
  if (!Component) return false
  return <Component {...props} />
}

Icon.displayName = 'Icon'

export default Icon"#;

/// Template selection: a built-in by name, or custom template source.
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    Default,
    StyledSystem,
    /// Minijinja template source, usually read from a file path
    Custom(String),
}

impl Template {
    /// Resolve a built-in template by registry name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Template::Default),
            "styled-system" | "styledSystem" => Some(Template::StyledSystem),
            _ => None,
        }
    }

    fn source(&self) -> &str {
        match self {
            Template::Default => DEFAULT_TEMPLATE,
            Template::StyledSystem => STYLED_SYSTEM_TEMPLATE,
            Template::Custom(source) => source,
        }
    }
}

/// Renders icons through the selected template.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(template: &Template) -> Result<Self, IkonError> {
        let mut env = Environment::new();
        env.add_template_owned("component", template.source().to_string())?;
        Ok(Self { env })
    }

    /// Render one icon into its component module.
    pub fn render(&self, icon: &Icon) -> Result<Component, IkonError> {
        let template = self.env.get_template("component")?;
        let content = template.render(context! {
            name => icon.name,
            viewBox => icon.view_box,
            pathData => icon.path_data,
        })?;
        Ok(Component {
            name: icon.name.clone(),
            content,
        })
    }
}

/// The barrel module re-exporting every generated component.
pub fn index_component(names: &[String]) -> Component {
    let content = names
        .iter()
        .map(|name| format!("export {{ default as {name} }} from './{name}'"))
        .collect::<Vec<_>>()
        .join("\n");
    Component {
        name: "index".into(),
        content,
    }
}

/// The runtime wrapper that selects an icon component by name.
pub fn icon_wrapper_component() -> Component {
    Component {
        name: "Icon".into(),
        content: ICON_WRAPPER.into(),
    }
}
