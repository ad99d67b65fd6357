//! Changelog templates
//!
//! A small mustache-style language rendered against the serialized form of a
//! context value (normally a [ChangelogDocument](crate::changelog::ChangelogDocument)).
//!
//! - `{{name}}`, `{{a.b}}` - value lookup, innermost context first
//! - `{{.}}` - the current context value
//! - `{{#name}}...{{/name}}` - iterate arrays, or render once for other truthy values
//! - `{{^name}}...{{/name}}` - render only when the value is falsy
//! - `{{! comment }}` - ignored
//!
//! ```rust
//! # use git_changelog::template::Template;
//! # use serde_json::json;
//! let template = Template::parse("{{#changes}} * {{.}}\n{{/changes}}").unwrap();
//! let out = template.render(&json!({"changes": ["fix", "feat"]})).unwrap();
//! assert_eq!(out, " * fix\n * feat\n");
//! ```

pub mod parser;
pub mod render;

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use parser::Node;

/// Template used when no template file is configured
pub const DEFAULT_TEMPLATE: &str = "# Current version: {{version}}
===
# Change log
===
{{#sections}}### {{#headerFrom}}{{headerFrom}} - {{/headerFrom}}{{headerTo}}
---
{{#changes}} * {{.}}
{{/changes}}
{{/sections}}";

/// Errors raised while parsing or rendering a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed tag starting at byte {0}")]
    UnclosedTag(usize),

    #[error("empty tag at byte {0}")]
    EmptyTag(usize),

    #[error("section '{0}' is never closed")]
    UnclosedSection(String),

    #[error("closing tag '{found}' does not match open section '{expected}'")]
    MismatchedClose { expected: String, found: String },

    #[error("closing tag '{0}' has no open section")]
    UnexpectedClose(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("cannot serialize template context: {0}")]
    Context(String),
}

/// A parsed template, reusable across renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template source
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        Ok(Template {
            nodes: parser::parse(source)?,
        })
    }

    /// Render against any serializable context
    pub fn render<T: Serialize>(&self, context: &T) -> Result<String, TemplateError> {
        let root =
            serde_json::to_value(context).map_err(|e| TemplateError::Context(e.to_string()))?;

        let mut out = String::new();
        render::render_nodes(&self.nodes, &mut vec![&root], &mut out)?;
        Ok(out)
    }
}

/// Load the template at `path`, or the default template when no path is given.
///
/// # Returns
/// * `Ok(Template)` - Parsed template
/// * `Err` - If the file cannot be read or does not parse
pub fn load_template(path: Option<&Path>) -> crate::Result<Template> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading changelog template");
            let source = fs::read_to_string(path)?;
            Ok(Template::parse(&source)?)
        }
        None => Ok(Template::parse(DEFAULT_TEMPLATE)?),
    }
}
