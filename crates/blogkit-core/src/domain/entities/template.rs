//! Template model and rendering context.
//!
//! ## Template syntax
//!
//! A template source is plain text with named slots:
//!
//! ```text
//! import { BlogAdmin } from '{{PACKAGE}}';
//! window.location.href = '/{{ADMIN_PATH}}';
//! ```
//!
//! Sources are parsed once into [`Segment`]s. Each slot carries an
//! [`Escape`] mode chosen at parse time:
//!
//! | Slot               | Escape                   |
//! |--------------------|--------------------------|
//! | `{{NAME}}`         | [`Escape::StringLiteral`] |
//! | `{{NAME\|str}}`    | [`Escape::StringLiteral`] |
//! | `{{NAME\|raw}}`    | [`Escape::Raw`]           |
//!
//! Escaping is the default: a slot only emits its value verbatim when the
//! template author writes `|raw`. Literal `{{` is not allowed outside a slot.
//!
//! ## Built-in variables
//!
//! | Variable     | Source                        |
//! |--------------|-------------------------------|
//! | `PACKAGE`    | [`ScaffoldConfig::package`]   |
//! | `BASE_PATH`  | [`ScaffoldConfig::base_path`] |
//! | `ADMIN_PATH` | [`ScaffoldConfig::admin_path`]|
//! | `AUTH_PATH`  | [`ScaffoldConfig::auth_path`] |

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::domain::{
    entities::config::ScaffoldConfig, error::DomainError, value_objects::Artifact,
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// How a slot value is written into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Emit the value unchanged.
    Raw,
    /// Escape for a single-quoted JS/TS string literal.
    StringLiteral,
}

impl Escape {
    fn from_filter(filter: Option<&str>) -> Option<Self> {
        match filter {
            None | Some("str") => Some(Self::StringLiteral),
            Some("raw") => Some(Self::Raw),
            Some(_) => None,
        }
    }

    pub fn apply(self, value: &str, out: &mut String) {
        match self {
            Self::Raw => out.push_str(value),
            Self::StringLiteral => {
                for c in value.chars() {
                    match c {
                        '\\' => out.push_str("\\\\"),
                        '\'' => out.push_str("\\'"),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\t' => out.push_str("\\t"),
                        '\u{2028}' => out.push_str("\\u2028"),
                        '\u{2029}' => out.push_str("\\u2029"),
                        other => out.push(other),
                    }
                }
            }
        }
    }
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Slot { name: String, escape: Escape },
}

/// A parsed, ready-to-render template for one [`Artifact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    artifact: Artifact,
    description: &'static str,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source` into segments.
    ///
    /// # Errors
    /// `DomainError::InvalidTemplate` for an unterminated slot, an empty or
    /// malformed variable name, or an unknown filter.
    pub fn parse(
        artifact: Artifact,
        description: &'static str,
        source: &str,
    ) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidTemplate {
            template: artifact.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after_open = &rest[start + OPEN.len()..];
            let offset = source.len() - rest.len() + start;
            let end = after_open
                .find(CLOSE)
                .ok_or_else(|| invalid(format!("unterminated slot at byte {offset}")))?;

            let inner = after_open[..end].trim();
            let (name, filter) = match inner.split_once('|') {
                Some((name, filter)) => (name.trim(), Some(filter.trim())),
                None => (inner, None),
            };

            if !is_valid_name(name) {
                return Err(invalid(format!("invalid variable name '{name}'")));
            }
            let escape = Escape::from_filter(filter).ok_or_else(|| {
                invalid(format!("unknown filter '{}'", filter.unwrap_or_default()))
            })?;

            segments.push(Segment::Slot {
                name: name.to_string(),
                escape,
            });
            rest = &after_open[end + CLOSE.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        if segments.is_empty() {
            return Err(invalid("template has no content".into()));
        }

        Ok(Self {
            artifact,
            description,
            segments,
        })
    }

    pub fn artifact(&self) -> Artifact {
        self.artifact
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct variable names referenced by this template, sorted.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Slot { name, .. } => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.artifact, self.description)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Variables available to a render.
///
/// Values are stored raw; escaping happens per slot during [`RenderContext::render`].
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying the standard variables for `config`.
    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self::new()
            .with_variable("PACKAGE", config.package())
            .with_variable("BASE_PATH", config.base_path().as_str())
            .with_variable("ADMIN_PATH", config.admin_path().as_str())
            .with_variable("AUTH_PATH", config.auth_path().as_str())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render `template`, escaping each slot according to its mode.
    ///
    /// # Errors
    /// `DomainError::UnknownVariable` if a slot has no value in this context.
    pub fn render(&self, template: &Template) -> Result<String, DomainError> {
        let mut out = String::new();
        for segment in &template.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot { name, escape } => {
                    let value = self.get(name).ok_or_else(|| DomainError::UnknownVariable {
                        template: template.artifact.to_string(),
                        variable: name.clone(),
                    })?;
                    escape.apply(value, &mut out);
                }
            }
        }
        Ok(out)
    }
}
