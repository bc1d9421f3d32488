//! Render context: output location and config values.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::template::TemplateEngine;

/// A scalar config value as it may appear in a values file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ScalarValue {
    fn into_string(self) -> String {
        match self {
            ScalarValue::Bool(b) => b.to_string(),
            ScalarValue::Int(i) => i.to_string(),
            ScalarValue::Float(f) => f.to_string(),
            ScalarValue::Str(s) => s,
        }
    }
}

/// Named string values substituted into asset templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigValues {
    values: BTreeMap<String, String>,
}

impl ConfigValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a flat map of scalars from a `.yaml`, `.yml`, `.json` or `.toml` file.
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        debug!("Loading config values from {:?}", path);

        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let raw: BTreeMap<String, ScalarValue> = match ext.as_str() {
            "json" => serde_json::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            "yaml" | "yml" | "" => serde_yaml::from_str(&content)?,
            other => {
                return Err(RenderError::InvalidConfig(format!(
                    "unsupported values file extension '{other}'"
                )))
            }
        };

        Ok(Self {
            values: raw.into_iter().map(|(k, v)| (k, v.into_string())).collect(),
        })
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Apply a `name=value` assignment as given on the command line.
    pub fn set_assignment(&mut self, assignment: &str) -> RenderResult<()> {
        match assignment.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                self.set(name.trim(), value);
                Ok(())
            }
            _ => Err(RenderError::InvalidConfig(format!(
                "expected name=value, got '{assignment}'"
            ))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Everything a renderer needs besides the asset itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    output_root: PathBuf,
    values: ConfigValues,
    templates: TemplateEngine,
}

impl RenderContext {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            values: ConfigValues::default(),
            templates: TemplateEngine::new(),
        }
    }

    pub fn with_values(mut self, values: ConfigValues) -> Self {
        self.values = values;
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn values(&self) -> &ConfigValues {
        &self.values
    }

    /// Substitute config values, failing on unknown placeholders.
    pub fn template_strict(&self, content: &str) -> RenderResult<String> {
        self.templates.render_strict(content, self.values.as_map())
    }

    /// Substitute config values, keeping unknown placeholders.
    pub fn template_lenient(&self, content: &str) -> String {
        self.templates.render_lenient(content, self.values.as_map())
    }

    /// Resolve an asset `dest` below the output root.
    ///
    /// The destination must be a non-empty relative path that stays inside
    /// the output root.
    pub fn resolve_dest(&self, dest: &str) -> RenderResult<PathBuf> {
        let invalid = |reason: &str| RenderError::InvalidDestination {
            dest: dest.to_string(),
            reason: reason.to_string(),
        };

        if dest.trim().is_empty() {
            return Err(invalid("destination is empty"));
        }

        let relative = Path::new(dest);
        let mut resolved = self.output_root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(invalid("destination must not leave the output directory"))
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("destination must be a relative path"))
                }
            }
        }

        if resolved == self.output_root {
            return Err(invalid("destination names the output directory itself"));
        }

        Ok(resolved)
    }
}
