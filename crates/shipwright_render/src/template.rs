//! Config value substitution.

use std::collections::BTreeMap;

use regex::{Captures, Regex};
use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Substitutes `{{name}}` placeholders with config values.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    variable_pattern: Regex,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self {
            // Match {{ variable_name }} with optional inner whitespace
            variable_pattern: Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
                .expect("placeholder pattern is valid"),
        }
    }

    /// Replace every placeholder, failing on the first unknown name.
    pub fn render_strict(
        &self,
        content: &str,
        values: &BTreeMap<String, String>,
    ) -> RenderResult<String> {
        if let Some(missing) = self
            .variable_pattern
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .find(|name| !values.contains_key(name))
        {
            return Err(RenderError::MissingVariable(missing));
        }

        Ok(self.render_lenient(content, values))
    }

    /// Replace known placeholders and leave unknown ones untouched.
    pub fn render_lenient(&self, content: &str, values: &BTreeMap<String, String>) -> String {
        self.variable_pattern
            .replace_all(content, |caps: &Captures| match values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => {
                    debug!("Leaving unknown placeholder {} in place", &caps[0]);
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}
