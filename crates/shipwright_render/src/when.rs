//! Evaluation of the `when` predicate shared by all assets.

use crate::context::RenderContext;
use crate::error::{RenderError, RenderResult};

/// Decide whether an asset with the given `when` should be rendered.
///
/// A blank predicate always renders. Otherwise the predicate is templated
/// with the config values and must come out as a boolean word.
pub fn evaluate(when: &str, ctx: &RenderContext) -> RenderResult<bool> {
    if when.trim().is_empty() {
        return Ok(true);
    }

    let value = ctx.template_strict(when)?;
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(RenderError::InvalidWhen {
            when: when.to_string(),
            value,
        }),
    }
}
