//! Preview rendering
//!
//! Shows an operator exactly what a save would persist, before they submit.

use crate::rules::validation::normalize_responses;

/// Text shown when a preview has no surviving lines
pub const PREVIEW_PLACEHOLDER: &str = "(no responses)";

/// Render raw response lines the way a save would store them
///
/// Applies the save filter (trim, drop blank, keep order) and joins the
/// result with `\n`. Returns [`PREVIEW_PLACEHOLDER`] when nothing survives.
///
/// # Example
///
/// ```
/// use botcmd_core::render_preview;
///
/// assert_eq!(render_preview(["Hi there", "", "Welcome!"]), "Hi there\nWelcome!");
/// ```
pub fn render_preview<I, S>(raw: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = normalize_responses(raw);
    if lines.is_empty() {
        PREVIEW_PLACEHOLDER.to_string()
    } else {
        lines.join("\n")
    }
}
