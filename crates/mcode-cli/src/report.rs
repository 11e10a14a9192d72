//! # Report Rendering
//!
//! Turns an ordered violation list into the human-facing report.
//! Markers are part of the CLI contract: `✅` success, `⚠️` advisory
//! warnings, `❌` hard failure (rendered by the runner, not here).

use mcode_schema::Violation;

/// Render the validation outcome as report lines.
///
/// An empty violation list renders the single success marker line.
/// Otherwise: a warnings header, then one `- <dotted.path>: <message>`
/// line per violation in the order given (the caller sorts). Every line
/// is newline-terminated.
pub fn render(violations: &[Violation]) -> String {
    if violations.is_empty() {
        return "✅ Schema validation passed\n".to_string();
    }
    let mut out = String::from("⚠️ Schema validation warnings:\n");
    for violation in violations {
        out.push_str(&violation.to_string());
        out.push('\n');
    }
    out
}
