//! The per-object check entry point.

use crate::checks::CheckKind;
use crate::docstrings::extract_headings;
use crate::rules::{examples, sections};
use crate::schema::SectionEntry;
use crate::settings::Settings;

/// Run every docstring check over one object's documentation.
///
/// An absent docstring is treated as empty text, so required sections are
/// still reported as missing. Checks are values, never errors: a docstring
/// exhibiting every defect still yields a successful call.
pub fn check_docstring(
    docstring: Option<&str>,
    schema: &[SectionEntry],
    settings: &Settings,
) -> Vec<CheckKind> {
    let text = docstring.unwrap_or_default();
    let headings = extract_headings(text);
    let mut checks = sections::check_headings(&headings, schema, settings);
    checks.extend(examples::check_example_imports(text));
    checks
}
