//! Helpers for dissecting NumPyDoc-style docstrings.

/// Extract the leading whitespace from a line of text.
pub fn leading_space(line: &str) -> &str {
    line.find(|char: char| !char.is_whitespace())
        .map_or(line, |index| &line[..index])
}

/// Extract the section headings from a docstring, in document order.
///
/// A line is a heading if the line immediately below it consists of dashes
/// repeated to exactly the heading's width, starting at the same column as
/// the heading's first non-whitespace character. Widths are measured on the
/// raw lines; the extracted heading value is the trimmed text.
///
/// The scan is a single pass over consecutive line pairs and does not track
/// indentation levels, so a heading-shaped pattern nested under a parameter
/// description is still reported as a heading. This matches numpydoc's own
/// lint tool, which treats section detection indentation-insensitively.
pub fn extract_headings(docstring: &str) -> Vec<String> {
    let lines: Vec<&str> = docstring.lines().collect();
    let mut headings = Vec::new();
    for k in 0..lines.len().saturating_sub(1) {
        let line = lines[k];
        if line.trim().is_empty() {
            continue;
        }
        let indent = leading_space(line);
        let width = line.chars().count() - indent.chars().count();
        let underline = format!("{indent}{}", "-".repeat(width));
        if lines[k + 1] == underline {
            headings.push(line.trim().to_string());
        }
    }
    headings
}
