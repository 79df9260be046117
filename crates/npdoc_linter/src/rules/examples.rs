use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::checks::CheckKind;

/// Check the `Examples` section of a docstring for import defects.
///
/// The section is located by the literal substring `"Examples\n"` and taken
/// to run through the end of the docstring; a false positive is possible if
/// further sections follow it. Duplicate detection compares trimmed lines
/// textually, so `from numpy import array, asarray` and
/// `from numpy import asarray, array` are distinct lines and never flagged
/// as duplicates of each other.
pub fn check_example_imports(docstring: &str) -> Vec<CheckKind> {
    let Some(start) = docstring.find("Examples\n") else {
        return Vec::new();
    };
    let examples = &docstring[start..];

    let mut checks = Vec::new();
    if examples.contains("np.") && !examples.contains("import numpy as np") {
        checks.push(CheckKind::MissingNumpyImport);
    }

    let mut lines: Vec<&str> = examples
        .lines()
        .map(str::trim)
        .filter(|line| line.contains("import"))
        .collect();
    // Sorting first makes the occurrence counts independent of line order
    // and the report order lexicographic.
    lines.sort_unstable();
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for line in &lines {
        *counts.entry(*line).or_insert(0) += 1;
    }
    for line in lines.iter().dedup() {
        if counts[line] > 1 {
            checks.push(CheckKind::DuplicateImport((*line).to_string()));
        }
    }
    checks
}
