use itertools::Itertools;

use crate::checks::CheckKind;
use crate::schema::SectionEntry;
use crate::settings::Settings;

/// Check a docstring's extracted headings against the ordered section schema.
///
/// Emits one check per missing required section, one per section heading that
/// occurs more than once, and one per section whose first occurrence sits
/// earlier in the document than the previously matched schema entry. The
/// out-of-order check names the previously matched section (the one that
/// surfaced later in the document), not the entry being processed.
pub fn check_headings(
    headings: &[String],
    schema: &[SectionEntry],
    settings: &Settings,
) -> Vec<CheckKind> {
    let mut checks = Vec::new();
    let mut headings = headings.to_vec();

    // 'See also' is normalized before any order or presence checks so that
    // the rewritten occurrence still participates in them.
    if !settings.ignore_see_also_case {
        if let Some(index) = headings.iter().position(|heading| heading == "See also") {
            checks.push(CheckKind::SectionNameCase {
                found: "See also".to_string(),
                expected: "See Also".to_string(),
            });
            headings[index] = "See Also".to_string();
        }
    }

    let mut prev_index: Option<usize> = None;
    for entry in schema {
        let mut occurrences = headings.iter().positions(|heading| heading == entry.name);
        let Some(index) = occurrences.next() else {
            if entry.required && (entry.name != "Returns" || !settings.ignore_missing_returns) {
                checks.push(CheckKind::MissingSection(entry.name.to_string()));
            }
            continue;
        };
        if occurrences.next().is_some() {
            checks.push(CheckKind::RepeatedSection(entry.name.to_string()));
        }
        if let Some(prev) = prev_index {
            if index < prev {
                checks.push(CheckKind::SectionOutOfOrder(headings[prev].clone()));
            }
        }
        prev_index = Some(index);
    }
    checks
}
