/// Whether a function's docstring lacks an `Examples` section.
///
/// An absent docstring counts as missing. Deprecated functions are excluded:
/// their docstrings say "is deprecated" and gain nothing from an example.
/// Both probes are plain substring matches, so an `Examples` heading
/// mentioned anywhere in prose also satisfies the check.
pub fn is_missing_examples(docstring: Option<&str>) -> bool {
    match docstring {
        None => true,
        Some(doc) => !doc.contains("is deprecated") && !doc.contains("Examples"),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::is_missing_examples;

    #[test]
    fn absent_docstring_is_missing() {
        assert!(is_missing_examples(None));
    }

    #[test_case("Sum the input.\n\nExamples\n--------\n>>> f(1)\n", false; "examples section")]
    #[test_case("Sum the input.\n\nParameters\n----------\nx : int\n", true; "no examples")]
    #[test_case("`f` is deprecated, use `g` instead.\n", false; "deprecated is excluded")]
    #[test_case("See the Examples in the user guide.\n", false; "substring match in prose")]
    fn docstring_cases(docstring: &str, missing: bool) {
        assert_eq!(is_missing_examples(Some(docstring)), missing);
    }
}
