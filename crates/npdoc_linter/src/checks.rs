#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum CheckCode {
    SEC001,
    SEC002,
    SEC003,
    SEC004,
    IMP001,
    IMP002,
}

/// A single structural defect found in a docstring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    /// A required section is absent.
    MissingSection(String),
    /// A section heading appears more than once.
    RepeatedSection(String),
    /// A section appears out of the canonical order. Carries the name of the
    /// earlier-schema section that surfaced later in the document, i.e. the
    /// visible symptom rather than the root cause.
    SectionOutOfOrder(String),
    /// A section heading uses nonstandard casing.
    SectionNameCase { found: String, expected: String },
    /// The `Examples` section uses the `np.` namespace without importing it.
    MissingNumpyImport,
    /// An import statement is repeated verbatim inside `Examples`.
    DuplicateImport(String),
}

impl CheckKind {
    pub fn code(&self) -> CheckCode {
        match self {
            CheckKind::MissingSection(..) => CheckCode::SEC001,
            CheckKind::RepeatedSection(..) => CheckCode::SEC002,
            CheckKind::SectionOutOfOrder(..) => CheckCode::SEC003,
            CheckKind::SectionNameCase { .. } => CheckCode::SEC004,
            CheckKind::MissingNumpyImport => CheckCode::IMP001,
            CheckKind::DuplicateImport(..) => CheckCode::IMP002,
        }
    }

    /// The body text for the check.
    pub fn body(&self) -> String {
        match self {
            CheckKind::MissingSection(name) => {
                format!("missing section: '{name}'")
            }
            CheckKind::RepeatedSection(name) => {
                format!("repeated section: '{name}'")
            }
            CheckKind::SectionOutOfOrder(name) => {
                format!("section out of order: '{name}'")
            }
            CheckKind::SectionNameCase { found, expected } => {
                format!("'{found}' should be '{expected}' (according to the standard)")
            }
            CheckKind::MissingNumpyImport => {
                "missing 'import numpy as np' in 'Examples'".to_string()
            }
            CheckKind::DuplicateImport(line) => {
                format!("duplicated import in 'Examples': {line}")
            }
        }
    }
}
