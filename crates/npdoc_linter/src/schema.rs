//! The canonical NumPyDoc section catalog.

/// One entry in the ordered section schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub name: &'static str,
    pub required: bool,
}

impl SectionEntry {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// The recognized NumPyDoc sections in their canonical relative order.
///
/// Headings not listed here are silently ignored by the validator. The list
/// must not contain duplicate names.
pub const NUMPY_SECTIONS: &[SectionEntry] = &[
    SectionEntry::required("Parameters"),
    SectionEntry::required("Returns"),
    SectionEntry::optional("Yields"),
    SectionEntry::optional("Receives"),
    SectionEntry::optional("Other Parameters"),
    SectionEntry::optional("Raises"),
    SectionEntry::optional("Warns"),
    SectionEntry::optional("Warnings"),
    SectionEntry::optional("See Also"),
    SectionEntry::optional("Notes"),
    SectionEntry::optional("References"),
    SectionEntry::optional("Examples"),
];
