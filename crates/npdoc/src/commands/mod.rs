pub(crate) mod check;
pub(crate) mod missing_examples;
pub(crate) mod version;
