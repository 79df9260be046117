//! Structural checks for NumPyDoc-style docstrings.
//!
//! The library is split along the pipeline: [`surface`] models a module's
//! exported API and enumerates its public callables, [`docstrings`] extracts
//! section headings from raw documentation text, and [`rules`] holds the
//! checks that turn headings and example blocks into [`checks::CheckKind`]
//! values. [`linter::check_docstring`] ties the per-object pieces together.

pub mod checks;
pub mod docstrings;
pub mod linter;
pub mod logging;
pub mod rules;
pub mod schema;
pub mod settings;
pub mod surface;
