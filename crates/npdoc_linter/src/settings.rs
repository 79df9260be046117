/// Per-run toggles for the docstring checks.
///
/// Constructed once by the caller and passed explicitly into every check;
/// nothing here is read from ambient state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    /// Don't report a missing 'Returns' section.
    pub ignore_missing_returns: bool,
    /// Don't report 'See also' as a casing discrepancy.
    pub ignore_see_also_case: bool,
}
