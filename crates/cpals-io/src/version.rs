//! Version constants for report consumers.

/// Version of the JSON report shapes in [`crate::report`].
///
/// Bump when a field is renamed, removed, or changes meaning.
pub const CPALS_REPORT_V: u8 = 1;
