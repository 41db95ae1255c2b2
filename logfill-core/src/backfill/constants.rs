/// Marker for the permissive line filter: a 200 status field in the
/// conventional access-log layout, with its surrounding spaces.
pub const SUCCESS_MARKER: &str = " 200 ";

/// Month rendered for timestamp tokens missing from the fixed month table.
/// Unknown months fall back to this instead of dropping the line.
pub const FALLBACK_MONTH: &str = "01";
