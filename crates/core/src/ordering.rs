//! Sort orders for listing the catalog.

/// Query-string value selecting alphabetical ordering.
pub const SORT_PARAM_NAME: &str = "name";

/// Ordering applied when listing every favorite game.
///
/// - `RecencyDesc`: most recently added first; ties broken by id, newest first.
/// - `NameAsc`: case-insensitive alphabetical by Unicode code point (so
///   `"Mario Kart"` < `"Mario's"` < `"Mario-Kart"`); ties broken by the exact
///   name (uppercase first), then by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    RecencyDesc,
    NameAsc,
}

impl SortOrder {
    /// Resolve the optional `sort` query parameter.
    ///
    /// Only `name` (any case) selects alphabetical ordering; anything else,
    /// including an absent parameter, falls back to recency.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(value) if value.trim().eq_ignore_ascii_case(SORT_PARAM_NAME) => Self::NameAsc,
            _ => Self::RecencyDesc,
        }
    }
}
