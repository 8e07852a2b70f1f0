//! Query parameter types for API handlers.

use serde::Deserialize;

/// `?sort=` for the list endpoint. `name` selects alphabetical order;
/// anything else (or nothing) means most recently added first.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
}

/// `?name=` for name search. Required, may be empty.
#[derive(Debug, Deserialize)]
pub struct NameSearchParams {
    pub name: String,
}

/// `?from=&to=` for the inclusive release year range search.
#[derive(Debug, Deserialize)]
pub struct YearRangeParams {
    pub from: i32,
    pub to: i32,
}
