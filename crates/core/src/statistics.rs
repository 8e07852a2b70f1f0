//! Aggregate statistics over the catalog.

use std::collections::BTreeMap;

use serde::Serialize;

/// Summary returned by the statistics operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStatistics {
    /// Every record, including those without a release year.
    pub total: i64,
    /// Decade label (e.g. `"1990s"`) to number of records released in it.
    pub by_decade: BTreeMap<String, i64>,
}

/// Label of the decade containing `year`, e.g. `1994` -> `"1990s"`.
pub fn decade_label(year: i32) -> String {
    format!("{}s", year.div_euclid(10) * 10)
}

/// Build statistics from the release years of every record in the catalog.
///
/// `None` entries count toward the total but not toward any decade.
pub fn summarize<I>(release_years: I) -> CatalogStatistics
where
    I: IntoIterator<Item = Option<i32>>,
{
    let mut stats = CatalogStatistics::default();
    for year in release_years {
        stats.total += 1;
        if let Some(year) = year {
            *stats.by_decade.entry(decade_label(year)).or_insert(0) += 1;
        }
    }
    stats
}
