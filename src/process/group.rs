// src/process/group.rs

use crate::schema::{City, RawRecord, CATALOG};
use std::collections::BTreeMap;
use tracing::debug;

/// Records partitioned by catalog city.
pub type Grouped<'a> = BTreeMap<City, Vec<&'a RawRecord>>;

/// Partition records by airport. Every catalog city is present in the output,
/// possibly empty; rows for other airports (and national totals) are dropped.
pub fn group_by_airport<'a>(records: impl IntoIterator<Item = &'a RawRecord>) -> Grouped<'a> {
    let mut grouped: Grouped<'a> = CATALOG.into_iter().map(|c| (c, Vec::new())).collect();
    let mut unmatched = 0usize;

    for record in records {
        match City::from_airport_code(&record.airports) {
            Some(city) => grouped.entry(city).or_default().push(record),
            None => unmatched += 1,
        }
    }

    debug!(unmatched, "grouped by airport");
    grouped
}
