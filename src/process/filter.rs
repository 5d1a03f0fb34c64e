// src/process/filter.rs

use crate::error::{ReshapeError, Result};
use crate::schema::{PeriodCode, PeriodKind, RawRecord};
use std::collections::BTreeMap;
use tracing::debug;

/// Keep the annual-total rows (`YYYYJJ00`) for every year in `start..=end`,
/// in input order. Quarterly, monthly and out-of-window rows are dropped.
///
/// Each period code must match at most one year of the window; a code that
/// matches several is reported instead of being kept twice.
pub fn filter_by_years(records: &[RawRecord], start: i32, end: i32) -> Result<Vec<&RawRecord>> {
    let keys: Vec<String> = (start..=end).map(PeriodCode::annual).collect();

    let mut kept = Vec::new();
    let mut dropped: BTreeMap<PeriodKind, usize> = BTreeMap::new();

    for record in records {
        let matches = keys.iter().filter(|k| **k == record.periods).count();
        match matches {
            0 => *dropped.entry(PeriodCode::classify(&record.periods)).or_default() += 1,
            1 => kept.push(record),
            // keys are one per year and all distinct, so only a broken key set lands here
            n => {
                return Err(ReshapeError::AmbiguousPeriod {
                    period: record.periods.clone(),
                    matches: n,
                })
            }
        }
    }

    debug!(start, end, kept = kept.len(), ?dropped, "filtered by years");
    Ok(kept)
}
