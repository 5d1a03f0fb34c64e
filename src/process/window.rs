// src/process/window.rs

use crate::error::{ReshapeError, Result};
use chrono::Datelike;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Number of full calendar years shown.
pub const WINDOW_YEARS: i32 = 10;

/// Inclusive range of years the dataset is cut to. Serializes as `{y1, y2}`.
///
/// Always `start <= end`; only `new` and `compute_window` build one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct YearWindow {
    #[serde(rename = "y1")]
    start: i32,
    #[serde(rename = "y2")]
    end: i32,
}

impl YearWindow {
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(ReshapeError::InvalidWindow { start, end });
        }
        Ok(YearWindow { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years().contains(&year)
    }

    /// One label per year, for the chart axis and the year selector.
    pub fn labels(&self) -> Vec<String> {
        self.years().map(|y| y.to_string()).collect()
    }
}

/// The ten full calendar years before `today`.
pub fn compute_window(today: impl Datelike) -> YearWindow {
    let end = today.year() - 1;
    YearWindow {
        start: end - (WINDOW_YEARS - 1),
        end,
    }
}
