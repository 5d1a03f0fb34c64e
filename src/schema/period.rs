// src/schema/period.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PERIOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(JJ|KW|MM)(\d{2})$").expect("period regex should parse"));

/// What a CBS period code denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodKind {
    Year,
    Quarter,
    Month,
    Unrecognised,
}

impl PeriodKind {
    pub fn as_str(&self) -> &str {
        match self {
            PeriodKind::Year => "year",
            PeriodKind::Quarter => "quarter",
            PeriodKind::Month => "month",
            PeriodKind::Unrecognised => "unrecognised",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `YYYY` + `JJ|KW|MM` + `nn` period code, e.g. `2019JJ00`, `2019KW01`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PeriodCode {
    pub year: i32,
    pub kind: PeriodKind,
    pub index: u8,
}

impl PeriodCode {
    pub fn parse(code: &str) -> Option<Self> {
        let caps = PERIOD_RE.captures(code.trim())?;
        let year: i32 = caps[1].parse().ok()?;
        let index: u8 = caps[3].parse().ok()?;
        let kind = match &caps[2] {
            "JJ" if index == 0 => PeriodKind::Year,
            "KW" if (1..=4).contains(&index) => PeriodKind::Quarter,
            "MM" if (1..=12).contains(&index) => PeriodKind::Month,
            _ => return None,
        };
        Some(PeriodCode { year, kind, index })
    }

    /// Kind of any code, including ones that do not parse.
    pub fn classify(code: &str) -> PeriodKind {
        Self::parse(code).map_or(PeriodKind::Unrecognised, |p| p.kind)
    }

    /// The annual-total code for `year`.
    pub fn annual(year: i32) -> String {
        format!("{}JJ00", year)
    }
}
