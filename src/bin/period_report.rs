// src/bin/period_report.rs
//
// Summarise a saved TypedDataSet response: how many rows per period kind and
// per airport, and how many would survive the reshape for a given window.

use anyhow::{bail, Result};
use cbsflights::{
    fetch::load_payload,
    process::{compute_window, decode_records, filter_by_years, YearWindow},
    schema::{City, PeriodCode, PeriodKind, RawRecord},
};
use chrono::Local;
use std::collections::BTreeMap;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Default, PartialEq)]
struct Report {
    by_kind: BTreeMap<PeriodKind, usize>,
    by_airport: BTreeMap<String, usize>,
    in_window: usize,
}

fn build_report(records: &[RawRecord], window: &YearWindow) -> Result<Report> {
    let mut report = Report::default();
    for r in records {
        *report
            .by_kind
            .entry(PeriodCode::classify(&r.periods))
            .or_default() += 1;
        let airport = City::from_airport_code(&r.airports)
            .map(|c| c.name().to_string())
            .unwrap_or_else(|| format!("other ({})", r.airports));
        *report.by_airport.entry(airport).or_default() += 1;
    }
    report.in_window = filter_by_years(records, window.start(), window.end())?.len();
    Ok(report)
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        bail!("usage: {} <payload.json>", args[0]);
    }

    let payload = load_payload(&args[1])?;
    let records = decode_records(&payload)?;
    let window = compute_window(Local::now().date_naive());
    info!(rows = records.len(), y1 = window.start(), y2 = window.end(), "loaded");

    let report = build_report(&records, &window)?;

    println!("period kinds:");
    for (kind, n) in &report.by_kind {
        println!("  {:<14} {}", kind, n);
    }
    println!("airports:");
    for (airport, n) in &report.by_airport {
        println!("  {:<24} {}", airport, n);
    }
    println!(
        "annual rows in {}..={}: {}",
        window.start(), window.end(), report.in_window
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_report() {
        let payload = json!([
            {"Periods": "2019JJ00", "Airports": "A043590"},
            {"Periods": "2019KW02", "Airports": "A043590"},
            {"Periods": "2019MM11", "Airports": "A043597"},
            {"Periods": "2001JJ00", "Airports": "A043595"}
        ]);
        let records = decode_records(&payload).unwrap();
        let report = build_report(&records, &YearWindow::new(2010, 2019).unwrap()).unwrap();

        assert_eq!(report.by_kind[&PeriodKind::Year], 2);
        assert_eq!(report.by_kind[&PeriodKind::Quarter], 1);
        assert_eq!(report.by_kind[&PeriodKind::Month], 1);
        assert_eq!(report.by_airport["Amsterdam"], 2);
        assert_eq!(report.by_airport["other (A043597)"], 1);
        assert_eq!(report.in_window, 1);
    }
}
