// src/chart.rs

use crate::process::{ReshapedDataset, YearWindow};
use crate::schema::{City, LocalMetric};
use serde::Serialize;

/// Data behind the local-flights bar chart: one bar per window year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub city: City,
    pub metric: LocalMetric,
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl BarChart {
    pub fn build(
        dataset: &ReshapedDataset,
        window: &YearWindow,
        city: City,
        metric: LocalMetric,
    ) -> Self {
        BarChart {
            city,
            metric,
            label: format!("{} Flights in {}", metric.label(), city),
            labels: window.labels(),
            values: dataset.local_series(city, metric),
        }
    }
}
