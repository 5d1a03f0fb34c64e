// src/process/mod.rs

pub mod filter;
pub mod group;
pub mod project;
pub mod window;

pub use filter::filter_by_years;
pub use group::group_by_airport;
pub use project::{project_fields, Projection};
pub use window::{compute_window, YearWindow};

use crate::error::{ReshapeError, Result};
use crate::schema::{City, Figure, LocalMetric, LocalRecord, RawRecord, WorldMetric, WorldRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// Flight figures per domain, then per catalog city, in source order.
///
/// Both maps always carry all five catalog cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReshapedDataset {
    pub local: BTreeMap<City, Vec<LocalRecord>>,
    pub world: BTreeMap<City, Vec<WorldRecord>>,
}

impl ReshapedDataset {
    pub fn local(&self, city: City) -> &[LocalRecord] {
        self.local.get(&city).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn world(&self, city: City) -> &[WorldRecord] {
        self.world.get(&city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// One local metric for every record of `city`, as chart values.
    pub fn local_series(&self, city: City, metric: LocalMetric) -> Vec<Option<f64>> {
        self.local(city)
            .iter()
            .map(|r| r.get(metric).as_ref().and_then(|n| n.as_f64()))
            .collect()
    }

    /// The world figure of `city` for `year`. When a year occurs more than
    /// once the last record wins.
    pub fn world_figure(&self, city: City, year: &str, metric: WorldMetric) -> Figure {
        self.world(city)
            .iter()
            .rev()
            .find(|r| r.year == year)
            .and_then(|r| r.get(metric).clone())
    }

    /// Number of records per city.
    pub fn city_counts(&self) -> BTreeMap<City, usize> {
        self.local.iter().map(|(c, v)| (*c, v.len())).collect()
    }
}

/// Decode the raw `value` array of a `TypedDataSet` response.
///
/// A payload that is not an array fails outright; individual rows that do not
/// decode are logged and skipped.
pub fn decode_records(payload: &Value) -> Result<Vec<RawRecord>> {
    let rows = payload.as_array().ok_or_else(|| {
        ReshapeError::DataShape(format!("expected an array of records, got {}", kind_of(payload)))
    })?;

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match RawRecord::deserialize(row) {
            Ok(r) => records.push(r),
            Err(e) => warn!(index, error = %e, "skipping malformed record"),
        }
    }
    Ok(records)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Filter, group and project already decoded records.
pub fn reshape_records(records: &[RawRecord], window: &YearWindow) -> Result<ReshapedDataset> {
    let filtered = filter_by_years(records, window.start(), window.end())?;
    let grouped = group_by_airport(filtered);

    let mut local = BTreeMap::new();
    let mut world = BTreeMap::new();
    for (city, city_records) in &grouped {
        let Projection {
            local: l,
            world: w,
        } = project_fields(city_records);
        local.insert(*city, l);
        world.insert(*city, w);
    }

    Ok(ReshapedDataset { local, world })
}

/// Full pipeline from the raw payload to the dataset the UI reads.
#[instrument(level = "info", skip(payload))]
pub fn reshape(payload: &Value, window: &YearWindow) -> Result<ReshapedDataset> {
    let records = decode_records(payload)?;
    let dataset = reshape_records(&records, window)?;
    info!(
        decoded = records.len(),
        kept = dataset.city_counts().values().sum::<usize>(),
        "reshaped"
    );
    Ok(dataset)
}
