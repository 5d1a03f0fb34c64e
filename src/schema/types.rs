// src/schema/types.rs

use crate::error::ReshapeError;
use crate::schema::projection;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::{collections::BTreeMap, fmt, str::FromStr};
use tracing::debug;

/// A measure as delivered by CBS. `None` covers both `null` and an absent field.
pub type Figure = Option<Number>;

/// One row of the `TypedDataSet` payload.
///
/// Only the period, the airport and the projected measures are kept; every
/// other column of the source row is ignored on decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct RawRecord {
    pub periods: String,
    pub airports: String,
    figures: BTreeMap<&'static str, Figure>,
}

impl RawRecord {
    /// Value of a projected source column.
    pub fn figure(&self, field: &str) -> Figure {
        self.figures.get(field).cloned().flatten()
    }

    /// Leading `YYYY` of the period code.
    pub fn year(&self) -> &str {
        self.periods.get(..4).unwrap_or(&self.periods)
    }
}

impl TryFrom<Map<String, Value>> for RawRecord {
    type Error = ReshapeError;

    fn try_from(row: Map<String, Value>) -> Result<Self, Self::Error> {
        let periods = required_str(&row, "Periods")?;
        let airports = required_str(&row, "Airports")?;

        let mut figures = BTreeMap::new();
        for field in projection::source_fields() {
            figures.insert(field, parse_figure(field, row.get(field)));
        }

        Ok(RawRecord {
            periods,
            airports,
            figures,
        })
    }
}

fn required_str(row: &Map<String, Value>, key: &str) -> Result<String, ReshapeError> {
    match row.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ReshapeError::MalformedRecord(format!(
            "{} is not a string: {}",
            key, other
        ))),
        None => Err(ReshapeError::MalformedRecord(format!("missing {}", key))),
    }
}

/// Numbers pass through untouched and numeric strings (CBS pads them) are
/// parsed. Anything else, `null`, blanks, `.` or other source markers, is "no value".
pub fn parse_figure(field: &str, value: Option<&Value>) -> Figure {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.clone()),
        Some(Value::String(s)) => {
            let t = s.trim();
            if t.is_empty() || t == "." {
                return None;
            }
            let parsed = parse_number(t);
            if parsed.is_none() {
                debug!(field, value = %s, "non-numeric figure read as missing");
            }
            parsed
        }
        Some(other) => {
            debug!(field, value = %other, "non-numeric figure read as missing");
            None
        }
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(i.into());
    }
    if let Ok(u) = s.parse::<u64>() {
        return Some(u.into());
    }
    s.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Flights between the Netherlands and abroad vs. flights within the country.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalRecord {
    pub year: String,
    pub cross_country_flights: Figure,
    pub local_flights: Figure,
}

impl LocalRecord {
    pub fn get(&self, metric: LocalMetric) -> &Figure {
        match metric {
            LocalMetric::CrossCountryFlights => &self.cross_country_flights,
            LocalMetric::LocalFlights => &self.local_flights,
        }
    }

    pub fn slot(&mut self, metric: LocalMetric) -> &mut Figure {
        match metric {
            LocalMetric::CrossCountryFlights => &mut self.cross_country_flights,
            LocalMetric::LocalFlights => &mut self.local_flights,
        }
    }
}

/// Passenger totals with the continent breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorldRecord {
    pub year: String,
    pub total_passengers: Figure,
    pub europe: Figure,
    pub africa: Figure,
    pub america: Figure,
    pub asia: Figure,
    pub oceania: Figure,
}

impl WorldRecord {
    pub fn get(&self, metric: WorldMetric) -> &Figure {
        match metric {
            WorldMetric::TotalPassengers => &self.total_passengers,
            WorldMetric::Europe => &self.europe,
            WorldMetric::Africa => &self.africa,
            WorldMetric::America => &self.america,
            WorldMetric::Asia => &self.asia,
            WorldMetric::Oceania => &self.oceania,
        }
    }

    pub fn slot(&mut self, metric: WorldMetric) -> &mut Figure {
        match metric {
            WorldMetric::TotalPassengers => &mut self.total_passengers,
            WorldMetric::Europe => &mut self.europe,
            WorldMetric::Africa => &mut self.africa,
            WorldMetric::America => &mut self.america,
            WorldMetric::Asia => &mut self.asia,
            WorldMetric::Oceania => &mut self.oceania,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalMetric {
    CrossCountryFlights,
    LocalFlights,
}

impl LocalMetric {
    /// Button text in the local menu.
    pub fn label(&self) -> &'static str {
        match self {
            LocalMetric::CrossCountryFlights => "Cross-Country",
            LocalMetric::LocalFlights => "Local",
        }
    }
}

impl FromStr for LocalMetric {
    type Err = ReshapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cross-country" | "crosscountryflights" => Ok(LocalMetric::CrossCountryFlights),
            "local" | "localflights" => Ok(LocalMetric::LocalFlights),
            _ => Err(ReshapeError::UnknownLabel(s.trim().to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldMetric {
    TotalPassengers,
    Europe,
    Africa,
    America,
    Asia,
    Oceania,
}

impl WorldMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorldMetric::TotalPassengers => "TotalPassengers",
            WorldMetric::Europe => "Europe",
            WorldMetric::Africa => "Africa",
            WorldMetric::America => "America",
            WorldMetric::Asia => "Asia",
            WorldMetric::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for WorldMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorldMetric {
    type Err = ReshapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "totalpassengers" | "passengers" => Ok(WorldMetric::TotalPassengers),
            "europe" => Ok(WorldMetric::Europe),
            "africa" => Ok(WorldMetric::Africa),
            "america" => Ok(WorldMetric::America),
            "asia" => Ok(WorldMetric::Asia),
            "oceania" => Ok(WorldMetric::Oceania),
            _ => Err(ReshapeError::UnknownLabel(s.trim().to_string())),
        }
    }
}
