// src/schema/projection.rs

use crate::schema::types::{LocalMetric, WorldMetric};

/// Source column → local field. Order is the output field order.
pub const LOCAL_PROJECTION: &[(&str, LocalMetric)] = &[
    ("CrossCountryFlights_1", LocalMetric::CrossCountryFlights),
    ("LocalFlights_2", LocalMetric::LocalFlights),
];

/// Source column → world field.
pub const WORLD_PROJECTION: &[(&str, WorldMetric)] = &[
    ("TotalPassengers_12", WorldMetric::TotalPassengers),
    ("EuropeTotal_22", WorldMetric::Europe),
    ("Africa_26", WorldMetric::Africa),
    ("America_32", WorldMetric::America),
    ("Asia_36", WorldMetric::Asia),
    ("Oceania_40", WorldMetric::Oceania),
];

/// Every source column read by either projection.
pub fn source_fields() -> impl Iterator<Item = &'static str> {
    LOCAL_PROJECTION
        .iter()
        .map(|(src, _)| *src)
        .chain(WORLD_PROJECTION.iter().map(|(src, _)| *src))
}
