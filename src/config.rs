// src/config.rs

use crate::fetch::DEFAULT_DATASET_URL;
use crate::schema::{City, LocalMetric};
use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use url::Url;

/// Runtime settings for the binaries, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `CBS_DATASET_URL`
    pub dataset_url: Url,
    /// `CBS_PAYLOAD_PATH`: read a saved response instead of fetching.
    pub payload_path: Option<PathBuf>,
    /// `CBS_CITY` + `CBS_METRIC`: also print this chart.
    pub chart: Option<(City, LocalMetric)>,
    /// `LOG_LEVEL`, used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = get("CBS_DATASET_URL").unwrap_or_else(|| DEFAULT_DATASET_URL.to_string());
        let dataset_url =
            Url::parse(&raw_url).with_context(|| format!("parsing CBS_DATASET_URL {}", raw_url))?;

        let chart = match get("CBS_CITY") {
            Some(city) => {
                let city: City = city.parse().context("parsing CBS_CITY")?;
                let metric: LocalMetric = get("CBS_METRIC")
                    .as_deref()
                    .unwrap_or("Cross-Country")
                    .parse()
                    .context("parsing CBS_METRIC")?;
                Some((city, metric))
            }
            None => None,
        };

        Ok(Config {
            dataset_url,
            payload_path: get("CBS_PAYLOAD_PATH").map(PathBuf::from),
            chart,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.dataset_url.as_str(), DEFAULT_DATASET_URL);
        assert_eq!(cfg.payload_path, None);
        assert_eq!(cfg.chart, None);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("CBS_DATASET_URL", "http://localhost:8080/TypedDataSet"),
            ("CBS_PAYLOAD_PATH", "payload.json"),
            ("CBS_CITY", "groningen"),
            ("CBS_METRIC", "Local"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(cfg.dataset_url.host_str(), Some("localhost"));
        assert_eq!(cfg.payload_path, Some(PathBuf::from("payload.json")));
        assert_eq!(cfg.chart, Some((City::Groningen, LocalMetric::LocalFlights)));
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn test_metric_defaults_to_cross_country() {
        let cfg = Config::from_lookup(lookup(&[("CBS_CITY", "Amsterdam"), ("CBS_METRIC", " ")]))
            .unwrap();
        assert_eq!(
            cfg.chart,
            Some((City::Amsterdam, LocalMetric::CrossCountryFlights))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_lookup(lookup(&[("CBS_DATASET_URL", "not a url")])).is_err());
        assert!(Config::from_lookup(lookup(&[("CBS_CITY", "Utrecht")])).is_err());
        assert!(
            Config::from_lookup(lookup(&[("CBS_CITY", "Amsterdam"), ("CBS_METRIC", "Freight")]))
                .is_err()
        );
    }
}
