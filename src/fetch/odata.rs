// src/fetch/odata.rs

use crate::error::ReshapeError;
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, instrument};
use url::Url;

/// Airport traffic statistics, typed dataset of CBS table 37478eng.
pub const DEFAULT_DATASET_URL: &str =
    "https://opendata.cbs.nl/ODataApi/odata/37478eng/TypedDataSet";

/// Pull the record array out of an OData response body.
///
/// A bare array is accepted as-is so saved payloads may be stored either way.
pub fn unwrap_envelope(body: Value) -> std::result::Result<Value, ReshapeError> {
    match body {
        Value::Array(_) => Ok(body),
        Value::Object(mut map) => {
            if let Some(meta) = map.get("odata.metadata").and_then(Value::as_str) {
                debug!(metadata = meta, "odata envelope");
            }
            map.remove("value")
                .ok_or_else(|| ReshapeError::DataShape("response has no `value` member".into()))
        }
        _ => Err(ReshapeError::DataShape(
            "response body is neither an object nor an array".into(),
        )),
    }
}

/// GET the dataset once and return its raw `value` payload.
#[instrument(level = "info", skip(client, url), fields(url = %url))]
pub async fn fetch_payload(client: &Client, url: &Url) -> Result<Value> {
    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?;

    let body: Value = resp
        .json()
        .await
        .with_context(|| format!("decoding JSON from {}", url))?;

    let payload = unwrap_envelope(body)?;
    info!(
        rows = payload.as_array().map_or(0, Vec::len),
        "fetched dataset"
    );
    Ok(payload)
}

/// Read a response body saved from an earlier fetch.
pub fn load_payload(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading payload {}", path.display()))?;
    let body: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing JSON in {}", path.display()))?;
    Ok(unwrap_envelope(body)?)
}
