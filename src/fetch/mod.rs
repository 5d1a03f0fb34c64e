// src/fetch/mod.rs

pub mod odata;

pub use odata::{fetch_payload, load_payload, unwrap_envelope, DEFAULT_DATASET_URL};
