pub mod chart;
pub mod config;
pub mod error;
pub mod fetch;
pub mod process;
pub mod schema;
pub mod state;

pub use error::ReshapeError;
pub use process::{reshape, ReshapedDataset, YearWindow};
