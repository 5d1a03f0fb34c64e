pub mod catalog;
pub mod period;
pub mod projection;
pub mod types;

pub use catalog::{City, ElementRef, Region, CATALOG, REGIONS};
pub use period::{PeriodCode, PeriodKind};
pub use projection::{LOCAL_PROJECTION, WORLD_PROJECTION};
pub use types::{Figure, LocalMetric, LocalRecord, RawRecord, WorldMetric, WorldRecord};
