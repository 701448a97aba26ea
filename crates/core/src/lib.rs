pub mod facts;
pub mod record;
pub mod report;
pub mod types;
pub mod verdict;

pub use facts::ParcelFacts;
pub use record::{ParcelRecord, lot_area};
pub use report::{LotMetrics, ParcelReport, RiskFlag, ZoningInfo};
pub use types::ParcelId;
pub use verdict::{BuildabilityChecks, BuildabilityVerdict};
