pub mod engine;
pub mod notes;

pub use engine::{MIN_FRONTAGE_METERS, PERMITTED_ZONING_CODE, evaluate};
pub use notes::MISSING_ZONING_LABEL;
