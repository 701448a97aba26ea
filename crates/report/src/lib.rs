pub mod assembler;
pub mod builder;
pub mod error;
pub mod metrics;

pub use assembler::ReportAssembler;
pub use builder::ReportAssemblerBuilder;
pub use error::ReportError;
pub use metrics::{MetricsSnapshot, ReportMetrics};
