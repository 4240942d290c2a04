pub mod analysis;
pub mod error;
pub mod ingest;
pub mod model;
pub mod render;
pub mod report;
pub mod session;
pub mod stats;
pub mod xlsx;

pub use error::{ReportError, Result};
pub use model::*;
pub use report::{Report, ReportConfig, SectionData, SectionKind};
pub use session::Session;
