pub mod dataset;
pub mod perspective;
pub mod record;

pub use dataset::Dataset;
pub use perspective::{perspective, MatchOutcome, Perspective, Side};
pub use record::{FullTimeResult, MatchRecord};
