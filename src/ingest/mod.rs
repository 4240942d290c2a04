pub mod columns;
pub mod reader;

pub use columns::{normalize_column, recognised_fields};
pub use reader::{parse_day_first, read_matches, read_matches_file};
