pub mod text;

pub use text::{write_dataset_info, write_prompt, write_report};
