use crate::error::Result;
use crate::ingest::{read_matches, read_matches_file};
use crate::model::Dataset;
use crate::report::{Report, ReportConfig};
use std::path::Path;

/// Holds the currently loaded dataset. Each load replaces it wholesale.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `content` and make it the current dataset. A failed parse
    /// leaves the session empty.
    pub fn load(&mut self, content: &str) -> Result<&Dataset> {
        self.clear();
        let dataset = read_matches(content)?;
        Ok(self.dataset.insert(dataset))
    }

    /// As `load`, reading the text from a file
    pub fn load_file(&mut self, path: &Path) -> Result<&Dataset> {
        self.clear();
        let dataset = read_matches_file(path)?;
        Ok(self.dataset.insert(dataset))
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn clear(&mut self) {
        self.dataset = None;
    }

    /// Build the report for the current dataset, `None` if nothing is loaded
    pub fn report(&self, config: &ReportConfig) -> Option<Result<Report>> {
        self.dataset
            .as_ref()
            .map(|dataset| Report::build(dataset, config))
    }
}
