//! Referee discipline: average cards per match for experienced referees

use crate::error::{ReportError, Result};
use crate::model::Dataset;
use crate::report::SectionKind;
use std::collections::BTreeMap;

/// Minimum number of qualifying matches for a referee to be listed
pub const DEFAULT_MIN_MATCHES: usize = 50;

/// Card averages for one referee
#[derive(Debug, Clone, PartialEq)]
pub struct RefereeCardRow {
    pub referee: String,
    pub matches: usize,
    pub avg_total_yellow: f64,
    pub avg_total_red: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefereeCardSummary {
    pub min_matches: usize,
    /// One row per eligible referee, in name order
    pub rows: Vec<RefereeCardRow>,
}

impl RefereeCardSummary {
    /// Rows sorted by average yellow cards, highest first
    pub fn by_yellow(&self) -> Vec<&RefereeCardRow> {
        let mut rows: Vec<&RefereeCardRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.avg_total_yellow.total_cmp(&a.avg_total_yellow));
        rows
    }

    /// Rows sorted by average red cards, highest first
    pub fn by_red(&self) -> Vec<&RefereeCardRow> {
        let mut rows: Vec<&RefereeCardRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.avg_total_red.total_cmp(&a.avg_total_red));
        rows
    }
}

#[derive(Debug, Default)]
struct CardTotals {
    matches: usize,
    yellow: u64,
    red: u64,
}

/// Average total yellow and red cards per match for each referee with at
/// least `min_matches` matches where the referee and all four card counts
/// are recorded.
pub fn referee_card_summary(dataset: &Dataset, min_matches: usize) -> Result<RefereeCardSummary> {
    let mut totals: BTreeMap<&str, CardTotals> = BTreeMap::new();
    let mut excluded = 0usize;

    for record in dataset {
        let qualifying = (
            record.referee.as_deref(),
            record.home_yellow,
            record.away_yellow,
            record.home_red,
            record.away_red,
        );
        let (referee, hy, ay, hr, ar) = match qualifying {
            (Some(referee), Some(hy), Some(ay), Some(hr), Some(ar)) => (referee, hy, ay, hr, ar),
            _ => {
                excluded += 1;
                continue;
            }
        };

        let entry = totals.entry(referee).or_default();
        entry.matches += 1;
        entry.yellow += u64::from(hy) + u64::from(ay);
        entry.red += u64::from(hr) + u64::from(ar);
    }

    log::debug!(
        "Referee cards: {} referees, {} rows without referee or card counts",
        totals.len(),
        excluded
    );

    let rows: Vec<RefereeCardRow> = totals
        .into_iter()
        .filter(|(_, t)| t.matches >= min_matches)
        .map(|(referee, t)| RefereeCardRow {
            referee: referee.to_string(),
            matches: t.matches,
            avg_total_yellow: t.yellow as f64 / t.matches as f64,
            avg_total_red: t.red as f64 / t.matches as f64,
        })
        .collect();

    if rows.is_empty() {
        return Err(ReportError::empty(
            SectionKind::RefereeDiscipline,
            format!("no referee has {} or more matches with card data", min_matches),
        ));
    }

    Ok(RefereeCardSummary { min_matches, rows })
}
