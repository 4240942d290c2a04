//! Correlation between shots and goals

use crate::error::{ReportError, Result};
use crate::model::Dataset;
use crate::report::SectionKind;
use crate::stats::{pearson, round_to, LinearFit};

/// Paired shots/goals values with their correlation and trend line
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSeries {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Pearson coefficient, `None` when undefined
    pub coefficient: Option<f64>,
    pub trend: Option<LinearFit>,
}

impl PairedSeries {
    fn new(title: &'static str, x_label: &'static str, y_label: &'static str, x: Vec<f64>, y: Vec<f64>) -> Self {
        let coefficient = pearson(&x, &y);
        let trend = LinearFit::ols(&x, &y);
        Self {
            title,
            x_label,
            y_label,
            x,
            y,
            coefficient,
            trend,
        }
    }

    /// Coefficient rounded to two decimals for display
    pub fn rounded(&self) -> Option<f64> {
        self.coefficient.map(|r| round_to(r, 2))
    }

    pub(crate) fn len(&self) -> usize {
        self.x.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShotGoalCorrelation {
    pub matches: usize,
    pub home: PairedSeries,
    pub away: PairedSeries,
    pub total: PairedSeries,
}

impl ShotGoalCorrelation {
    pub fn series(&self) -> [&PairedSeries; 3] {
        [&self.home, &self.away, &self.total]
    }
}

/// Correlate shots with goals for home sides, away sides and match totals,
/// over matches where both shot counts and both goal counts are recorded.
pub fn shot_goal_correlation(dataset: &Dataset) -> Result<ShotGoalCorrelation> {
    let mut home_shots = Vec::new();
    let mut home_goals = Vec::new();
    let mut away_shots = Vec::new();
    let mut away_goals = Vec::new();
    let mut total_shots = Vec::new();
    let mut total_goals = Vec::new();

    for record in dataset {
        let (hs, as_, hg, ag) = match (record.home_shots, record.away_shots, record.home_goals, record.away_goals) {
            (Some(hs), Some(as_), Some(hg), Some(ag)) => (f64::from(hs), f64::from(as_), f64::from(hg), f64::from(ag)),
            _ => continue,
        };
        home_shots.push(hs);
        home_goals.push(hg);
        away_shots.push(as_);
        away_goals.push(ag);
        total_shots.push(hs + as_);
        total_goals.push(hg + ag);
    }

    let matches = home_shots.len();
    log::debug!(
        "Shots vs goals: {} qualifying matches, {} excluded",
        matches,
        dataset.len() - matches
    );

    if matches == 0 {
        return Err(ReportError::empty(
            SectionKind::ShotGoalCorrelation,
            "no match has both shot counts and a full-time score",
        ));
    }

    Ok(ShotGoalCorrelation {
        matches,
        home: PairedSeries::new("Home Shots vs Home Goals", "Home Shots", "Home Goals", home_shots, home_goals),
        away: PairedSeries::new("Away Shots vs Away Goals", "Away Shots", "Away Goals", away_shots, away_goals),
        total: PairedSeries::new("Total Shots vs Total Goals", "Total Shots", "Total Goals", total_shots, total_goals),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MatchRecord;
    use chrono::NaiveDate;

    fn record(shots: (u32, u32), score: (u32, u32)) -> MatchRecord {
        MatchRecord::new(NaiveDate::from_ymd_opt(2023, 3, 4).unwrap(), "Leeds", "Wolves")
            .with_shots(shots.0, shots.1)
            .with_score(score.0, score.1)
    }

    #[test]
    fn test_perfect_linear_series() {
        let dataset = Dataset::new(vec![
            record((10, 4), (5, 2)),
            record((6, 8), (3, 4)),
            record((2, 12), (1, 6)),
            record((14, 2), (7, 1)),
        ]);

        let corr = shot_goal_correlation(&dataset).unwrap();
        assert_eq!(corr.matches, 4);
        assert_eq!(corr.home.rounded(), Some(1.0));
        assert_eq!(corr.away.rounded(), Some(1.0));

        let fit = corr.home.trend.unwrap();
        assert!((fit.slope - 0.5).abs() < 1e-12);
        assert!(fit.intercept.abs() < 1e-12);
    }

    #[test]
    fn test_totals_are_derived() {
        let dataset = Dataset::new(vec![record((10, 4), (2, 1)), record((3, 5), (0, 0))]);
        let corr = shot_goal_correlation(&dataset).unwrap();
        assert_eq!(corr.total.x, vec![14.0, 8.0]);
        assert_eq!(corr.total.y, vec![3.0, 0.0]);
    }

    #[test]
    fn test_coefficients_in_range() {
        let dataset = Dataset::new(vec![
            record((12, 9), (1, 1)),
            record((18, 5), (3, 0)),
            record((7, 11), (0, 2)),
            record((15, 15), (2, 1)),
            record((9, 3), (2, 0)),
        ]);
        let corr = shot_goal_correlation(&dataset).unwrap();
        for series in corr.series() {
            let r = series.coefficient.unwrap();
            assert!((-1.0..=1.0).contains(&r), "{} out of range: {}", series.title, r);
        }
    }

    #[test]
    fn test_single_row_is_undefined() {
        let dataset = Dataset::new(vec![record((10, 4), (2, 1))]);
        let corr = shot_goal_correlation(&dataset).unwrap();
        assert_eq!(corr.home.coefficient, None);
        assert_eq!(corr.home.trend, None);
        assert_eq!(corr.home.len(), 1);
    }

    #[test]
    fn test_zero_variance_is_undefined() {
        let dataset = Dataset::new(vec![record((10, 4), (1, 2)), record((10, 6), (1, 0))]);
        let corr = shot_goal_correlation(&dataset).unwrap();
        assert_eq!(corr.home.coefficient, None);
        assert!(corr.away.coefficient.is_some());
    }

    #[test]
    fn test_incomplete_rows_excluded() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 4).unwrap();
        let dataset = Dataset::new(vec![
            record((10, 4), (2, 1)),
            MatchRecord::new(date, "Leeds", "Wolves").with_score(1, 0),
            MatchRecord::new(date, "Leeds", "Wolves").with_shots(5, 5),
        ]);
        let corr = shot_goal_correlation(&dataset).unwrap();
        assert_eq!(corr.matches, 1);
    }

    #[test]
    fn test_no_qualifying_rows() {
        let dataset = Dataset::default();
        assert!(matches!(
            shot_goal_correlation(&dataset),
            Err(ReportError::EmptyResult { section: SectionKind::ShotGoalCorrelation, .. })
        ));
    }
}
