//! The five report sections, computed together from one dataset

use crate::analysis::{
    head_to_head_outcome, referee_bias_comparison, referee_card_summary, shot_goal_correlation,
    team_fouls_profile, HeadToHeadOutcome, RefereeBiasComparison, RefereeCardSummary,
    ShotGoalCorrelation, TeamFoulsProfile, BIG_SIX, DEFAULT_MIN_MATCHES,
};
use crate::error::{ReportError, Result};
use crate::model::Dataset;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    RefereeDiscipline,
    ShotGoalCorrelation,
    TeamFouls,
    RefereeBias,
    HeadToHead,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::RefereeDiscipline,
        SectionKind::ShotGoalCorrelation,
        SectionKind::TeamFouls,
        SectionKind::RefereeBias,
        SectionKind::HeadToHead,
    ];

    /// Worksheet name for the section
    pub fn sheet_name(&self) -> &'static str {
        match self {
            SectionKind::RefereeDiscipline => "Referees",
            SectionKind::ShotGoalCorrelation => "ShotsGoals",
            SectionKind::TeamFouls => "Fouls",
            SectionKind::RefereeBias => "RefereeBias",
            SectionKind::HeadToHead => "HeadToHead",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::RefereeDiscipline => write!(f, "referee discipline"),
            SectionKind::ShotGoalCorrelation => write!(f, "shots vs goals"),
            SectionKind::TeamFouls => write!(f, "team fouls"),
            SectionKind::RefereeBias => write!(f, "referee bias"),
            SectionKind::HeadToHead => write!(f, "head to head"),
        }
    }
}

/// Section contents, or the reason there are none
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData<T> {
    Ready(T),
    NoData { reason: String },
}

impl<T> SectionData<T> {
    /// Turn an empty-result error into `NoData`; other errors pass through
    fn from_result(result: Result<T>) -> Result<Self> {
        match result {
            Ok(data) => Ok(SectionData::Ready(data)),
            Err(ReportError::EmptyResult { section, reason }) => {
                log::info!("No data for {}: {}", section, reason);
                Ok(SectionData::NoData { reason })
            }
            Err(e) => Err(e),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            SectionData::Ready(data) => Some(data),
            SectionData::NoData { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SectionData::Ready(_))
    }
}

/// Who and what the parameterized sections look at
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Team for the fouls profile and head-to-head sections
    pub team: String,
    /// Opponents for the head-to-head section
    pub rivals: Vec<String>,
    /// Referee for the bias comparison
    pub referee: String,
    /// Reference team for the bias comparison
    pub bias_team: String,
    /// Matches a referee needs to appear in the discipline table
    pub min_referee_matches: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            team: "Arsenal".to_string(),
            rivals: BIG_SIX.iter().map(|s| s.to_string()).collect(),
            referee: "D Coote".to_string(),
            bias_team: "Liverpool".to_string(),
            min_referee_matches: DEFAULT_MIN_MATCHES,
        }
    }
}

/// All report sections for one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub config: ReportConfig,
    pub matches: usize,
    pub referee_cards: SectionData<RefereeCardSummary>,
    pub shot_goals: SectionData<ShotGoalCorrelation>,
    pub team_fouls: SectionData<TeamFoulsProfile>,
    pub referee_bias: SectionData<RefereeBiasComparison>,
    pub head_to_head: SectionData<HeadToHeadOutcome>,
}

impl Report {
    /// Compute every section. Sections with nothing to show become
    /// `SectionData::NoData`.
    pub fn build(dataset: &Dataset, config: &ReportConfig) -> Result<Report> {
        Ok(Report {
            config: config.clone(),
            matches: dataset.len(),
            referee_cards: SectionData::from_result(referee_card_summary(dataset, config.min_referee_matches))?,
            shot_goals: SectionData::from_result(shot_goal_correlation(dataset))?,
            team_fouls: SectionData::from_result(team_fouls_profile(dataset, &config.team))?,
            referee_bias: SectionData::from_result(referee_bias_comparison(
                dataset,
                &config.referee,
                &config.bias_team,
            ))?,
            head_to_head: SectionData::from_result(head_to_head_outcome(dataset, &config.team, &config.rivals))?,
        })
    }

    /// Sections that produced data
    pub fn ready_sections(&self) -> Vec<SectionKind> {
        let ready = [
            self.referee_cards.is_ready(),
            self.shot_goals.is_ready(),
            self.team_fouls.is_ready(),
            self.referee_bias.is_ready(),
            self.head_to_head.is_ready(),
        ];
        SectionKind::ALL
            .iter()
            .zip(ready)
            .filter(|(_, ready)| *ready)
            .map(|(kind, _)| *kind)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::read_matches;

    const THREE_ROWS: &str = "\
Date,HomeTeam,AwayTeam,FTHG,FTAG,FTR,Referee,HS,AS,HF,AF,HY,AY,HR,AR
12/08/2023,Arsenal,Nott'm Forest,2,1,H,M Oliver,15,6,12,12,2,2,0,0
20/08/2023,Chelsea,Arsenal,1,1,D,M Oliver,10,9,11,14,3,1,0,1
26/08/2023,Fulham,Brentford,0,3,A,D Coote,8,14,9,7,1,2,0,0
";

    #[test]
    fn test_small_dataset_has_no_eligible_referees() {
        let dataset = read_matches(THREE_ROWS).unwrap();
        let report = Report::build(&dataset, &ReportConfig::default()).unwrap();

        assert_eq!(report.matches, 3);
        assert!(matches!(report.referee_cards, SectionData::NoData { .. }));
        assert!(report.shot_goals.is_ready());
    }

    #[test]
    fn test_sections_from_default_config() {
        let dataset = read_matches(THREE_ROWS).unwrap();
        let report = Report::build(&dataset, &ReportConfig::default()).unwrap();

        let fouls = report.team_fouls.ready().unwrap();
        assert_eq!(fouls.matches, 2);
        assert_eq!(fouls.fouls_committed, 13.0);
        assert_eq!(fouls.fouls_suffered, 11.5);

        let h2h = report.head_to_head.ready().unwrap();
        assert_eq!(h2h.matches, 1);

        let bias = report.referee_bias.ready().unwrap();
        assert_eq!(bias.team_matches, 0);
        assert_eq!(bias.other_matches, 1);

        assert_eq!(
            report.ready_sections(),
            vec![
                SectionKind::ShotGoalCorrelation,
                SectionKind::TeamFouls,
                SectionKind::RefereeBias,
                SectionKind::HeadToHead,
            ]
        );
    }

    #[test]
    fn test_lower_threshold_lists_referee() {
        let dataset = read_matches(THREE_ROWS).unwrap();
        let config = ReportConfig {
            min_referee_matches: 2,
            ..ReportConfig::default()
        };
        let report = Report::build(&dataset, &config).unwrap();
        let cards = report.referee_cards.ready().unwrap();
        assert_eq!(cards.rows.len(), 1);
        assert_eq!(cards.rows[0].referee, "M Oliver");
        assert_eq!(cards.rows[0].avg_total_yellow, 4.0);
        assert_eq!(cards.rows[0].avg_total_red, 0.5);
    }

    #[test]
    fn test_unknown_names_give_no_data() {
        let dataset = read_matches(THREE_ROWS).unwrap();
        let config = ReportConfig {
            team: "Sunderland".to_string(),
            referee: "Nobody".to_string(),
            ..ReportConfig::default()
        };
        let report = Report::build(&dataset, &config).unwrap();
        assert!(!report.team_fouls.is_ready());
        assert!(!report.referee_bias.is_ready());
        assert!(!report.head_to_head.is_ready());
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.team, "Arsenal");
        assert_eq!(config.referee, "D Coote");
        assert_eq!(config.bias_team, "Liverpool");
        assert_eq!(config.min_referee_matches, 50);
        assert_eq!(config.rivals.len(), 5);
    }
}
