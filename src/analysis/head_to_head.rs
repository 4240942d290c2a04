//! Results of one team against a group of rivals

use crate::error::{ReportError, Result};
use crate::model::{Dataset, MatchOutcome};
use crate::report::SectionKind;
use std::collections::HashMap;

/// The rival group used when none is given
pub const BIG_SIX: [&str; 5] = [
    "Chelsea",
    "Liverpool",
    "Manchester City",
    "Manchester United",
    "Tottenham Hotspur",
];

#[derive(Debug, Clone, PartialEq)]
pub struct HeadToHeadOutcome {
    pub team: String,
    pub opponents: Vec<String>,
    pub matches: usize,
    /// Outcome counts, most frequent first. Outcomes that never happened
    /// are left out.
    pub distribution: Vec<(MatchOutcome, usize)>,
}

impl HeadToHeadOutcome {
    pub fn count(&self, outcome: MatchOutcome) -> usize {
        self.distribution
            .iter()
            .find(|(o, _)| *o == outcome)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Share of matches with the given outcome, 0-1
    pub fn share(&self, outcome: MatchOutcome) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.count(outcome) as f64 / self.matches as f64
        }
    }
}

/// Count wins, draws and losses for `team` in matches against any of
/// `opponents` that have a recorded result.
pub fn head_to_head_outcome(dataset: &Dataset, team: &str, opponents: &[String]) -> Result<HeadToHeadOutcome> {
    let mut counts: HashMap<MatchOutcome, usize> = HashMap::new();
    let mut matches = 0usize;

    for record in dataset {
        let side = match record.side_of(team) {
            Some(side) => side,
            None => continue,
        };
        let opponent = record.team(side.opposite());
        if !opponents.iter().any(|o| o == opponent) {
            continue;
        }
        let result = match record.full_time_result {
            Some(result) => result,
            None => continue,
        };

        *counts.entry(MatchOutcome::resolve(result, side)).or_default() += 1;
        matches += 1;
    }

    log::debug!("Head to head for {}: {} matches", team, matches);

    if matches == 0 {
        return Err(ReportError::empty(
            SectionKind::HeadToHead,
            format!("{} has no recorded results against {}", team, opponents.join(", ")),
        ));
    }

    let mut distribution: Vec<(MatchOutcome, usize)> = MatchOutcome::ALL
        .iter()
        .filter_map(|o| counts.get(o).map(|n| (*o, *n)))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(HeadToHeadOutcome {
        team: team.to_string(),
        opponents: opponents.to_vec(),
        matches,
        distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FullTimeResult, MatchRecord};
    use chrono::NaiveDate;

    fn game(home: &str, away: &str, result: FullTimeResult) -> MatchRecord {
        MatchRecord::new(NaiveDate::from_ymd_opt(2023, 4, 9).unwrap(), home, away).with_result(result)
    }

    fn big_six() -> Vec<String> {
        BIG_SIX.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_outcomes_by_side() {
        let dataset = Dataset::new(vec![
            game("Arsenal", "Chelsea", FullTimeResult::HomeWin),
            game("Liverpool", "Arsenal", FullTimeResult::HomeWin),
            game("Manchester City", "Arsenal", FullTimeResult::Draw),
            game("Arsenal", "Tottenham Hotspur", FullTimeResult::Draw),
            game("Manchester United", "Arsenal", FullTimeResult::AwayWin),
            game("Arsenal", "Fulham", FullTimeResult::AwayWin),
            game("Chelsea", "Liverpool", FullTimeResult::HomeWin),
        ]);

        let h2h = head_to_head_outcome(&dataset, "Arsenal", &big_six()).unwrap();
        assert_eq!(h2h.matches, 5);
        assert_eq!(h2h.count(MatchOutcome::Win), 2);
        assert_eq!(h2h.count(MatchOutcome::Draw), 2);
        assert_eq!(h2h.count(MatchOutcome::Loss), 1);
        assert_eq!(h2h.distribution[2], (MatchOutcome::Loss, 1));
        assert_eq!(h2h.share(MatchOutcome::Loss), 0.2);
    }

    #[test]
    fn test_home_win_as_away_side_is_loss() {
        let dataset = Dataset::new(vec![game("Chelsea", "Arsenal", FullTimeResult::HomeWin)]);
        let h2h = head_to_head_outcome(&dataset, "Arsenal", &big_six()).unwrap();
        assert_eq!(h2h.distribution, vec![(MatchOutcome::Loss, 1)]);
    }

    #[test]
    fn test_distribution_order() {
        let dataset = Dataset::new(vec![
            game("Arsenal", "Chelsea", FullTimeResult::AwayWin),
            game("Liverpool", "Arsenal", FullTimeResult::HomeWin),
            game("Arsenal", "Liverpool", FullTimeResult::Draw),
        ]);
        let h2h = head_to_head_outcome(&dataset, "Arsenal", &big_six()).unwrap();
        assert_eq!(
            h2h.distribution,
            vec![(MatchOutcome::Loss, 2), (MatchOutcome::Draw, 1)]
        );
        assert_eq!(h2h.count(MatchOutcome::Win), 0);
    }

    #[test]
    fn test_missing_result_excluded() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 9).unwrap();
        let dataset = Dataset::new(vec![
            MatchRecord::new(date, "Arsenal", "Chelsea"),
            game("Arsenal", "Chelsea", FullTimeResult::HomeWin),
        ]);
        let h2h = head_to_head_outcome(&dataset, "Arsenal", &big_six()).unwrap();
        assert_eq!(h2h.matches, 1);
    }

    #[test]
    fn test_no_matches_against_rivals() {
        let dataset = Dataset::new(vec![game("Arsenal", "Fulham", FullTimeResult::HomeWin)]);
        assert!(matches!(
            head_to_head_outcome(&dataset, "Arsenal", &big_six()),
            Err(ReportError::EmptyResult { section: SectionKind::HeadToHead, .. })
        ));
    }
}
