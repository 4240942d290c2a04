//! Fouls committed vs. suffered for one team

use crate::error::{ReportError, Result};
use crate::model::{perspective, Dataset};
use crate::report::SectionKind;
use crate::stats::mean;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamFoulsProfile {
    pub team: String,
    pub matches: usize,
    pub fouls_committed: f64,
    pub fouls_suffered: f64,
}

impl TeamFoulsProfile {
    /// Labelled averages, committed first
    pub fn rows(&self) -> [(&'static str, f64); 2] {
        [
            ("Fouls Committed", self.fouls_committed),
            ("Fouls Suffered", self.fouls_suffered),
        ]
    }
}

/// Average fouls committed by `team` and by its opponents, over the team's
/// matches with both foul counts recorded.
pub fn team_fouls_profile(dataset: &Dataset, team: &str) -> Result<TeamFoulsProfile> {
    let mut committed = Vec::new();
    let mut suffered = Vec::new();

    for record in dataset {
        let fouls = match perspective(record, team, |r| (r.home_fouls, r.away_fouls)).and_then(|p| p.both()) {
            Some(fouls) => fouls,
            None => continue,
        };
        committed.push(f64::from(fouls.own));
        suffered.push(f64::from(fouls.opponent));
    }

    log::debug!("Fouls profile for {}: {} qualifying matches", team, committed.len());

    match (mean(&committed), mean(&suffered)) {
        (Some(fouls_committed), Some(fouls_suffered)) => Ok(TeamFoulsProfile {
            team: team.to_string(),
            matches: committed.len(),
            fouls_committed,
            fouls_suffered,
        }),
        _ => Err(ReportError::empty(
            SectionKind::TeamFouls,
            format!("no matches with foul counts for {}", team),
        )),
    }
}
