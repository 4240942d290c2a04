//! Referee bias: how one referee treats a team compared with everyone else

use crate::error::{ReportError, Result};
use crate::model::{perspective, Dataset, MatchRecord};
use crate::report::SectionKind;
use crate::stats::mean_present;

#[derive(Debug, Clone, PartialEq)]
pub struct BiasMetric {
    pub label: String,
    /// `None` when no match supplied a value
    pub value: Option<f64>,
}

impl BiasMetric {
    fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefereeBiasComparison {
    pub referee: String,
    pub team: String,
    /// Matches the referee took charge of involving the team
    pub team_matches: usize,
    /// All other matches the referee took charge of
    pub other_matches: usize,
    /// Yellows on team, yellows on opponent, average yellows in other
    /// matches, then the same three for fouls
    pub metrics: Vec<BiasMetric>,
}

/// Mean of the per-side means. Each side is averaged over the matches
/// where that side's value is present, so this is not the pooled mean.
fn side_average<F>(matches: &[&MatchRecord], field: F) -> Option<f64>
where
    F: Fn(&MatchRecord) -> (Option<u32>, Option<u32>),
{
    let home = mean_present(matches.iter().map(|&r| field(r).0))?;
    let away = mean_present(matches.iter().map(|&r| field(r).1))?;
    Some((home + away) / 2.0)
}

/// Compare cards and fouls for `team` and its opponents in matches run by
/// `referee` against that referee's other matches.
pub fn referee_bias_comparison(dataset: &Dataset, referee: &str, team: &str) -> Result<RefereeBiasComparison> {
    let (team_matches, other_matches): (Vec<&MatchRecord>, Vec<&MatchRecord>) = dataset
        .iter()
        .filter(|r| r.is_officiated_by(referee))
        .partition(|r| r.involves(team));

    if team_matches.is_empty() && other_matches.is_empty() {
        return Err(ReportError::empty(
            SectionKind::RefereeBias,
            format!("no matches officiated by {}", referee),
        ));
    }

    log::debug!(
        "Referee bias for {} / {}: {} team matches, {} other matches",
        referee,
        team,
        team_matches.len(),
        other_matches.len()
    );

    let yellows: Vec<_> = team_matches
        .iter()
        .filter_map(|r| perspective(r, team, |r| (r.home_yellow, r.away_yellow)))
        .collect();
    let fouls: Vec<_> = team_matches
        .iter()
        .filter_map(|r| perspective(r, team, |r| (r.home_fouls, r.away_fouls)))
        .collect();

    let metrics = vec![
        BiasMetric::new(format!("Yellows on {}", team), mean_present(yellows.iter().map(|p| p.own))),
        BiasMetric::new("Yellows on Opponent", mean_present(yellows.iter().map(|p| p.opponent))),
        BiasMetric::new(
            "Avg Yellows (Others)",
            side_average(&other_matches, |r| (r.home_yellow, r.away_yellow)),
        ),
        BiasMetric::new(format!("Fouls by {}", team), mean_present(fouls.iter().map(|p| p.own))),
        BiasMetric::new("Fouls by Opponent", mean_present(fouls.iter().map(|p| p.opponent))),
        BiasMetric::new(
            "Avg Fouls (Others)",
            side_average(&other_matches, |r| (r.home_fouls, r.away_fouls)),
        ),
    ];

    Ok(RefereeBiasComparison {
        referee: referee.to_string(),
        team: team.to_string(),
        team_matches: team_matches.len(),
        other_matches: other_matches.len(),
        metrics,
    })
}
