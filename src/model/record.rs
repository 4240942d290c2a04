use super::perspective::Side;
use chrono::NaiveDate;

/// Full-time result as recorded in the `FTR` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullTimeResult {
    HomeWin,
    AwayWin,
    Draw,
}

impl FullTimeResult {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "H" => Some(FullTimeResult::HomeWin),
            "A" => Some(FullTimeResult::AwayWin),
            "D" => Some(FullTimeResult::Draw),
            _ => None,
        }
    }
}

/// One match row. Statistic columns are optional; each derivation
/// skips rows missing the fields it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,

    // Full-time score
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub full_time_result: Option<FullTimeResult>,

    // Match statistics
    pub home_shots: Option<u32>,
    pub away_shots: Option<u32>,
    pub home_fouls: Option<u32>,
    pub away_fouls: Option<u32>,
    pub home_yellow: Option<u32>,
    pub away_yellow: Option<u32>,
    pub home_red: Option<u32>,
    pub away_red: Option<u32>,

    pub referee: Option<String>,
}

impl MatchRecord {
    pub fn new(date: NaiveDate, home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            date,
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals: None,
            away_goals: None,
            full_time_result: None,
            home_shots: None,
            away_shots: None,
            home_fouls: None,
            away_fouls: None,
            home_yellow: None,
            away_yellow: None,
            home_red: None,
            away_red: None,
            referee: None,
        }
    }

    /// Set the score; the full-time result is derived from it
    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.home_goals = Some(home);
        self.away_goals = Some(away);
        self.full_time_result = Some(match home.cmp(&away) {
            std::cmp::Ordering::Greater => FullTimeResult::HomeWin,
            std::cmp::Ordering::Less => FullTimeResult::AwayWin,
            std::cmp::Ordering::Equal => FullTimeResult::Draw,
        });
        self
    }

    pub fn with_result(mut self, result: FullTimeResult) -> Self {
        self.full_time_result = Some(result);
        self
    }

    pub fn with_shots(mut self, home: u32, away: u32) -> Self {
        self.home_shots = Some(home);
        self.away_shots = Some(away);
        self
    }

    pub fn with_fouls(mut self, home: u32, away: u32) -> Self {
        self.home_fouls = Some(home);
        self.away_fouls = Some(away);
        self
    }

    pub fn with_yellows(mut self, home: u32, away: u32) -> Self {
        self.home_yellow = Some(home);
        self.away_yellow = Some(away);
        self
    }

    pub fn with_reds(mut self, home: u32, away: u32) -> Self {
        self.home_red = Some(home);
        self.away_red = Some(away);
        self
    }

    pub fn with_referee(mut self, referee: impl Into<String>) -> Self {
        self.referee = Some(referee.into());
        self
    }

    /// The side `team` played on, if it played in this match
    pub fn side_of(&self, team: &str) -> Option<Side> {
        if self.home_team == team {
            Some(Side::Home)
        } else if self.away_team == team {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.side_of(team).is_some()
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn is_officiated_by(&self, referee: &str) -> bool {
        self.referee.as_deref() == Some(referee)
    }
}
