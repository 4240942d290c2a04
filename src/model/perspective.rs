//! Team-relative views of a home/away match record

use super::record::{FullTimeResult, MatchRecord};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// Split a home/away pair into this side's value and the other side's
    pub fn resolve<T>(self, home: T, away: T) -> Perspective<T> {
        match self {
            Side::Home => Perspective {
                own: home,
                opponent: away,
            },
            Side::Away => Perspective {
                own: away,
                opponent: home,
            },
        }
    }
}

/// A value seen from one team: its own and its opponent's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perspective<T> {
    pub own: T,
    pub opponent: T,
}

impl<T> Perspective<Option<T>> {
    /// Both values, if both are present
    pub fn both(self) -> Option<Perspective<T>> {
        Some(Perspective {
            own: self.own?,
            opponent: self.opponent?,
        })
    }
}

/// Resolve a home/away field pair of `record` from `team`'s side.
/// Returns `None` when `team` did not play in the match.
pub fn perspective<T, F>(record: &MatchRecord, team: &str, field: F) -> Option<Perspective<T>>
where
    F: FnOnce(&MatchRecord) -> (T, T),
{
    let side = record.side_of(team)?;
    let (home, away) = field(record);
    Some(side.resolve(home, away))
}

/// Match result relative to one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub const ALL: [MatchOutcome; 3] = [MatchOutcome::Win, MatchOutcome::Draw, MatchOutcome::Loss];

    pub fn resolve(result: FullTimeResult, side: Side) -> MatchOutcome {
        match (result, side) {
            (FullTimeResult::Draw, _) => MatchOutcome::Draw,
            (FullTimeResult::HomeWin, Side::Home) | (FullTimeResult::AwayWin, Side::Away) => {
                MatchOutcome::Win
            }
            (FullTimeResult::HomeWin, Side::Away) | (FullTimeResult::AwayWin, Side::Home) => {
                MatchOutcome::Loss
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "Win",
            MatchOutcome::Draw => "Draw",
            MatchOutcome::Loss => "Loss",
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_resolve_sides() {
        assert_eq!(Side::Home.resolve(12, 9), Perspective { own: 12, opponent: 9 });
        assert_eq!(Side::Away.resolve(12, 9), Perspective { own: 9, opponent: 12 });
        assert_eq!(Side::Home.opposite(), Side::Away);
    }

    #[test]
    fn test_perspective_of_record() {
        let record = MatchRecord::new(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(), "Fulham", "Arsenal")
            .with_fouls(14, 8);

        let fouls = perspective(&record, "Arsenal", |r| (r.home_fouls, r.away_fouls)).unwrap();
        assert_eq!(fouls.own, Some(8));
        assert_eq!(fouls.opponent, Some(14));
        assert_eq!(fouls.both(), Some(Perspective { own: 8, opponent: 14 }));

        assert!(perspective(&record, "Chelsea", |r| (r.home_fouls, r.away_fouls)).is_none());
    }

    #[test]
    fn test_partial_perspective() {
        let p = Perspective { own: Some(3), opponent: None::<u32> };
        assert_eq!(p.both(), None);
    }

    #[test]
    fn test_outcome_resolution() {
        assert_eq!(MatchOutcome::resolve(FullTimeResult::HomeWin, Side::Home), MatchOutcome::Win);
        assert_eq!(MatchOutcome::resolve(FullTimeResult::HomeWin, Side::Away), MatchOutcome::Loss);
        assert_eq!(MatchOutcome::resolve(FullTimeResult::AwayWin, Side::Away), MatchOutcome::Win);
        assert_eq!(MatchOutcome::resolve(FullTimeResult::AwayWin, Side::Home), MatchOutcome::Loss);
        assert_eq!(MatchOutcome::resolve(FullTimeResult::Draw, Side::Home), MatchOutcome::Draw);
        assert_eq!(MatchOutcome::resolve(FullTimeResult::Draw, Side::Away), MatchOutcome::Draw);
    }
}
