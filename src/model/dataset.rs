use super::record::MatchRecord;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// A loaded season of matches
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<MatchRecord>,
    /// Normalized column labels, in file order
    pub columns: Vec<String>,
    /// Rows dropped at load because they had no date or team names
    pub skipped_rows: usize,
}

impl Dataset {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }

    /// First and last match date
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Distinct team names, sorted
    pub fn teams(&self) -> Vec<&str> {
        let teams: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| [r.home_team.as_str(), r.away_team.as_str()])
            .collect();
        teams.into_iter().collect()
    }

    /// Distinct referee names, sorted
    pub fn referees(&self) -> Vec<&str> {
        let referees: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.referee.as_deref())
            .collect();
        referees.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 9, d).unwrap()
    }

    #[test]
    fn test_summary_accessors() {
        let dataset = Dataset::new(vec![
            MatchRecord::new(day(3), "Arsenal", "Chelsea").with_referee("M Oliver"),
            MatchRecord::new(day(1), "Fulham", "Arsenal"),
            MatchRecord::new(day(9), "Chelsea", "Fulham").with_referee("A Taylor"),
        ]);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.date_range(), Some((day(1), day(9))));
        assert_eq!(dataset.teams(), vec!["Arsenal", "Chelsea", "Fulham"]);
        assert_eq!(dataset.referees(), vec!["A Taylor", "M Oliver"]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.date_range(), None);
        assert!(dataset.teams().is_empty());
    }
}
