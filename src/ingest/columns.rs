use serde::Deserialize;

/// A match field and the normalized header labels it may appear under
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub field: &'static str,
    pub labels: &'static [&'static str],
    pub required: bool,
}

/// Known columns. The first label is the football-data.co.uk code,
/// the second the long label used by older season exports.
pub const COLUMNS: [Column; 15] = [
    Column { field: "date", labels: &["date"], required: true },
    Column { field: "home_team", labels: &["hometeam", "home_team"], required: true },
    Column { field: "away_team", labels: &["awayteam", "away_team"], required: true },
    Column { field: "home_goals", labels: &["fthg", "fth_goals"], required: false },
    Column { field: "away_goals", labels: &["ftag", "fta_goals"], required: false },
    Column { field: "full_time_result", labels: &["ftr", "ft_result"], required: false },
    Column { field: "home_shots", labels: &["hs", "h_shots"], required: false },
    Column { field: "away_shots", labels: &["as", "a_shots"], required: false },
    Column { field: "home_fouls", labels: &["hf", "h_fouls"], required: false },
    Column { field: "away_fouls", labels: &["af", "a_fouls"], required: false },
    Column { field: "home_yellow", labels: &["hy", "h_yellow"], required: false },
    Column { field: "away_yellow", labels: &["ay", "a_yellow"], required: false },
    Column { field: "home_red", labels: &["hr", "h_red"], required: false },
    Column { field: "away_red", labels: &["ar", "a_red"], required: false },
    Column { field: "referee", labels: &["referee"], required: false },
];

/// Normalize a header label: trim, lower-case, spaces to underscores
pub fn normalize_column(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Fields whose column is present in a normalized header
pub fn recognised_fields(columns: &[String]) -> Vec<&'static str> {
    COLUMNS
        .iter()
        .filter(|c| columns.iter().any(|label| c.labels.contains(&label.as_str())))
        .map(|c| c.field)
        .collect()
}

/// First required field with no matching column
pub fn missing_required(columns: &[String]) -> Option<&'static str> {
    let present = recognised_fields(columns);
    COLUMNS
        .iter()
        .filter(|c| c.required)
        .map(|c| c.field)
        .find(|field| !present.contains(field))
}

/// One CSV row keyed by normalized header labels. Cells stay as text
/// until `reader` converts them, so bad values can be reported by row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatchRow {
    pub date: Option<String>,
    #[serde(rename = "hometeam", alias = "home_team")]
    pub home_team: Option<String>,
    #[serde(rename = "awayteam", alias = "away_team")]
    pub away_team: Option<String>,
    #[serde(rename = "fthg", alias = "fth_goals")]
    pub home_goals: Option<String>,
    #[serde(rename = "ftag", alias = "fta_goals")]
    pub away_goals: Option<String>,
    #[serde(rename = "ftr", alias = "ft_result")]
    pub full_time_result: Option<String>,
    #[serde(rename = "hs", alias = "h_shots")]
    pub home_shots: Option<String>,
    #[serde(rename = "as", alias = "a_shots")]
    pub away_shots: Option<String>,
    #[serde(rename = "hf", alias = "h_fouls")]
    pub home_fouls: Option<String>,
    #[serde(rename = "af", alias = "a_fouls")]
    pub away_fouls: Option<String>,
    #[serde(rename = "hy", alias = "h_yellow")]
    pub home_yellow: Option<String>,
    #[serde(rename = "ay", alias = "a_yellow")]
    pub away_yellow: Option<String>,
    #[serde(rename = "hr", alias = "h_red")]
    pub home_red: Option<String>,
    #[serde(rename = "ar", alias = "a_red")]
    pub away_red: Option<String>,
    pub referee: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column() {
        assert_eq!(normalize_column(" HomeTeam "), "hometeam");
        assert_eq!(normalize_column("H Yellow"), "h_yellow");
        assert_eq!(normalize_column("FTH Goals"), "fth_goals");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let headers = ["Date", " HomeTeam", "FTH Goals ", "H Yellow", "Referee", "B365H"];
        let once: Vec<String> = headers.iter().map(|h| normalize_column(h)).collect();
        let twice: Vec<String> = once.iter().map(|h| normalize_column(h)).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recognised_fields() {
        let columns: Vec<String> = ["date", "hometeam", "away_team", "hs", "b365h"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            recognised_fields(&columns),
            vec!["date", "home_team", "away_team", "home_shots"]
        );
        assert_eq!(missing_required(&columns), None);
    }

    #[test]
    fn test_missing_required() {
        let columns: Vec<String> = ["date", "hometeam", "fthg"].iter().map(|s| s.to_string()).collect();
        assert_eq!(missing_required(&columns), Some("away_team"));
    }

    #[test]
    fn test_every_field_has_a_label() {
        for column in COLUMNS {
            assert!(!column.labels.is_empty(), "{} has no labels", column.field);
        }
    }
}
