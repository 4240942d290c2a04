use super::columns::{missing_required, normalize_column, RawMatchRow};
use crate::error::{ReportError, Result};
use crate::model::{Dataset, FullTimeResult, MatchRecord};
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

/// Read a match results CSV file
pub fn read_matches_file(path: &Path) -> Result<Dataset> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|e| ReportError::Parse(format!("file is not valid UTF-8 text: {}", e)))?;
    read_matches(&content)
}

/// Parse match results from CSV text
pub fn read_matches(content: &str) -> Result<Dataset> {
    if content.trim().is_empty() {
        return Err(ReportError::Parse("input is empty".to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(normalize_column).collect();
    if let Some(field) = missing_required(&columns) {
        return Err(ReportError::MissingColumn(field));
    }
    reader.set_headers(StringRecord::from(columns.clone()));

    let mut dataset = Dataset {
        columns,
        ..Dataset::default()
    };

    for (idx, result) in reader.deserialize::<RawMatchRow>().enumerate() {
        // Line 1 is the header
        let row_num = idx + 2;
        let raw = result?;
        match convert_row(raw, row_num)? {
            Some(record) => dataset.records.push(record),
            None => {
                log::warn!("Row {}: missing date or team name, skipped", row_num);
                dataset.skipped_rows += 1;
            }
        }
    }

    log::info!(
        "Loaded {} matches ({} rows skipped)",
        dataset.records.len(),
        dataset.skipped_rows
    );
    Ok(dataset)
}

/// Convert a raw row into a typed record.
/// Returns `Ok(None)` for rows without a date or either team.
fn convert_row(raw: RawMatchRow, row: usize) -> Result<Option<MatchRecord>> {
    let date = match non_empty(raw.date) {
        Some(value) => match parse_day_first(&value) {
            Some(date) => date,
            None => return Err(ReportError::InvalidDate { row, value }),
        },
        None => return Ok(None),
    };

    let (home_team, away_team) = match (non_empty(raw.home_team), non_empty(raw.away_team)) {
        (Some(home), Some(away)) => (home, away),
        _ => return Ok(None),
    };

    let full_time_result = match non_empty(raw.full_time_result) {
        Some(code) => match FullTimeResult::from_code(&code) {
            Some(result) => Some(result),
            None => {
                return Err(ReportError::InvalidValue {
                    row,
                    column: "full_time_result",
                    value: code,
                })
            }
        },
        None => None,
    };

    let mut record = MatchRecord::new(date, home_team, away_team);
    record.full_time_result = full_time_result;
    record.home_goals = parse_count(raw.home_goals, "home_goals", row)?;
    record.away_goals = parse_count(raw.away_goals, "away_goals", row)?;
    record.home_shots = parse_count(raw.home_shots, "home_shots", row)?;
    record.away_shots = parse_count(raw.away_shots, "away_shots", row)?;
    record.home_fouls = parse_count(raw.home_fouls, "home_fouls", row)?;
    record.away_fouls = parse_count(raw.away_fouls, "away_fouls", row)?;
    record.home_yellow = parse_count(raw.home_yellow, "home_yellow", row)?;
    record.away_yellow = parse_count(raw.away_yellow, "away_yellow", row)?;
    record.home_red = parse_count(raw.home_red, "home_red", row)?;
    record.away_red = parse_count(raw.away_red, "away_red", row)?;
    record.referee = non_empty(raw.referee);

    Ok(Some(record))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a count cell. Blank and `NaN` cells are missing; float text with
/// no fractional part (as written by spreadsheet exports) is accepted.
fn parse_count(value: Option<String>, column: &'static str, row: usize) -> Result<Option<u32>> {
    let value = match non_empty(value) {
        Some(v) => v,
        None => return Ok(None),
    };

    if let Ok(n) = value.parse::<u32>() {
        return Ok(Some(n));
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_nan() => Ok(None),
        Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => Ok(Some(f as u32)),
        _ => Err(ReportError::InvalidValue { row, column, value }),
    }
}

/// Day-first formats, two-digit years first so `%Y` never takes `24` as year 24
const SHORT_YEAR_FORMATS: [&str; 3] = ["%d/%m/%y", "%d-%m-%y", "%d.%m.%y"];
const FULL_YEAR_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

/// Parse a date with the day before the month: `dd/mm/yyyy`, `dd/mm/yy`,
/// with `/`, `-` or `.` separators. ISO `yyyy-mm-dd` is also accepted.
/// Anything after the first whitespace (a kick-off time) is ignored.
pub fn parse_day_first(s: &str) -> Option<NaiveDate> {
    let s = s.split_whitespace().next()?;

    SHORT_YEAR_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            FULL_YEAR_FORMATS
                .iter()
                .filter_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .find(|date| (1000..=9999).contains(&date.year()))
        })
}
