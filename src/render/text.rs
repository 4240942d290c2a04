//! Plain-text rendering of a report for the terminal

use crate::analysis::{
    HeadToHeadOutcome, RefereeBiasComparison, RefereeCardRow, RefereeCardSummary, ShotGoalCorrelation,
    TeamFoulsProfile,
};
use crate::error::Result;
use crate::ingest::recognised_fields;
use crate::model::Dataset;
use crate::report::{Report, SectionData};
use std::io::Write;

pub const PROMPT: &str = "Provide a match results CSV file to begin.";

/// Format a coefficient the way the report shows it: two decimals, or `nan`
pub fn format_coefficient(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "nan".to_string(),
    }
}

fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "no data".to_string(),
    }
}

/// What to show before any file has been given
pub fn write_prompt<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", PROMPT)?;
    Ok(())
}

pub fn write_report<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    writeln!(out, "Premier League Data Analysis ({} matches)", report.matches)?;
    writeln!(out)?;

    writeln!(
        out,
        "== Referee Discipline Stats ({}+ Matches) ==",
        report.config.min_referee_matches
    )?;
    match &report.referee_cards {
        SectionData::Ready(summary) => write_referee_cards(summary, out)?,
        SectionData::NoData { reason } => write_no_data(reason, out)?,
    }
    writeln!(out)?;

    writeln!(out, "== Correlation Between Shots and Goals ==")?;
    match &report.shot_goals {
        SectionData::Ready(corr) => write_shot_goals(corr, out)?,
        SectionData::NoData { reason } => write_no_data(reason, out)?,
    }
    writeln!(out)?;

    writeln!(out, "== {}: Fouls Committed vs Suffered ==", report.config.team)?;
    match &report.team_fouls {
        SectionData::Ready(profile) => write_team_fouls(profile, out)?,
        SectionData::NoData { reason } => write_no_data(reason, out)?,
    }
    writeln!(out)?;

    writeln!(
        out,
        "== {}: {} Bias? ==",
        report.config.referee, report.config.bias_team
    )?;
    match &report.referee_bias {
        SectionData::Ready(cmp) => write_referee_bias(cmp, out)?,
        SectionData::NoData { reason } => write_no_data(reason, out)?,
    }
    writeln!(out)?;

    writeln!(out, "== {} vs Rivals ==", report.config.team)?;
    match &report.head_to_head {
        SectionData::Ready(h2h) => write_head_to_head(h2h, out)?,
        SectionData::NoData { reason } => write_no_data(reason, out)?,
    }

    Ok(())
}

fn write_no_data<W: Write>(reason: &str, out: &mut W) -> Result<()> {
    writeln!(out, "No data: {}", reason)?;
    Ok(())
}

fn write_card_table<W: Write>(title: &str, rows: &[&RefereeCardRow], out: &mut W) -> Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "  {:<24} {:>7} {:>10} {:>10}", "Referee", "Matches", "Avg Yellow", "Avg Red")?;
    for row in rows {
        writeln!(
            out,
            "  {:<24} {:>7} {:>10.2} {:>10.2}",
            row.referee, row.matches, row.avg_total_yellow, row.avg_total_red
        )?;
    }
    Ok(())
}

fn write_referee_cards<W: Write>(summary: &RefereeCardSummary, out: &mut W) -> Result<()> {
    write_card_table(
        &format!("Average Yellow Cards ({}+ Matches)", summary.min_matches),
        &summary.by_yellow(),
        out,
    )?;
    writeln!(out)?;
    write_card_table(
        &format!("Average Red Cards ({}+ Matches)", summary.min_matches),
        &summary.by_red(),
        out,
    )
}

fn write_shot_goals<W: Write>(corr: &ShotGoalCorrelation, out: &mut W) -> Result<()> {
    writeln!(out, "Matches with shots and score: {}", corr.matches)?;
    writeln!(out, "Home Shots vs Goals Correlation: {}", format_coefficient(corr.home.rounded()))?;
    writeln!(out, "Away Shots vs Goals Correlation: {}", format_coefficient(corr.away.rounded()))?;
    writeln!(out, "Overall Shots vs Goals Correlation: {}", format_coefficient(corr.total.rounded()))?;
    for series in corr.series() {
        match series.trend {
            Some(fit) => writeln!(
                out,
                "  {} trend: goals = {:.3} x shots {:+.3}",
                series.title, fit.slope, fit.intercept
            )?,
            None => writeln!(out, "  {} trend: not enough variation", series.title)?,
        }
    }
    Ok(())
}

fn write_team_fouls<W: Write>(profile: &TeamFoulsProfile, out: &mut W) -> Result<()> {
    writeln!(out, "Matches: {}", profile.matches)?;
    for (label, value) in profile.rows() {
        writeln!(out, "  {:<16} {:>6.2}", label, value)?;
    }
    Ok(())
}

fn write_referee_bias<W: Write>(cmp: &RefereeBiasComparison, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Matches with {}: {}, other matches: {}",
        cmp.team, cmp.team_matches, cmp.other_matches
    )?;
    for metric in &cmp.metrics {
        writeln!(out, "  {:<24} {:>7}", metric.label, format_average(metric.value))?;
    }
    Ok(())
}

fn write_head_to_head<W: Write>(h2h: &HeadToHeadOutcome, out: &mut W) -> Result<()> {
    writeln!(out, "Opponents: {}", h2h.opponents.join(", "))?;
    writeln!(out, "Total Matches vs Rivals: {}", h2h.matches)?;
    for (outcome, count) in &h2h.distribution {
        writeln!(
            out,
            "  {:<5} {:>3} ({:.1}%)",
            outcome.label(),
            count,
            h2h.share(*outcome) * 100.0
        )?;
    }
    Ok(())
}

/// Dataset overview for the `info` command
pub fn write_dataset_info<W: Write>(dataset: &Dataset, out: &mut W) -> Result<()> {
    writeln!(out, "Matches: {}", dataset.len())?;
    if dataset.skipped_rows > 0 {
        writeln!(out, "Skipped rows: {}", dataset.skipped_rows)?;
    }
    if let Some((first, last)) = dataset.date_range() {
        writeln!(out, "Dates: {} to {}", first.format("%d/%m/%Y"), last.format("%d/%m/%Y"))?;
    }
    writeln!(out, "Columns: {}", recognised_fields(&dataset.columns).join(", "))?;
    writeln!(out)?;

    let teams = dataset.teams();
    writeln!(out, "Teams: {}", teams.len())?;
    for team in &teams {
        writeln!(out, "  {}", team)?;
    }
    writeln!(out)?;

    let referees = dataset.referees();
    writeln!(out, "Referees: {}", referees.len())?;
    for referee in referees.iter().take(10) {
        writeln!(out, "  {}", referee)?;
    }
    if referees.len() > 10 {
        writeln!(out, "  ... and {} more", referees.len() - 10)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::read_matches;
    use crate::report::ReportConfig;

    const SEASON: &str = "\
Date,HomeTeam,AwayTeam,FTHG,FTAG,FTR,Referee,HS,AS,HF,AF,HY,AY,HR,AR
12/08/2023,Arsenal,Nott'm Forest,2,1,H,M Oliver,16,6,12,12,2,2,0,0
20/08/2023,Chelsea,Arsenal,1,1,D,D Coote,10,9,11,14,3,1,0,1
26/08/2023,Arsenal,Liverpool,0,3,A,D Coote,8,14,9,7,1,2,0,0
";

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        write_report(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_coefficient() {
        assert_eq!(format_coefficient(Some(0.456)), "0.46");
        assert_eq!(format_coefficient(Some(1.0)), "1.00");
        assert_eq!(format_coefficient(None), "nan");
    }

    #[test]
    fn test_report_text() {
        let dataset = read_matches(SEASON).unwrap();
        let report = Report::build(&dataset, &ReportConfig::default()).unwrap();
        let text = render(&report);

        assert!(text.contains("Premier League Data Analysis (3 matches)"));
        assert!(text.contains("== Referee Discipline Stats (50+ Matches) =="));
        assert!(text.contains("No data: no referee has 50 or more matches"));
        assert!(text.contains("Home Shots vs Goals Correlation:"));
        assert!(text.contains("Fouls Committed"));
        assert!(text.contains("Yellows on Liverpool"));
        assert!(text.contains("Avg Yellows (Others)"));
        assert!(text.contains("Total Matches vs Rivals: 2"));
    }

    #[test]
    fn test_prompt() {
        let mut out = Vec::new();
        write_prompt(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", PROMPT));
    }

    #[test]
    fn test_dataset_info() {
        let dataset = read_matches(SEASON).unwrap();
        let mut out = Vec::new();
        write_dataset_info(&dataset, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Matches: 3"));
        assert!(text.contains("Dates: 12/08/2023 to 26/08/2023"));
        assert!(text.contains("Teams: 4"));
        assert!(text.contains("Referees: 2"));
        assert!(text.contains("home_shots"));
    }
}
