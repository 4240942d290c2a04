use crate::analysis::{
    HeadToHeadOutcome, PairedSeries, RefereeBiasComparison, RefereeCardRow, RefereeCardSummary,
    ShotGoalCorrelation, TeamFoulsProfile,
};
use crate::error::Result;
use crate::render::text::format_coefficient;
use crate::report::{Report, SectionData, SectionKind};
use rust_xlsxwriter::{
    Chart, ChartTrendline, ChartTrendlineType, ChartType, Format, FormatAlign, FormatBorder, Workbook,
    Worksheet,
};
use std::path::Path;

/// Write a report to an Excel file: a summary sheet plus one sheet
/// (with charts) per section
pub fn write_report_to_xlsx(report: &Report, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(report)?;
    workbook.save(path)?;
    log::info!("Wrote report workbook to {}", path.display());
    Ok(())
}

fn build_workbook(report: &Report) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let sheet = new_section_sheet(&mut workbook, SectionKind::RefereeDiscipline)?;
    match &report.referee_cards {
        SectionData::Ready(summary) => write_referee_sheet(sheet, summary)?,
        SectionData::NoData { reason } => write_no_data(sheet, reason)?,
    }

    let sheet = new_section_sheet(&mut workbook, SectionKind::ShotGoalCorrelation)?;
    match &report.shot_goals {
        SectionData::Ready(corr) => write_shot_goal_sheet(sheet, corr)?,
        SectionData::NoData { reason } => write_no_data(sheet, reason)?,
    }

    let sheet = new_section_sheet(&mut workbook, SectionKind::TeamFouls)?;
    match &report.team_fouls {
        SectionData::Ready(profile) => write_fouls_sheet(sheet, profile)?,
        SectionData::NoData { reason } => write_no_data(sheet, reason)?,
    }

    let sheet = new_section_sheet(&mut workbook, SectionKind::RefereeBias)?;
    match &report.referee_bias {
        SectionData::Ready(cmp) => write_bias_sheet(sheet, cmp)?,
        SectionData::NoData { reason } => write_no_data(sheet, reason)?,
    }

    let sheet = new_section_sheet(&mut workbook, SectionKind::HeadToHead)?;
    match &report.head_to_head {
        SectionData::Ready(h2h) => write_head_to_head_sheet(sheet, h2h)?,
        SectionData::NoData { reason } => write_no_data(sheet, reason)?,
    }

    Ok(workbook)
}

fn new_section_sheet(workbook: &mut Workbook, kind: SectionKind) -> Result<&mut Worksheet> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(kind.sheet_name())?;
    Ok(sheet)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin)
}

fn average_format() -> Format {
    Format::new().set_num_format("0.00")
}

fn write_headers(sheet: &mut Worksheet, row: u32, first_col: u16, headers: &[&str]) -> Result<()> {
    let format = header_format();
    for (offset, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(row, first_col + offset as u16, *header, &format)?;
    }
    Ok(())
}

fn write_no_data(sheet: &mut Worksheet, reason: &str) -> Result<()> {
    sheet.set_column_width(0, 60)?;
    sheet.write_string(0, 0, format!("No data: {}", reason))?;
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &Report) -> Result<()> {
    sheet.set_name("Summary")?;
    sheet.set_column_width(0, 24)?;
    sheet.set_column_width(1, 60)?;

    let bold = Format::new().set_bold();
    sheet.write_string_with_format(0, 0, "Premier League Data Analysis", &bold)?;

    let config = &report.config;
    let params = [
        ("Matches", report.matches.to_string()),
        ("Team", config.team.clone()),
        ("Rivals", config.rivals.join(", ")),
        ("Referee", config.referee.clone()),
        ("Bias reference team", config.bias_team.clone()),
        ("Min referee matches", config.min_referee_matches.to_string()),
    ];
    for (idx, (label, value)) in params.iter().enumerate() {
        let row = (idx + 2) as u32;
        sheet.write_string_with_format(row, 0, *label, &bold)?;
        sheet.write_string(row, 1, value.as_str())?;
    }

    let statuses = [
        (SectionKind::RefereeDiscipline, section_status(&report.referee_cards)),
        (SectionKind::ShotGoalCorrelation, section_status(&report.shot_goals)),
        (SectionKind::TeamFouls, section_status(&report.team_fouls)),
        (SectionKind::RefereeBias, section_status(&report.referee_bias)),
        (SectionKind::HeadToHead, section_status(&report.head_to_head)),
    ];
    let first_row = (params.len() + 3) as u32;
    write_headers(sheet, first_row, 0, &["Sheet", "Status"])?;
    for (idx, (kind, status)) in statuses.iter().enumerate() {
        let row = first_row + 1 + idx as u32;
        sheet.write_string(row, 0, kind.sheet_name())?;
        sheet.write_string(row, 1, status.as_str())?;
    }

    Ok(())
}

fn section_status<T>(section: &SectionData<T>) -> String {
    match section {
        SectionData::Ready(_) => "OK".to_string(),
        SectionData::NoData { reason } => format!("No data: {}", reason),
    }
}

/// Write one referee table at `first_col`; returns the last data row
fn write_card_table(sheet: &mut Worksheet, first_col: u16, rows: &[&RefereeCardRow]) -> Result<u32> {
    let avg = average_format();
    write_headers(sheet, 0, first_col, &["Referee", "Matches", "Avg Yellow", "Avg Red"])?;
    for (idx, row) in rows.iter().enumerate() {
        let r = (idx + 1) as u32;
        sheet.write_string(r, first_col, row.referee.as_str())?;
        sheet.write_number(r, first_col + 1, row.matches as f64)?;
        sheet.write_number_with_format(r, first_col + 2, row.avg_total_yellow, &avg)?;
        sheet.write_number_with_format(r, first_col + 3, row.avg_total_red, &avg)?;
    }
    Ok(rows.len() as u32)
}

fn write_referee_sheet(sheet: &mut Worksheet, summary: &RefereeCardSummary) -> Result<()> {
    let name = SectionKind::RefereeDiscipline.sheet_name();
    sheet.set_column_width(0, 20)?;
    sheet.set_column_width(5, 20)?;

    // Yellow ranking in A:D, red ranking in F:I
    let last_row = write_card_table(sheet, 0, &summary.by_yellow())?;
    write_card_table(sheet, 5, &summary.by_red())?;

    let mut yellow_chart = Chart::new(ChartType::Column);
    yellow_chart
        .add_series()
        .set_name("Avg Yellow Cards")
        .set_categories((name, 1, 0, last_row, 0))
        .set_values((name, 1, 2, last_row, 2));
    yellow_chart
        .title()
        .set_name(format!("Average Yellow Cards ({}+ Matches)", summary.min_matches).as_str());
    yellow_chart.legend().set_hidden();

    let mut red_chart = Chart::new(ChartType::Column);
    red_chart
        .add_series()
        .set_name("Avg Red Cards")
        .set_categories((name, 1, 5, last_row, 5))
        .set_values((name, 1, 8, last_row, 8));
    red_chart
        .title()
        .set_name(format!("Average Red Cards ({}+ Matches)", summary.min_matches).as_str());
    red_chart.legend().set_hidden();

    let chart_row = last_row + 2;
    sheet.insert_chart(chart_row, 0, &yellow_chart)?;
    sheet.insert_chart(chart_row, 5, &red_chart)?;
    Ok(())
}

fn scatter_chart(name: &str, series: &PairedSeries, x_col: u16, last_row: u32) -> Chart {
    let mut trendline = ChartTrendline::new();
    trendline.set_type(ChartTrendlineType::Linear);

    let mut chart = Chart::new(ChartType::Scatter);
    chart
        .add_series()
        .set_name(series.title)
        .set_categories((name, 1, x_col, last_row, x_col))
        .set_values((name, 1, x_col + 1, last_row, x_col + 1))
        .set_trendline(&trendline);
    chart.title().set_name(series.title);
    chart.x_axis().set_name(series.x_label);
    chart.y_axis().set_name(series.y_label);
    chart.legend().set_hidden();
    chart
}

fn write_shot_goal_sheet(sheet: &mut Worksheet, corr: &ShotGoalCorrelation) -> Result<()> {
    let name = SectionKind::ShotGoalCorrelation.sheet_name();

    // Paired columns: A:B home, C:D away, E:F total
    let series = corr.series();
    for (idx, s) in series.iter().enumerate() {
        let col = (idx * 2) as u16;
        write_headers(sheet, 0, col, &[s.x_label, s.y_label])?;
        for (row_idx, (x, y)) in s.x.iter().zip(&s.y).enumerate() {
            let row = (row_idx + 1) as u32;
            sheet.write_number(row, col, *x)?;
            sheet.write_number(row, col + 1, *y)?;
        }
    }

    // Coefficients and trend lines in H:K
    sheet.set_column_width(7, 28)?;
    write_headers(sheet, 0, 7, &["Series", "Correlation", "Slope", "Intercept"])?;
    let avg = average_format();
    for (idx, s) in series.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 7, s.title)?;
        match s.rounded() {
            Some(r) => sheet.write_number_with_format(row, 8, r, &avg)?,
            None => sheet.write_string(row, 8, format_coefficient(None))?,
        };
        if let Some(fit) = s.trend {
            sheet.write_number(row, 9, fit.slope)?;
            sheet.write_number(row, 10, fit.intercept)?;
        }
    }

    let last_row = corr.matches as u32;
    let chart_row = (series.len() + 3) as u32;
    for (idx, s) in series.iter().enumerate() {
        let chart = scatter_chart(name, s, (idx * 2) as u16, last_row);
        sheet.insert_chart(chart_row + idx as u32 * 16, 7, &chart)?;
    }
    Ok(())
}

fn write_fouls_sheet(sheet: &mut Worksheet, profile: &TeamFoulsProfile) -> Result<()> {
    let name = SectionKind::TeamFouls.sheet_name();
    sheet.set_column_width(0, 18)?;

    write_headers(sheet, 0, 0, &["Type", "Average"])?;
    let avg = average_format();
    for (idx, (label, value)) in profile.rows().iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, *label)?;
        sheet.write_number_with_format(row, 1, *value, &avg)?;
    }
    sheet.write_string(4, 0, "Matches")?;
    sheet.write_number(4, 1, profile.matches as f64)?;

    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_name("Average")
        .set_categories((name, 1, 0, 2, 0))
        .set_values((name, 1, 1, 2, 1));
    chart.title().set_name(format!("{}: Average Fouls", profile.team).as_str());
    chart.legend().set_hidden();
    sheet.insert_chart(6, 0, &chart)?;
    Ok(())
}

fn write_bias_sheet(sheet: &mut Worksheet, cmp: &RefereeBiasComparison) -> Result<()> {
    let name = SectionKind::RefereeBias.sheet_name();
    sheet.set_column_width(0, 26)?;

    write_headers(sheet, 0, 0, &["Metric", "Average"])?;
    let avg = average_format();
    for (idx, metric) in cmp.metrics.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, metric.label.as_str())?;
        match metric.value {
            Some(v) => sheet.write_number_with_format(row, 1, v, &avg)?,
            None => sheet.write_string(row, 1, "no data")?,
        };
    }

    let last_row = cmp.metrics.len() as u32;
    sheet.write_string(last_row + 2, 0, format!("Matches with {}", cmp.team))?;
    sheet.write_number(last_row + 2, 1, cmp.team_matches as f64)?;
    sheet.write_string(last_row + 3, 0, "Other matches")?;
    sheet.write_number(last_row + 3, 1, cmp.other_matches as f64)?;

    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_name("Average")
        .set_categories((name, 1, 0, last_row, 0))
        .set_values((name, 1, 1, last_row, 1));
    chart
        .title()
        .set_name(format!("{} - {} vs Other Teams", cmp.referee, cmp.team).as_str());
    chart.legend().set_hidden();
    sheet.insert_chart(last_row + 5, 0, &chart)?;
    Ok(())
}

fn write_head_to_head_sheet(sheet: &mut Worksheet, h2h: &HeadToHeadOutcome) -> Result<()> {
    let name = SectionKind::HeadToHead.sheet_name();
    sheet.set_column_width(0, 16)?;

    write_headers(sheet, 0, 0, &["Result", "Count"])?;
    for (idx, (outcome, count)) in h2h.distribution.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, outcome.label())?;
        sheet.write_number(row, 1, *count as f64)?;
    }

    let last_row = h2h.distribution.len() as u32;
    sheet.write_string(last_row + 2, 0, "Total Matches")?;
    sheet.write_number(last_row + 2, 1, h2h.matches as f64)?;
    sheet.write_string(last_row + 3, 0, "Opponents")?;
    sheet.write_string(last_row + 3, 1, h2h.opponents.join(", "))?;

    let mut chart = Chart::new(ChartType::Pie);
    chart
        .add_series()
        .set_name("Results")
        .set_categories((name, 1, 0, last_row, 0))
        .set_values((name, 1, 1, last_row, 1));
    chart.title().set_name(format!("{} vs Rivals", h2h.team).as_str());
    sheet.insert_chart(last_row + 5, 0, &chart)?;
    Ok(())
}
