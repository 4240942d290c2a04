use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

use match_report::analysis::{BIG_SIX, DEFAULT_MIN_MATCHES};
use match_report::render;
use match_report::xlsx;
use match_report::{ReportConfig, Session};

#[derive(Parser)]
#[command(name = "match-report")]
#[command(about = "Referee, shot, foul and head-to-head statistics from a season of match results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full report, optionally also writing it to Excel
    Report {
        /// Match results CSV file
        input: Option<PathBuf>,

        /// Also write the report, with charts, to this Excel file
        #[arg(long)]
        xlsx: Option<PathBuf>,

        /// Team for the fouls profile and head-to-head sections
        #[arg(long, env = "MATCH_REPORT_TEAM", default_value = "Arsenal")]
        team: String,

        /// Comma-separated rival teams for the head-to-head section
        #[arg(long, env = "MATCH_REPORT_RIVALS", value_delimiter = ',', default_values_t = BIG_SIX.map(String::from))]
        rivals: Vec<String>,

        /// Referee for the bias comparison
        #[arg(long, env = "MATCH_REPORT_REFEREE", default_value = "D Coote")]
        referee: String,

        /// Reference team for the bias comparison
        #[arg(long, env = "MATCH_REPORT_BIAS_TEAM", default_value = "Liverpool")]
        bias_team: String,

        /// Matches a referee needs to appear in the discipline table
        #[arg(long, default_value_t = DEFAULT_MIN_MATCHES)]
        min_referee_matches: usize,
    },

    /// Display information about a match results file
    Info {
        /// Match results CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            xlsx,
            team,
            rivals,
            referee,
            bias_team,
            min_referee_matches,
        } => {
            let config = ReportConfig {
                team,
                rivals: rivals.into_iter().map(|r| r.trim().to_string()).collect(),
                referee,
                bias_team,
                min_referee_matches,
            };
            report(input.as_deref(), xlsx.as_deref(), &config)?;
        }
        Commands::Info { input } => {
            info(&input)?;
        }
    }

    Ok(())
}

/// Load a file into the session, turning input problems into an
/// instruction to supply a valid file
fn load(session: &mut Session, input: &Path) -> Result<()> {
    match session.load_file(input) {
        Ok(_) => Ok(()),
        Err(e) if e.is_parse_error() => Err(anyhow::anyhow!(
            "{}: {}\nPlease re-upload a valid match results CSV file.",
            input.display(),
            e
        )),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", input.display())),
    }
}

fn report(input: Option<&Path>, xlsx_path: Option<&Path>, config: &ReportConfig) -> Result<()> {
    let mut session = Session::new();
    if let Some(input) = input {
        load(&mut session, input)?;
    }

    let report = match session.report(config) {
        Some(report) => report.context("Failed to build report")?,
        None => {
            render::write_prompt(&mut io::stdout())?;
            return Ok(());
        }
    };

    render::write_report(&report, &mut io::stdout().lock())?;

    if let Some(path) = xlsx_path {
        println!();
        println!("Writing Excel file: {}", path.display());
        xlsx::write_report_to_xlsx(&report, path).context("Failed to write Excel file")?;
        println!("Done!");
    }

    Ok(())
}

fn info(input: &Path) -> Result<()> {
    let mut session = Session::new();
    load(&mut session, input)?;

    if let Some(dataset) = session.dataset() {
        println!("Match File: {}", input.display());
        render::write_dataset_info(dataset, &mut io::stdout().lock())?;
    }

    Ok(())
}
