use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use salary_insights::{load_file, DashboardState, JobTitleDetail, YearAggregate};

#[derive(Parser)]
#[command(name = "salary-insights")]
#[command(about = "Summarise a salary CSV per year and drill into job titles")]
#[command(version)]
struct Cli {
    /// Salary CSV with the standard eleven-column header
    #[arg(default_value = "salaries.csv")]
    path: PathBuf,

    /// Year to break down by job title
    #[arg(short, long)]
    year: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    records: usize,
    years: &'a [YearAggregate],
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_details: Option<&'a [JobTitleDetail]>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = DashboardState::default();
    state.set_records(load_file(&cli.path)?);

    if let Some(year) = cli.year {
        state.select_year(year);
    }

    let selected_year = state.selection().year();
    let snapshot = Snapshot {
        records: state.records().len(),
        years: state.year_aggregates(),
        selected_year,
        job_details: selected_year.map(|_| state.job_details()),
    };

    let json = serde_json::to_string_pretty(&snapshot).context("serialising snapshot")?;
    println!("{json}");
    Ok(())
}
