use std::path::Path;

use crate::data::detail::details_for_year;
use crate::data::loader::{ingest, load_file};
use crate::data::model::{JobTitleDetail, SalaryRecord, YearAggregate};
use crate::data::summary::aggregate_by_year;

// ---------------------------------------------------------------------------
// Year selection
// ---------------------------------------------------------------------------

/// Which year, if any, drives the job-title breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoYearSelected,
    YearSelected(i32),
}

impl Selection {
    pub fn year(self) -> Option<i32> {
        match self {
            Selection::NoYearSelected => None,
            Selection::YearSelected(year) => Some(year),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// Everything a front end needs to draw the summary and drill-down tables.
///
/// Derived collections are recomputed eagerly: replacing the records rebuilds
/// `year_aggregates` and clears the selection, selecting a year rebuilds
/// `job_details` only.
#[derive(Debug, Default)]
pub struct DashboardState {
    records: Vec<SalaryRecord>,
    year_aggregates: Vec<YearAggregate>,
    selection: Selection,
    job_details: Vec<JobTitleDetail>,

    /// Status / error message from the last load attempt.
    pub status_message: Option<String>,
}

impl DashboardState {
    /// Install a freshly validated record set.
    ///
    /// The previous selection is dropped since its year may not exist anymore.
    pub fn set_records(&mut self, records: Vec<SalaryRecord>) {
        self.year_aggregates = aggregate_by_year(&records);
        self.records = records;
        self.selection = Selection::NoYearSelected;
        self.job_details.clear();
        self.status_message = None;

        log::info!(
            "Loaded {} records across {} years",
            self.records.len(),
            self.year_aggregates.len()
        );
    }

    /// Ingest raw CSV text and install the result.
    pub fn load_text(&mut self, raw: &str) {
        self.set_records(ingest(raw));
    }

    /// Read a CSV file and install it. On failure the current data is kept and
    /// the error is recorded in `status_message`.
    pub fn load_path(&mut self, path: &Path) -> bool {
        match load_file(path) {
            Ok(records) => {
                self.set_records(records);
                true
            }
            Err(e) => {
                log::error!("Failed to load salary data: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                false
            }
        }
    }

    /// Select a year and rebuild the job-title breakdown for it.
    pub fn select_year(&mut self, year: i32) {
        self.selection = Selection::YearSelected(year);
        self.job_details = details_for_year(&self.records, year);
        if self.job_details.is_empty() {
            log::debug!("Year {year} has no records");
        }
    }

    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    pub fn year_aggregates(&self) -> &[YearAggregate] {
        &self.year_aggregates
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Job-title counts for the selected year; empty when nothing is selected.
    pub fn job_details(&self) -> &[JobTitleDetail] {
        &self.job_details
    }
}
