//! Salary dataset ingestion with a per-year summary and a per-title drill-down.
//!
//! The crate is the data core behind a salary dashboard: [`data::loader`] turns
//! raw CSV text into validated [`SalaryRecord`]s, [`data::summary`] rolls them
//! up per `work_year`, and [`data::detail`] counts job titles for one selected
//! year. [`DashboardState`] keeps the derived views in step with the loaded
//! records and the current selection.

pub mod data;
pub mod state;

pub use data::detail::details_for_year;
pub use data::loader::{ingest, ingest_with_report, load_file, IngestOptions, IngestReport, RowRejection};
pub use data::model::{JobTitleDetail, SalaryRecord, YearAggregate, FIELD_NAMES};
pub use data::summary::aggregate_by_year;
pub use state::{DashboardState, Selection};
