use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field names – the eleven columns of the salary dataset
// ---------------------------------------------------------------------------

/// Column names expected in the header row, in their canonical order.
pub const FIELD_NAMES: [&str; 11] = [
    "work_year",
    "experience_level",
    "employment_type",
    "job_title",
    "salary",
    "salary_currency",
    "salary_in_usd",
    "employee_residence",
    "remote_ratio",
    "company_location",
    "company_size",
];

// ---------------------------------------------------------------------------
// SalaryRecord – one validated row of the dataset
// ---------------------------------------------------------------------------

/// A single validated salary row.
///
/// `work_year` and `salary_in_usd` are guaranteed non-zero by the ingestion
/// gate. The other numeric columns are kept when they parse and become `None`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRecord {
    pub work_year: i32,
    /// Category code, e.g. `SE`, `MI`.
    pub experience_level: String,
    /// Category code, e.g. `FT`, `PT`.
    pub employment_type: String,
    pub job_title: String,
    /// Salary in the original currency.
    pub salary: Option<f64>,
    pub salary_currency: String,
    pub salary_in_usd: f64,
    pub employee_residence: String,
    /// Percentage of remote work (0, 50, 100 in practice).
    pub remote_ratio: Option<i64>,
    pub company_location: String,
    /// Category code, e.g. `S`, `M`, `L`.
    pub company_size: String,
}

/// A row as it comes off the CSV reader, before any numeric coercion.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawRow {
    pub work_year: String,
    pub experience_level: String,
    pub employment_type: String,
    pub job_title: String,
    pub salary: String,
    pub salary_currency: String,
    pub salary_in_usd: String,
    pub employee_residence: String,
    pub remote_ratio: String,
    pub company_location: String,
    pub company_size: String,
}

// ---------------------------------------------------------------------------
// Derived snapshots handed to the presentation layer
// ---------------------------------------------------------------------------

/// Job count and mean USD salary for one `work_year`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearAggregate {
    pub year: i32,
    /// Always at least 1.
    pub total_jobs: usize,
    /// Full precision; rounding is up to whoever displays it.
    pub average_salary: f64,
}

/// Number of records carrying `title` within the selected year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobTitleDetail {
    pub title: String,
    pub count: usize,
}
