use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};

use super::model::{RawRow, SalaryRecord, FIELD_NAMES};

// ---------------------------------------------------------------------------
// Options & diagnostics
// ---------------------------------------------------------------------------

/// Knobs for reading delimited salary text.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Field delimiter (default: comma).
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom delimiter, e.g. `b'\t'` for TSV exports.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Why a single row did not make it into the validated set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowRejection {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("malformed row: {0}")]
    Malformed(String),
    #[error("work_year is missing, zero or not an integer: {0:?}")]
    InvalidYear(String),
    #[error("salary_in_usd is missing, zero or not a number: {0:?}")]
    InvalidSalary(String),
}

/// Summary of one ingestion run. Purely diagnostic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    /// Data rows seen after the header (blank lines excluded).
    pub rows_read: usize,
    /// Rows that passed the validity gate.
    pub accepted: usize,
    /// Header fields that were expected but not found. Non-empty means
    /// nothing was ingested.
    pub missing_fields: Vec<String>,
    /// `(row number, reason)` for every dropped row; rows are 1-based and
    /// exclude the header.
    pub rejected: Vec<(usize, RowRejection)>,
}

impl IngestReport {
    pub fn header_recognized(&self) -> bool {
        self.missing_fields.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse raw CSV text into validated salary records.
///
/// Never fails: malformed rows are skipped and an empty or unrecognizable
/// input yields an empty vector. Input order is preserved.
pub fn ingest(raw: &str) -> Vec<SalaryRecord> {
    ingest_with_report(raw, &IngestOptions::default()).0
}

/// Like [`ingest`], but with explicit options and a report of dropped rows.
pub fn ingest_with_report(raw: &str, options: &IngestOptions) -> (Vec<SalaryRecord>, IngestReport) {
    let mut report = IngestReport::default();
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            log::warn!("Unreadable header row, treating dataset as empty: {e}");
            report.missing_fields = FIELD_NAMES.iter().map(|f| f.to_string()).collect();
            return (Vec::new(), report);
        }
    };

    report.missing_fields = missing_fields(&headers);
    if !report.header_recognized() {
        log::warn!(
            "Header row lacks {:?}, treating dataset as empty",
            report.missing_fields
        );
        return (Vec::new(), report);
    }

    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_no = idx + 1;
        report.rows_read += 1;

        match result
            .map_err(|e| RowRejection::Malformed(e.to_string()))
            .and_then(|row| validate_row(&headers, &row))
        {
            Ok(record) => records.push(record),
            Err(reason) => {
                log::debug!("Dropping row {row_no}: {reason}");
                report.rejected.push((row_no, reason));
            }
        }
    }

    report.accepted = records.len();
    log::info!(
        "Ingested {} of {} rows ({} dropped)",
        report.accepted,
        report.rows_read,
        report.rejected.len()
    );

    (records, report)
}

/// Read a salary CSV from disk and ingest it.
///
/// Only the read itself can fail; parsing degrades the same way as [`ingest`].
pub fn load_file(path: &Path) -> Result<Vec<SalaryRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading salary data from {}", path.display()))?;
    Ok(ingest(&text))
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

fn missing_fields(headers: &StringRecord) -> Vec<String> {
    FIELD_NAMES
        .iter()
        .filter(|name| !headers.iter().any(|h| h == **name))
        .map(|name| name.to_string())
        .collect()
}

fn validate_row(headers: &StringRecord, row: &StringRecord) -> Result<SalaryRecord, RowRejection> {
    if row.len() != headers.len() {
        return Err(RowRejection::ColumnCount {
            expected: headers.len(),
            found: row.len(),
        });
    }

    let raw: RawRow = row
        .deserialize(Some(headers))
        .map_err(|e| RowRejection::Malformed(e.to_string()))?;

    // Missing and zero are treated the same.
    let work_year = parse_integer(&raw.work_year)
        .and_then(|y| i32::try_from(y).ok())
        .filter(|y| *y != 0)
        .ok_or_else(|| RowRejection::InvalidYear(raw.work_year.clone()))?;

    let salary_in_usd = parse_number(&raw.salary_in_usd)
        .filter(|v| *v != 0.0)
        .ok_or_else(|| RowRejection::InvalidSalary(raw.salary_in_usd.clone()))?;

    Ok(SalaryRecord {
        work_year,
        experience_level: raw.experience_level,
        employment_type: raw.employment_type,
        job_title: raw.job_title,
        salary: parse_number(&raw.salary),
        salary_currency: raw.salary_currency,
        salary_in_usd,
        employee_residence: raw.employee_residence,
        remote_ratio: parse_integer(&raw.remote_ratio),
        company_location: raw.company_location,
        company_size: raw.company_size,
    })
}

/// A finite decimal number, surrounding whitespace allowed.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// An integer, also accepting decimal spellings like `2021.0`.
fn parse_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    parse_number(s)
        .filter(|v| v.fract() == 0.0 && *v >= i64::MIN as f64 && *v <= i64::MAX as f64)
        .map(|v| v as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HEADER: &str = "work_year,experience_level,employment_type,job_title,salary,salary_currency,salary_in_usd,employee_residence,remote_ratio,company_location,company_size";

    fn csv(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn parses_typed_fields() {
        let records = ingest(&csv(&["2022,SE,FT,Data Engineer,90000,EUR,97000,DE,50,DE,M"]));
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.work_year, 2022);
        assert_eq!(r.experience_level, "SE");
        assert_eq!(r.job_title, "Data Engineer");
        assert_eq!(r.salary, Some(90000.0));
        assert_eq!(r.salary_in_usd, 97000.0);
        assert_eq!(r.remote_ratio, Some(50));
        assert_eq!(r.company_size, "M");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(ingest("").is_empty());
        assert!(ingest("\n\n").is_empty());
    }

    #[test]
    fn header_only_yields_nothing() {
        let (records, report) = ingest_with_report(HEADER, &IngestOptions::default());
        assert!(records.is_empty());
        assert!(report.header_recognized());
        assert_eq!(report.rows_read, 0);
    }

    #[test]
    fn unrecognized_header_yields_nothing() {
        let text = "year,title,usd\n2020,Engineer,100000\n";
        let (records, report) = ingest_with_report(text, &IngestOptions::default());
        assert!(records.is_empty());
        assert!(!report.header_recognized());
        assert!(report.missing_fields.contains(&"work_year".to_string()));
    }

    #[test]
    fn header_columns_may_be_reordered() {
        let text = "job_title,work_year,salary_in_usd,experience_level,employment_type,salary,salary_currency,employee_residence,remote_ratio,company_location,company_size\n\
                    Analyst,2021,65000,MI,FT,65000,USD,US,0,US,S\n";
        let records = ingest(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].job_title, "Analyst");
        assert_eq!(records[0].work_year, 2021);
    }

    #[test]
    fn drops_missing_and_zero_gate_fields() {
        let text = csv(&[
            ",SE,FT,Engineer,1,USD,100000,US,0,US,M",
            "0,SE,FT,Engineer,1,USD,100000,US,0,US,M",
            "2020,SE,FT,Engineer,1,USD,,US,0,US,M",
            "2020,SE,FT,Engineer,1,USD,0,US,0,US,M",
            "2020,SE,FT,Engineer,1,USD,abc,US,0,US,M",
            "twenty,SE,FT,Engineer,1,USD,100000,US,0,US,M",
            "2020,SE,FT,Engineer,1,USD,NaN,US,0,US,M",
            "2020,SE,FT,Engineer,1,USD,100000,US,0,US,M",
        ]);
        let (records, report) = ingest_with_report(&text, &IngestOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(report.rows_read, 8);
        assert_eq!(report.rejected.len(), 7);
        assert!(matches!(report.rejected[0], (1, RowRejection::InvalidYear(_))));
        assert!(matches!(report.rejected[2], (3, RowRejection::InvalidSalary(_))));
    }

    #[test]
    fn wrong_column_count_is_skipped_not_fatal() {
        let text = csv(&[
            "2020,SE,FT,Engineer,1,USD,100000,US,0,US",
            "2020,SE,FT,Engineer,1,USD,100000,US,0,US,M,extra",
            "2021,MI,FT,Manager,1,USD,150000,US,0,US,L",
        ]);
        let (records, report) = ingest_with_report(&text, &IngestOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].job_title, "Manager");
        assert_eq!(
            report.rejected[0].1,
            RowRejection::ColumnCount { expected: 11, found: 10 }
        );
    }

    #[test]
    fn non_numeric_optional_fields_become_none() {
        let records = ingest(&csv(&["2020,SE,FT,Engineer,n/a,USD,100000,US,,US,M"]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].salary, None);
        assert_eq!(records[0].remote_ratio, None);
    }

    #[test]
    fn numeric_coercion_tolerates_whitespace_and_decimal_years() {
        let records = ingest(&csv(&["2020.0,SE,FT,Engineer,1, USD, 123.5 ,US,100,US,M"]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].work_year, 2020);
        assert_eq!(records[0].salary_in_usd, 123.5);
        // text fields are left untouched
        assert_eq!(records[0].salary_currency, " USD");
    }

    #[test]
    fn fractional_year_is_rejected() {
        assert!(ingest(&csv(&["2020.5,SE,FT,Engineer,1,USD,100000,US,0,US,M"])).is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let records = ingest(&csv(&[
            "2021,SE,FT,C,1,USD,3,US,0,US,M",
            "2020,SE,FT,A,1,USD,1,US,0,US,M",
            "2022,SE,FT,B,1,USD,2,US,0,US,M",
        ]));
        let titles: Vec<&str> = records.iter().map(|r| r.job_title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[test]
    fn quoted_titles_with_delimiters() {
        let records = ingest(&csv(&["2020,SE,FT,\"Head of Data, EMEA\",1,USD,200000,GB,100,GB,L"]));
        assert_eq!(records[0].job_title, "Head of Data, EMEA");
    }

    #[test]
    fn custom_delimiter() {
        let text = csv(&["2020,SE,FT,Engineer,1,USD,100000,US,0,US,M"]).replace(',', "\t");
        let options = IngestOptions::new().with_delimiter(b'\t');
        let (records, _) = ingest_with_report(&text, &options);
        assert_eq!(records.len(), 1);
        assert!(ingest(&text).is_empty());
    }

    proptest! {
        #[test]
        fn prop_every_ingested_record_passes_gate(
            cells in prop::collection::vec(
                (
                    prop::sample::select(vec!["", "0", "-0", "2020", " 2021 ", "2020.0", "abc", "99999999999"]),
                    prop::sample::select(vec!["", "0", "0.0", "-0", "1e5", "NaN", "inf", "12.5", "x", "-300"]),
                ),
                0..40,
            )
        ) {
            let rows: Vec<String> = cells
                .iter()
                .map(|(year, usd)| format!("{year},SE,FT,Engineer,1,USD,{usd},US,0,US,M"))
                .collect();
            let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
            let (records, report) = ingest_with_report(&csv(&row_refs), &IngestOptions::default());

            prop_assert_eq!(report.accepted + report.rejected.len(), cells.len());
            for r in &records {
                prop_assert!(r.work_year != 0);
                prop_assert!(r.salary_in_usd != 0.0 && r.salary_in_usd.is_finite());
            }
        }
    }

    #[test]
    fn load_file_reports_missing_path() {
        let err = load_file(Path::new("/definitely/not/here/salaries.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("reading salary data"));
    }
}
