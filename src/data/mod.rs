/// Data layer: record types, ingestion and the two rollups.
///
/// Architecture:
/// ```text
///   salaries.csv (raw text)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validity gate → Vec<SalaryRecord>
///   └──────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │ summary   │          │  detail   │  (year selected)
///   └──────────┘          └──────────┘
///   Vec<YearAggregate>    Vec<JobTitleDetail>
/// ```

pub mod detail;
pub mod loader;
pub mod model;
pub mod summary;
