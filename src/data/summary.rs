use std::collections::HashMap;

use super::model::{SalaryRecord, YearAggregate};

// ---------------------------------------------------------------------------
// Per-year accumulator
// ---------------------------------------------------------------------------

/// Running `(count, sum)` for one year while the records are scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct YearAccumulator {
    pub count: usize,
    pub salary_sum: f64,
}

impl YearAccumulator {
    fn add(&mut self, salary_in_usd: f64) {
        self.count += 1;
        self.salary_sum += salary_in_usd;
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Roll validated records up into one [`YearAggregate`] per distinct year.
///
/// Single pass. Groups come out in the order their year is first seen; callers
/// must not rely on any particular order and sort for display themselves.
pub fn aggregate_by_year(records: &[SalaryRecord]) -> Vec<YearAggregate> {
    let mut slots: HashMap<i32, usize> = HashMap::new();
    let mut groups: Vec<(i32, YearAccumulator)> = Vec::new();

    for record in records {
        let slot = *slots.entry(record.work_year).or_insert_with(|| {
            groups.push((record.work_year, YearAccumulator::default()));
            groups.len() - 1
        });
        groups[slot].1.add(record.salary_in_usd);
    }

    finish(groups)
}

/// Turn accumulators into aggregates, refusing any group with no records.
pub(crate) fn finish(groups: Vec<(i32, YearAccumulator)>) -> Vec<YearAggregate> {
    groups
        .into_iter()
        .filter_map(|(year, acc)| {
            if acc.count == 0 {
                log::error!("Year {year} has an empty accumulator; leaving it out of the summary");
                return None;
            }
            Some(YearAggregate {
                year,
                total_jobs: acc.count,
                average_salary: acc.salary_sum / acc.count as f64,
            })
        })
        .collect()
}
