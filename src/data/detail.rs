use std::collections::HashMap;

use super::model::{JobTitleDetail, SalaryRecord};

/// Count job titles among the records of a single `year`.
///
/// Titles are compared byte-for-byte: `"Engineer"` and `"engineer "` are
/// separate entries. A year with no records yields an empty vector. Entries
/// come out in first-seen order, which callers should not depend on.
pub fn details_for_year(records: &[SalaryRecord], year: i32) -> Vec<JobTitleDetail> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut details: Vec<JobTitleDetail> = Vec::new();

    for record in records.iter().filter(|r| r.work_year == year) {
        let title = record.job_title.as_str();
        match slots.get(title) {
            Some(&slot) => details[slot].count += 1,
            None => {
                slots.insert(title, details.len());
                details.push(JobTitleDetail {
                    title: title.to_string(),
                    count: 1,
                });
            }
        }
    }

    details
}
