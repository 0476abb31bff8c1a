use serde::Serialize;

use crate::table::Table;
use crate::timestamp;

/// Column positions in the source form export. Position 8 carries a column
/// that was retired from the published feed and is deliberately skipped.
const COL_JOB_LINK: usize = 1;
const COL_JOB_TITLE: usize = 6;

/// One job posting in the published JSON feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub timestamp: i64,
    pub job_link: String,
    pub additional_info: String,
    pub include_salary_range: String,
    pub salary_range: String,
    pub employer_name: String,
    pub job_title: String,
    pub working_style: String,
    pub compensation_info: String,
    pub compliance_plan: String,
    pub contact_slack: String,
    pub role_type: String,
    pub visa_sponsorship: String,
    pub hiring_process: String,
    pub comp_low: String,
    pub comp_high: String,
}

/// Build the JSON feed from a parsed table, newest submissions first.
///
/// Rows are dropped when they are blank or residual instruction lines, when
/// the job title or link field is empty, or when the timestamp fails to
/// parse (the zero sentinel). Dropping is silent beyond the count implied by
/// the output length; the source sheet is hand-curated and partial rows are
/// expected.
pub fn convert_rows(table: &Table) -> Vec<JobRecord> {
    let mut jobs: Vec<JobRecord> = table
        .rows
        .iter()
        .filter(|row| row.is_data())
        .filter(|row| !row.get(COL_JOB_TITLE).is_empty() && !row.get(COL_JOB_LINK).is_empty())
        .filter_map(|row| {
            let unix = timestamp::unix_timestamp(row.get(0));
            if unix == 0 {
                return None;
            }
            Some(JobRecord {
                timestamp: unix,
                job_link: row.get(1).to_string(),
                additional_info: row.get(2).to_string(),
                include_salary_range: row.get(3).to_string(),
                salary_range: row.get(4).to_string(),
                employer_name: row.get(5).to_string(),
                job_title: row.get(6).to_string(),
                working_style: row.get(7).to_string(),
                compensation_info: row.get(9).to_string(),
                compliance_plan: row.get(10).to_string(),
                contact_slack: row.get(11).to_string(),
                role_type: row.get(12).to_string(),
                visa_sponsorship: row.get(13).to_string(),
                hiring_process: row.get(14).to_string(),
                comp_low: row.get(15).to_string(),
                comp_high: row.get(16).to_string(),
            })
        })
        .collect();

    jobs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    jobs
}
