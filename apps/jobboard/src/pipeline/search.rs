//! Search/attribute filter: free-text query plus structured criteria.

use serde::{Deserialize, Serialize};

use crate::models::job::{parse_salary, Job, JobType};

/// Structured filter criteria. A `None`/empty field is a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// `None` means "all types".
    pub job_type: Option<JobType>,
    /// Case-insensitive substring of the job location; empty matches all.
    pub location: String,
    /// Inclusive lower salary bound; `None` is unbounded.
    pub min_salary: Option<i64>,
    /// Inclusive upper salary bound; `None` is unbounded.
    pub max_salary: Option<i64>,
}

/// Returns the jobs matching the query and every criterion.
///
/// A job is retained only if all five predicates hold:
/// - query empty, or a case-insensitive substring of title, company or
///   description;
/// - type criterion unset, or equal to the job's type;
/// - location criterion empty, or a case-insensitive substring of the
///   job's location;
/// - salary (parsed, 0 when missing/unparseable) within both bounds.
///
/// The filter is stable: survivors keep their input order. The input is
/// never mutated.
pub fn filter_jobs(all_jobs: &[Job], query: &str, criteria: &FilterCriteria) -> Vec<Job> {
    all_jobs
        .iter()
        .filter(|job| {
            matches_query(job, query)
                && matches_type(job, criteria.job_type)
                && matches_location(job, &criteria.location)
                && matches_salary(job, criteria.min_salary, criteria.max_salary)
        })
        .cloned()
        .collect()
}

fn matches_query(job: &Job, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    job.title.to_lowercase().contains(&needle)
        || job.company.to_lowercase().contains(&needle)
        || job.description.to_lowercase().contains(&needle)
}

fn matches_type(job: &Job, wanted: Option<JobType>) -> bool {
    match wanted {
        None => true,
        Some(t) => job.job_type == t,
    }
}

fn matches_location(job: &Job, wanted: &str) -> bool {
    wanted.is_empty() || job.location.to_lowercase().contains(&wanted.to_lowercase())
}

fn matches_salary(job: &Job, min: Option<i64>, max: Option<i64>) -> bool {
    let salary = parse_salary(job.salary.as_deref());
    min.map_or(true, |bound| salary >= bound) && max.map_or(true, |bound| salary <= bound)
}
