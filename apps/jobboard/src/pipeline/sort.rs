//! Sort stage: stable, non-mutating ordering of the job list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::job::Job;

/// The orderings the board offers. The date orders drive the main list;
/// the salary orders use the parsed salary value (missing salaries sort
/// as 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Newest,
    Oldest,
    SalaryLowToHigh,
    SalaryHighToLow,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::SalaryLowToHigh => "salary-low-to-high",
            SortOrder::SalaryHighToLow => "salary-high-to-low",
        };
        f.write_str(s)
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "salary-low-to-high" => Ok(SortOrder::SalaryLowToHigh),
            "salary-high-to-low" => Ok(SortOrder::SalaryHighToLow),
            other => Err(format!(
                "unknown sort order '{other}' (expected newest, oldest, salary-low-to-high or salary-high-to-low)"
            )),
        }
    }
}

/// Returns a newly ordered copy of `jobs`; the input is never mutated.
///
/// The underlying sort is stable, so ties (equal posted date, equal
/// salary) keep their relative input order, and sorting an already
/// sorted list is a no-op.
pub fn sort_jobs(jobs: &[Job], order: SortOrder) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    match order {
        SortOrder::Newest => sorted.sort_by(|a, b| b.posted_date.cmp(&a.posted_date)),
        SortOrder::Oldest => sorted.sort_by(|a, b| a.posted_date.cmp(&b.posted_date)),
        SortOrder::SalaryLowToHigh => sorted.sort_by_key(|job| job.salary_value()),
        SortOrder::SalaryHighToLow => {
            sorted.sort_by(|a, b| b.salary_value().cmp(&a.salary_value()))
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{ExperienceRequired, JobType};
    use chrono::{TimeZone, Utc};

    fn make_job(id: i64, posted_millis: i64, salary: Option<&str>) -> Job {
        Job {
            id,
            title: format!("Job {id}"),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            description: String::new(),
            posted_date: Utc.timestamp_millis_opt(posted_millis).unwrap(),
            salary: salary.map(|s| s.to_string()),
            required_skills: vec![],
            experience_required: ExperienceRequired::default(),
            category: None,
            comments: vec![],
            likes: 0,
        }
    }

    fn ids(jobs: &[Job]) -> Vec<i64> {
        jobs.iter().map(|j| j.id).collect()
    }

    #[test]
    fn test_newest_is_descending_by_posted_date() {
        let jobs = vec![
            make_job(1, 100, None),
            make_job(2, 300, None),
            make_job(3, 200, None),
        ];
        assert_eq!(ids(&sort_jobs(&jobs, SortOrder::Newest)), vec![2, 3, 1]);
    }

    #[test]
    fn test_oldest_is_ascending_by_posted_date() {
        let jobs = vec![
            make_job(1, 100, None),
            make_job(2, 300, None),
            make_job(3, 200, None),
        ];
        assert_eq!(ids(&sort_jobs(&jobs, SortOrder::Oldest)), vec![1, 3, 2]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let jobs = vec![make_job(1, 100, None), make_job(2, 300, None)];
        let before = ids(&jobs);
        let _ = sort_jobs(&jobs, SortOrder::Newest);
        assert_eq!(ids(&jobs), before);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let jobs = vec![
            make_job(7, 100, None),
            make_job(8, 100, None),
            make_job(9, 100, None),
        ];
        assert_eq!(ids(&sort_jobs(&jobs, SortOrder::Newest)), vec![7, 8, 9]);
        assert_eq!(ids(&sort_jobs(&jobs, SortOrder::Oldest)), vec![7, 8, 9]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let jobs = vec![
            make_job(1, 100, None),
            make_job(2, 300, None),
            make_job(3, 200, None),
        ];
        let once = sort_jobs(&jobs, SortOrder::Newest);
        let twice = sort_jobs(&once, SortOrder::Newest);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_newest_reversed_equals_oldest_without_ties() {
        let jobs = vec![
            make_job(1, 100, None),
            make_job(2, 300, None),
            make_job(3, 200, None),
        ];
        let mut newest = sort_jobs(&jobs, SortOrder::Newest);
        newest.reverse();
        assert_eq!(newest, sort_jobs(&jobs, SortOrder::Oldest));
    }

    #[test]
    fn test_salary_orders_use_parsed_value() {
        let jobs = vec![
            make_job(1, 100, Some("90000")),
            make_job(2, 100, None),            // parses as 0
            make_job(3, 100, Some("45000/yr")),
        ];
        assert_eq!(
            ids(&sort_jobs(&jobs, SortOrder::SalaryLowToHigh)),
            vec![2, 3, 1]
        );
        assert_eq!(
            ids(&sort_jobs(&jobs, SortOrder::SalaryHighToLow)),
            vec![1, 3, 2]
        );
    }

    #[test]
    fn test_salary_ties_keep_input_order() {
        let jobs = vec![
            make_job(4, 100, Some("50000")),
            make_job(5, 100, Some("50000")),
        ];
        assert_eq!(
            ids(&sort_jobs(&jobs, SortOrder::SalaryLowToHigh)),
            vec![4, 5]
        );
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!(SortOrder::from_str("newest").unwrap(), SortOrder::Newest);
        assert_eq!(
            SortOrder::from_str("salary-high-to-low").unwrap(),
            SortOrder::SalaryHighToLow
        );
        assert!(SortOrder::from_str("alphabetical").is_err());
    }
}
