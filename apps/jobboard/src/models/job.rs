//! Job and comment wire models, matching the backend JSON exactly:
//! camelCase field names, kebab-case job types, epoch-millisecond
//! posted dates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employment type of a listing. Wire values are the kebab-case strings
/// the backend sends ("full-time", "part-time", "contract", "remote").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Remote => "remote",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "remote" => Ok(JobType::Remote),
            other => Err(format!(
                "unknown job type '{other}' (expected full-time, part-time, contract or remote)"
            )),
        }
    }
}

/// Optional audience bucket of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobCategory {
    Fresher,
    Experienced,
    Remote,
    Internship,
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobCategory::Fresher => "fresher",
            JobCategory::Experienced => "experienced",
            JobCategory::Remote => "remote",
            JobCategory::Internship => "internship",
        };
        f.write_str(s)
    }
}

/// Experience demanded by a listing, as the backend states it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExperienceRequired {
    pub years: String,
    pub level: String,
}

/// A comment on a job. `id` is unique within its job's thread; `date` is
/// stamped client-side when the comment is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub text: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

/// A single job listing as served by `GET /alljobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    /// Numeric timestamp on the wire (epoch milliseconds).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub posted_date: DateTime<Utc>,
    /// Free-form salary field; see [`Job::salary_value`].
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub experience_required: ExperienceRequired,
    #[serde(default)]
    pub category: Option<JobCategory>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub likes: u32,
}

impl Job {
    /// Numeric value of the salary field. Leading decimal digits are
    /// parsed; a missing or unparseable salary counts as 0.
    pub fn salary_value(&self) -> i64 {
        parse_salary(self.salary.as_deref())
    }
}

/// Parses the leading digit run of a salary string ("85000", "85000/yr").
/// Missing or digit-less input yields 0.
pub fn parse_salary(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
