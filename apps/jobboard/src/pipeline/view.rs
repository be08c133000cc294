//! View selector: picks the visible list (all vs recommended) and feeds
//! it through the sort stage.

use std::fmt;
use std::str::FromStr;

use crate::models::job::Job;
use crate::models::profile::UserProfile;
use crate::pipeline::recommend::recommend;
use crate::pipeline::search::{filter_jobs, FilterCriteria};
use crate::pipeline::sort::{sort_jobs, SortOrder};

/// Which section of the board is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSection {
    All,
    Recommended,
}

impl fmt::Display for ActiveSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActiveSection::All => "all",
            ActiveSection::Recommended => "recommended",
        };
        f.write_str(s)
    }
}

impl FromStr for ActiveSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ActiveSection::All),
            "recommended" => Ok(ActiveSection::Recommended),
            other => Err(format!(
                "unknown section '{other}' (expected all or recommended)"
            )),
        }
    }
}

/// Counts shown on the section toggle labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCounts {
    pub all: usize,
    pub recommended: usize,
}

/// The full board state: the fetched job list plus every user-controlled
/// input of the pipeline.
///
/// Recomputation policy: every read recomputes from the raw list. There
/// is no caching and no diffing against prior results, so a change to
/// any input (query, criteria, sort order, section, profile, the list
/// itself) is reflected by the next call.
#[derive(Debug, Clone)]
pub struct BoardView {
    jobs: Vec<Job>,
    pub query: String,
    pub criteria: FilterCriteria,
    pub order: SortOrder,
    pub section: ActiveSection,
    pub profile: Option<UserProfile>,
}

impl BoardView {
    pub fn new(jobs: Vec<Job>, profile: Option<UserProfile>) -> Self {
        Self {
            jobs,
            query: String::new(),
            criteria: FilterCriteria::default(),
            order: SortOrder::Newest,
            section: ActiveSection::All,
            profile,
        }
    }

    /// The search/attribute-filtered list. This is the "all" section.
    pub fn filtered(&self) -> Vec<Job> {
        filter_jobs(&self.jobs, &self.query, &self.criteria)
    }

    /// The recommended subset of the filtered list.
    pub fn recommended(&self) -> Vec<Job> {
        recommend(&self.filtered(), self.profile.as_ref())
    }

    /// The list the renderer displays: the active section, sorted.
    pub fn displayed(&self) -> Vec<Job> {
        let section_jobs = match self.section {
            ActiveSection::All => self.filtered(),
            ActiveSection::Recommended => self.recommended(),
        };
        sort_jobs(&section_jobs, self.order)
    }

    pub fn section_counts(&self) -> SectionCounts {
        SectionCounts {
            all: self.filtered().len(),
            recommended: self.recommended().len(),
        }
    }
}
