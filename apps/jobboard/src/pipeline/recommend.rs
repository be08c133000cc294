//! Recommendation filter: jobs whose required skills intersect the
//! user's stored skill set.

use crate::models::job::Job;
use crate::models::profile::UserProfile;

/// Returns the jobs recommended for the given profile.
///
/// A job is recommended when at least one of its required skills equals
/// one of the profile skills, compared case-insensitively. A single
/// shared skill is sufficient; subset containment is not required.
///
/// An absent profile, or one with no skills, recommends everything: new
/// and unconfigured users see the full list. The filter is stable and
/// pure.
pub fn recommend(all_jobs: &[Job], profile: Option<&UserProfile>) -> Vec<Job> {
    let skills = match profile {
        Some(p) if p.has_skills() => &p.skills,
        _ => return all_jobs.to_vec(),
    };

    all_jobs
        .iter()
        .filter(|job| matches_user_skills(job, skills))
        .cloned()
        .collect()
}

fn matches_user_skills(job: &Job, user_skills: &[String]) -> bool {
    job.required_skills.iter().any(|job_skill| {
        user_skills
            .iter()
            .any(|user_skill| job_skill.eq_ignore_ascii_case(user_skill))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{ExperienceRequired, JobType};
    use chrono::{TimeZone, Utc};

    fn make_job(id: i64, skills: &[&str]) -> Job {
        Job {
            id,
            title: format!("Job {id}"),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Remote,
            description: String::new(),
            posted_date: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            salary: None,
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_required: ExperienceRequired::default(),
            category: None,
            comments: vec![],
            likes: 0,
        }
    }

    fn profile_with(skills: &[&str]) -> UserProfile {
        UserProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_absent_profile_recommends_everything() {
        let jobs = vec![make_job(1, &["React"]), make_job(2, &["Go"])];
        assert_eq!(recommend(&jobs, None), jobs);
    }

    #[test]
    fn test_empty_skills_recommends_everything() {
        let jobs = vec![make_job(1, &["React"]), make_job(2, &["Go"])];
        let profile = profile_with(&[]);
        assert_eq!(recommend(&jobs, Some(&profile)), jobs);
    }

    #[test]
    fn test_single_shared_skill_is_sufficient_case_insensitive() {
        let jobs = vec![make_job(1, &["React"]), make_job(2, &["Go"])];
        let profile = profile_with(&["react"]);
        let result = recommend(&jobs, Some(&profile));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_any_match_not_subset_containment() {
        // The job demands three skills; the user has only one of them.
        let jobs = vec![make_job(1, &["Rust", "Kubernetes", "Postgres"])];
        let profile = profile_with(&["postgres"]);
        assert_eq!(recommend(&jobs, Some(&profile)).len(), 1);
    }

    #[test]
    fn test_job_without_required_skills_never_matches() {
        let jobs = vec![make_job(1, &[]), make_job(2, &["Rust"])];
        let profile = profile_with(&["Rust"]);
        let result = recommend(&jobs, Some(&profile));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_no_overlap_recommends_nothing() {
        let jobs = vec![make_job(1, &["React"]), make_job(2, &["Go"])];
        let profile = profile_with(&["COBOL"]);
        assert!(recommend(&jobs, Some(&profile)).is_empty());
    }

    #[test]
    fn test_recommend_preserves_input_order() {
        let jobs = vec![
            make_job(5, &["Rust"]),
            make_job(3, &["Rust"]),
            make_job(9, &["Rust"]),
        ];
        let profile = profile_with(&["rust"]);
        let ids: Vec<i64> = recommend(&jobs, Some(&profile))
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }
}
