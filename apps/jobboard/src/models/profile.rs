//! User profile and parsed-résumé models.
//!
//! The profile is what the local store persists under `userProfile`; the
//! parsed résumé is what `POST /resume/upload` returns. Every field is
//! defaulted so a minimal `{"skills": [...]}` record still deserializes.

use serde::{Deserialize, Serialize};

/// The locally persisted user profile. The recommendation filter only
/// reads `skills`; the remaining fields are filled by the profile form,
/// usually from a parsed résumé.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub career_goals: String,
}

impl UserProfile {
    pub fn has_skills(&self) -> bool {
        !self.skills.is_empty()
    }
}

/// One work-history entry in a parsed résumé.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
}

/// One education entry in a parsed résumé.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

/// Structured fields extracted from an uploaded résumé by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub career_goals: String,
}

impl ParsedResume {
    /// One line per experience entry, newline-joined, the way the profile
    /// form displays work history.
    pub fn experience_summary(&self) -> String {
        self.experience
            .iter()
            .map(|e| format!("{} at {} ({})", e.job_title, e.company, e.duration))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One line per education entry, newline-joined.
    pub fn education_summary(&self) -> String {
        self.education
            .iter()
            .map(|e| format!("{} from {} ({})", e.degree, e.institution, e.year))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Converts the parse result into the profile record the store
    /// persists, flattening the structured histories.
    pub fn into_profile(self) -> UserProfile {
        let experience = self.experience_summary();
        let education = self.education_summary();
        UserProfile {
            full_name: self.full_name,
            email: self.email,
            skills: self.skills,
            experience,
            education,
            career_goals: self.career_goals,
        }
    }
}
